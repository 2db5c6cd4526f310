//! 品詞コードとパラダイムからの分類
//!
//! 規則表は上から順に評価され、最初に一致した規則が採用されます。
//! 表の順序には意味があります(例: `_5n` は `_5` より先に判定する)。

use crate::lexicon::{Gender, WordType};

/// 先頭3文字で判定する品詞コード
const THREE_LETTER_TYPES: [(&str, WordType); 4] = [
    ("vbm", WordType::Verb),
    ("nnm", WordType::Noun),
    ("avm", WordType::Adjective),
    ("abm", WordType::Adverb),
];

/// 先頭2文字で判定する品詞コード
const TWO_LETTER_TYPES: [(&str, WordType); 9] = [
    ("nn", WordType::Noun),
    ("vb", WordType::Verb),
    ("av", WordType::Adjective),
    ("pm", WordType::ProperNoun),
    ("ab", WordType::Adverb),
    ("pp", WordType::Preposition),
    ("pn", WordType::Pronoun),
    ("in", WordType::Interjection),
    ("nl", WordType::Numeral),
];

/// 名詞の変化グループ。いずれかの部分文字列を含めば一致します。
const NOUN_GROUPS: [(&[&str], &str); 7] = [
    (&["_0"], "Uncountable"),
    (&["_1"], "Declension 1 (en, -or)"),
    (&["_2"], "Declension 2 (en, -ar)"),
    (&["_3"], "Declension 3 (en, -er)"),
    (&["_5n"], "Declension 4 (ett, -n)"),
    (&["_6"], "Declension 5 (ett, no change)"),
    (&["_4", "_5"], "Declension variant"),
];

/// パラダイム全体で判定する不規則動詞
const IRREGULAR_VERB_GROUPS: [(&str, &str); 2] = [
    ("vb_4m_vara", "Irregular verb (vara)"),
    ("vb_2m_ha", "Irregular verb (ha)"),
];

/// 動詞の活用グループ。いずれかの部分文字列を含めば一致します。
const VERB_GROUPS: [(&[&str], &str); 4] = [
    (&["4"], "Verb group 4 (strong)"),
    (&["1", "va"], "Verb group 1 (-ar)"),
    (&["2"], "Verb group 2 (-er)"),
    (&["3"], "Verb group 3 (short)"),
];

/// 中性名詞を示すパラダイムの部分文字列
const NEUTER_MARKERS: [&str; 3] = ["nn_6", "nn_5n", "_n_"];

/// 先頭 `n` 文字を返します。
pub(crate) fn char_prefix(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or(s, |(i, _)| &s[..i])
}

/// 品詞コードから語の分類を決めます。
pub fn word_type(part_of_speech: &str) -> WordType {
    if let Some((_, word_type)) = THREE_LETTER_TYPES
        .iter()
        .find(|(code, _)| part_of_speech.starts_with(code))
    {
        return word_type.clone();
    }
    let code = char_prefix(part_of_speech, 2);
    TWO_LETTER_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(WordType::Unknown, |(_, word_type)| word_type.clone())
}

/// 変化グループのラベルを決めます。一致する規則がなければ空文字列です。
pub fn group(paradigm: &str, word_type: &WordType) -> &'static str {
    let rules: &[(&[&str], &str)] = match word_type {
        WordType::Noun => &NOUN_GROUPS,
        WordType::Verb => {
            if let Some(&(_, label)) = IRREGULAR_VERB_GROUPS.iter().find(|(p, _)| *p == paradigm) {
                return label;
            }
            &VERB_GROUPS
        }
        _ => return "",
    };
    rules
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|p| paradigm.contains(p)))
        .map_or("", |&(_, label)| label)
}

/// 名詞の文法性を決めます。
pub fn gender(paradigm: &str) -> Gender {
    if NEUTER_MARKERS.iter().any(|m| paradigm.contains(m)) || paradigm.ends_with("_n") {
        Gender::Ett
    } else {
        Gender::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_type() {
        assert_eq!(word_type("nn"), WordType::Noun);
        assert_eq!(word_type("vbm"), WordType::Verb);
        assert_eq!(word_type("abm"), WordType::Adverb);
        assert_eq!(word_type("pma"), WordType::ProperNoun);
        assert_eq!(word_type("nl"), WordType::Numeral);
        assert_eq!(word_type("kn"), WordType::Unknown);
        assert_eq!(word_type("n"), WordType::Unknown);
        assert_eq!(word_type(""), WordType::Unknown);
    }

    #[test]
    fn test_noun_group_order() {
        assert_eq!(group("nn_0u_tro", &WordType::Noun), "Uncountable");
        assert_eq!(group("nn_1u_flicka", &WordType::Noun), "Declension 1 (en, -or)");
        assert_eq!(group("nn_5n_äpple", &WordType::Noun), "Declension 4 (ett, -n)");
        assert_eq!(group("nn_5u_bagare", &WordType::Noun), "Declension variant");
        assert_eq!(group("nn_6n_hus", &WordType::Noun), "Declension 5 (ett, no change)");
        assert_eq!(group("nn_vu_papper", &WordType::Noun), "");
    }

    #[test]
    fn test_verb_group_order() {
        assert_eq!(group("vb_4m_vara", &WordType::Verb), "Irregular verb (vara)");
        assert_eq!(group("vb_2m_ha", &WordType::Verb), "Irregular verb (ha)");
        assert_eq!(group("vb_4a_springa", &WordType::Verb), "Verb group 4 (strong)");
        assert_eq!(group("vb_1a_laga", &WordType::Verb), "Verb group 1 (-ar)");
        assert_eq!(group("vb_va_kunna", &WordType::Verb), "Verb group 1 (-ar)");
        assert_eq!(group("vb_2a_köpa", &WordType::Verb), "Verb group 2 (-er)");
        assert_eq!(group("vb_3a_bo", &WordType::Verb), "Verb group 3 (short)");
        assert_eq!(group("vb_oregelb", &WordType::Verb), "");
    }

    #[test]
    fn test_group_of_other_types() {
        assert_eq!(group("av_1_stor", &WordType::Adjective), "");
        assert_eq!(group("ab_1_fort", &WordType::Adverb), "");
    }

    #[test]
    fn test_gender() {
        assert_eq!(gender("nn_6n_hus"), Gender::Ett);
        assert_eq!(gender("nn_5n_äpple"), Gender::Ett);
        assert_eq!(gender("nn_3n_x_n_y"), Gender::Ett);
        assert_eq!(gender("nn_vn"), Gender::En);
        assert_eq!(gender("nn_abc_n"), Gender::Ett);
        assert_eq!(gender("nn_2u_bil"), Gender::En);
    }

    #[test]
    fn test_char_prefix() {
        assert_eq!(char_prefix("vbm", 2), "vb");
        assert_eq!(char_prefix("v", 2), "v");
        assert_eq!(char_prefix("åäö", 2), "åä");
    }
}
