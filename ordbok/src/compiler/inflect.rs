//! 活用形の生成
//!
//! 語、パラダイム、分類だけから活用表を作る純粋関数です。
//! 規則で扱えない語は [`Forms::None`] になります。

use crate::lexicon::{AdjectiveForms, Forms, NO_FORM, NounForms, VerbForms, WordType};

/// パラダイムで引く不規則動詞の活用表
const IRREGULAR_VERBS: [(&str, [&str; 4]); 2] = [
    ("vb_4m_vara", ["vara", "är", "var", "varit"]),
    ("vb_2m_ha", ["ha", "har", "hade", "haft"]),
];

/// 語で引く不規則形容詞の活用表
const IRREGULAR_ADJECTIVES: [(&str, [&str; 5]); 1] =
    [("stor", ["stor", "stort", "stora", "större", "störst"])];

/// 過去形が `-te` になる語幹末の無声子音
const VOICELESS: [char; 5] = ['p', 't', 'k', 's', 'x'];

/// `-n` 型の中性名詞で語末に直接 `-t` を付ける母音
const BARE_VOWELS: [char; 7] = ['o', 'i', 'u', 'y', 'å', 'ä', 'ö'];

/// 活用表を生成します。
///
/// # 例
///
/// ```
/// use ordbok::compiler::inflect::generate_forms;
/// use ordbok::lexicon::{Forms, NounForms, WordType};
///
/// let forms = generate_forms("hus", "nn_6n_hus", &WordType::Noun);
/// assert_eq!(forms, Forms::Noun(NounForms::new(["hus", "huset", "hus", "husen"])));
/// ```
pub fn generate_forms(word: &str, paradigm: &str, word_type: &WordType) -> Forms {
    match word_type {
        WordType::Verb => verb_forms(word, paradigm),
        WordType::Noun => noun_forms(word, paradigm),
        WordType::Adjective => adjective_forms(word),
        _ => Forms::None,
    }
}

fn verb_forms(word: &str, paradigm: &str) -> Forms {
    if let Some((_, [inf, present, past, supine])) =
        IRREGULAR_VERBS.iter().find(|(p, _)| *p == paradigm)
    {
        return Forms::Verb(VerbForms::new(*inf, *present, *past, *supine));
    }

    if paradigm.contains('1') || paradigm.contains("va") {
        let Some(stem) = word.strip_suffix('a') else {
            return Forms::None;
        };
        Forms::Verb(VerbForms::new(
            word.to_string(),
            format!("{word}r"),
            format!("{stem}ade"),
            format!("{stem}at"),
        ))
    } else if paradigm.contains('2') {
        let Some(stem) = word.strip_suffix('a') else {
            return Forms::None;
        };
        let past = if stem.ends_with(VOICELESS) {
            format!("{stem}te")
        } else {
            format!("{stem}de")
        };
        Forms::Verb(VerbForms::new(
            word.to_string(),
            format!("{stem}er"),
            past,
            format!("{stem}t"),
        ))
    } else {
        Forms::None
    }
}

fn noun_forms(w: &str, paradigm: &str) -> Forms {
    let slots = if paradigm.contains("_0") {
        [w.to_string(), format!("{w}en"), NO_FORM.to_string(), NO_FORM.to_string()]
    } else if paradigm.contains("_1") {
        match w.strip_suffix('a') {
            Some(s) => [w.to_string(), format!("{w}n"), format!("{s}or"), format!("{s}orna")],
            None => [w.to_string(), format!("{w}n"), format!("{w}or"), format!("{w}orna")],
        }
    } else if paradigm.contains("_2") {
        [w.to_string(), format!("{w}en"), format!("{w}ar"), format!("{w}arna")]
    } else if paradigm.contains("_3") {
        [w.to_string(), format!("{w}en"), format!("{w}er"), format!("{w}erna")]
    } else if paradigm.contains("nn_5n") {
        neuter_n_forms(w)
    } else if paradigm.contains("_6") {
        [w.to_string(), format!("{w}et"), w.to_string(), format!("{w}en")]
    } else {
        return Forms::None;
    };
    Forms::Noun(NounForms::new(slots))
}

/// `äpple` 型(複数形が `-n`)の中性名詞
fn neuter_n_forms(w: &str) -> [String; 4] {
    if let Some(s) = w.strip_suffix('e') {
        [w.to_string(), format!("{s}et"), format!("{s}en"), format!("{s}ena")]
    } else if let Some(s) = w.strip_suffix('a') {
        [w.to_string(), format!("{s}at"), format!("{s}an"), format!("{s}ana")]
    } else if let Some(s) = w.strip_suffix("um") {
        [w.to_string(), format!("{s}et"), format!("{s}a"), format!("{s}ana")]
    } else if w.ends_with(BARE_VOWELS) {
        [w.to_string(), format!("{w}t"), format!("{w}n"), format!("{w}na")]
    } else {
        [w.to_string(), format!("{w}et"), format!("{w}n"), format!("{w}na")]
    }
}

fn adjective_forms(w: &str) -> Forms {
    if let Some((_, [en, ett, plural, comparative, superlative])) =
        IRREGULAR_ADJECTIVES.iter().find(|(word, _)| *word == w)
    {
        return Forms::Adjective(AdjectiveForms::new(
            *en,
            *ett,
            *plural,
            *comparative,
            *superlative,
        ));
    }

    let ett = if w.ends_with(['t', 'd']) {
        w.to_string()
    } else {
        format!("{w}t")
    };
    let plural = if w.ends_with('a') {
        w.to_string()
    } else {
        format!("{w}a")
    };
    Forms::Adjective(AdjectiveForms::new(
        w.to_string(),
        ett,
        plural,
        format!("{w}are"),
        format!("{w}ast"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(slots: [&str; 4]) -> Forms {
        Forms::Noun(NounForms::new(slots))
    }

    fn verb(inf: &str, present: &str, past: &str, supine: &str) -> Forms {
        Forms::Verb(VerbForms::new(inf, present, past, supine))
    }

    #[test]
    fn test_irregular_verbs() {
        assert_eq!(
            generate_forms("vara", "vb_4m_vara", &WordType::Verb),
            verb("vara", "är", "var", "varit")
        );
        assert_eq!(
            generate_forms("ha", "vb_2m_ha", &WordType::Verb),
            verb("ha", "har", "hade", "haft")
        );
    }

    #[test]
    fn test_verb_group_1() {
        assert_eq!(
            generate_forms("laga", "vb_1a_laga", &WordType::Verb),
            verb("laga", "lagar", "lagade", "lagat")
        );
        // 語末が a でなければ第2群の規則にも進まない
        assert_eq!(generate_forms("bo", "vb_1_2_bo", &WordType::Verb), Forms::None);
    }

    #[test]
    fn test_verb_group_2() {
        assert_eq!(
            generate_forms("köpa", "vb_2a_köpa", &WordType::Verb),
            verb("köpa", "köper", "köpte", "köpt")
        );
        assert_eq!(
            generate_forms("ställa", "vb_2a_ställa", &WordType::Verb),
            verb("ställa", "ställer", "ställde", "ställt")
        );
        assert_eq!(generate_forms("sy", "vb_2m_sy", &WordType::Verb), Forms::None);
    }

    #[test]
    fn test_strong_verb_has_no_rule() {
        assert_eq!(generate_forms("springa", "vb_4a_springa", &WordType::Verb), Forms::None);
    }

    #[test]
    fn test_nouns() {
        assert_eq!(
            generate_forms("kaffe", "nn_0n_kaffe", &WordType::Noun),
            noun(["kaffe", "kaffeen", "-", "-"])
        );
        assert_eq!(
            generate_forms("flicka", "nn_1u_flicka", &WordType::Noun),
            noun(["flicka", "flickan", "flickor", "flickorna"])
        );
        assert_eq!(
            generate_forms("ros", "nn_1u_ros", &WordType::Noun),
            noun(["ros", "rosn", "rosor", "rosorna"])
        );
        assert_eq!(
            generate_forms("bil", "nn_2u_bil", &WordType::Noun),
            noun(["bil", "bilen", "bilar", "bilarna"])
        );
        assert_eq!(
            generate_forms("park", "nn_3u_park", &WordType::Noun),
            noun(["park", "parken", "parker", "parkerna"])
        );
        assert_eq!(
            generate_forms("hus", "nn_6n_hus", &WordType::Noun),
            noun(["hus", "huset", "hus", "husen"])
        );
        assert_eq!(generate_forms("papper", "nn_vn_papper", &WordType::Noun), Forms::None);
    }

    #[test]
    fn test_neuter_n_nouns() {
        assert_eq!(
            generate_forms("äpple", "nn_5n_äpple", &WordType::Noun),
            noun(["äpple", "äpplet", "äpplen", "äpplena"])
        );
        assert_eq!(
            generate_forms("öga", "nn_5n_öga", &WordType::Noun),
            noun(["öga", "ögat", "ögan", "ögana"])
        );
        assert_eq!(
            generate_forms("museum", "nn_5n_museum", &WordType::Noun),
            noun(["museum", "museet", "musea", "museana"])
        );
        assert_eq!(
            generate_forms("frö", "nn_5n_frö", &WordType::Noun),
            noun(["frö", "fröt", "frön", "fröna"])
        );
        assert_eq!(
            generate_forms("bit", "nn_5n_bit", &WordType::Noun),
            noun(["bit", "bitet", "bitn", "bitna"])
        );
    }

    #[test]
    fn test_adjectives() {
        assert_eq!(
            generate_forms("stor", "av_1_stor", &WordType::Adjective),
            Forms::Adjective(AdjectiveForms::new("stor", "stort", "stora", "större", "störst"))
        );
        assert_eq!(
            generate_forms("röd", "av_1_röd", &WordType::Adjective),
            Forms::Adjective(AdjectiveForms::new("röd", "röd", "röda", "rödare", "rödast"))
        );
        assert_eq!(
            generate_forms("bra", "av_0_bra", &WordType::Adjective),
            Forms::Adjective(AdjectiveForms::new("bra", "brat", "bra", "braare", "braast"))
        );
    }

    #[test]
    fn test_other_types() {
        assert_eq!(generate_forms("fort", "ab_1_fort", &WordType::Adverb), Forms::None);
        assert_eq!(generate_forms("tre", "nl_1_tre", &WordType::Numeral), Forms::None);
    }
}
