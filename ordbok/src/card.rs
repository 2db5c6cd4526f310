//! 検索結果のカード表示
//!
//! 検索結果を Markdown のテキストに整形します。
//! 活用データが欠けている、または一部しかない場合も失敗せず、
//! `—` や説明文で埋めて表示します。

use std::borrow::Cow;
use std::fmt;

use crate::lexicon::{
    AdjectiveForms, CanonicalEntry, Entry, FormEntry, Forms, Gender, LexiconStats, Meaning,
    NO_FORM, NounForms, VerbForms, WordType,
};
use crate::tables::OrdinalTable;

/// 値がない位置に表示する記号
pub const PLACEHOLDER: &str = "—";

/// 分類ごとの絵文字を返します。
pub fn type_emoji(word_type: &WordType) -> &'static str {
    match word_type {
        WordType::Noun => "📦",
        WordType::Verb => "🏃",
        WordType::Adjective => "🎨",
        WordType::Adverb => "🔄",
        WordType::Pronoun => "👤",
        WordType::Preposition => "📍",
        WordType::Conjunction => "🔗",
        WordType::Interjection => "❗",
        WordType::ProperNoun => "🏷️",
        WordType::Numeral => "🔢",
        WordType::Unknown => "❓",
        WordType::Other(_) => "📝",
    }
}

/// 分類の表示名を返します。一覧にない分類は先頭を大文字にした分類名です。
pub fn type_display_name(word_type: &WordType) -> Cow<'static, str> {
    Cow::Borrowed(match word_type {
        WordType::Noun => "Noun (Substantiv)",
        WordType::Verb => "Verb",
        WordType::Adjective => "Adjective (Adjektiv)",
        WordType::Adverb => "Adverb",
        WordType::Pronoun => "Pronoun (Pronomen)",
        WordType::Preposition => "Preposition",
        WordType::Conjunction => "Conjunction (Konjunktion)",
        WordType::Interjection => "Interjection",
        WordType::ProperNoun => "Proper Noun (Egennamn)",
        WordType::Numeral => "Numeral (Räkneord)",
        WordType::Unknown => "Unknown",
        WordType::Other(name) => return Cow::Owned(capitalize(name)),
    })
}

/// エントリのカードを作成します。
pub fn render_card(entry: &Entry, queried_word: &str, ordinals: &OrdinalTable) -> String {
    WordCard {
        entry,
        queried_word,
        ordinals,
    }
    .to_string()
}

/// 曖昧語の候補一覧を作成します。候補には1から番号が振られます。
pub fn render_meanings(word: &str, meanings: &[Meaning]) -> String {
    MeaningMenu { word, meanings }.to_string()
}

/// 見つからなかった語への応答を作成します。
pub fn render_not_found(word: &str, suggestions: &[&str], total: usize) -> String {
    NotFound {
        word,
        suggestions,
        total,
    }
    .to_string()
}

/// 語彙の統計情報を作成します。
pub fn render_stats(stats: &LexiconStats) -> String {
    StatsCard(stats).to_string()
}

struct WordCard<'a> {
    entry: &'a Entry,
    queried_word: &'a str,
    ordinals: &'a OrdinalTable,
}

impl fmt::Display for WordCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📘 *{}*\n", self.queried_word.to_uppercase())?;
        match self.entry {
            Entry::Base(entry) => self.fmt_base(f, entry),
            Entry::Form(entry) => fmt_form(f, entry),
        }
    }
}

impl WordCard<'_> {
    fn fmt_base(&self, f: &mut fmt::Formatter<'_>, entry: &CanonicalEntry) -> fmt::Result {
        let word_type = &entry.word_type;
        fmt_type_line(f, word_type)?;
        if !entry.group.is_empty() && entry.group != capitalize(word_type.as_str()) {
            writeln!(f, "📚 *Group:* {}", entry.group)?;
        }
        writeln!(f)?;

        let word = or_placeholder(&entry.word);
        match word_type {
            WordType::Noun => {
                let gender = entry.gender.unwrap_or(Gender::En).article();
                writeln!(f, "*Gender:* {gender}\n")?;
                if let Forms::Noun(forms) = &entry.forms {
                    if forms.is_complete() {
                        writeln!(f, "*Declension:*")?;
                        fmt_declension(f, gender, forms)?;
                    } else {
                        let base: &str = if forms.singular_indefinite.is_empty() {
                            word
                        } else {
                            &forms.singular_indefinite
                        };
                        writeln!(f, "*Base form:* _{base}_")?;
                    }
                }
                Ok(())
            }
            WordType::Verb => match &entry.forms {
                Forms::None => writeln!(f, "*No conjugation data available*"),
                Forms::Verb(forms) => {
                    writeln!(f, "*Conjugation:*")?;
                    fmt_conjugation(f, forms, false)
                }
                _ => writeln!(f, "*Base form:* _{word}_"),
            },
            WordType::Adjective => match &entry.forms {
                Forms::None => writeln!(f, "*No form data available*"),
                Forms::Adjective(forms) => {
                    writeln!(f, "*Forms:*")?;
                    fmt_adjective_forms(f, forms)?;
                    if !forms.comparative.is_empty() || !forms.superlative.is_empty() {
                        writeln!(f, "\n*Comparison:*")?;
                        fmt_comparison(f, forms)?;
                    }
                    Ok(())
                }
                _ => writeln!(f, "*Base form:* _{word}_"),
            },
            WordType::ProperNoun => writeln!(f, "*Category:* Name or place"),
            WordType::Numeral => {
                writeln!(f, "*Cardinal number*")?;
                if let Some(ordinal) = self.ordinals.get(entry.word.as_str()) {
                    writeln!(f, "\n*Ordinal form:* _{ordinal}_")?;
                }
                Ok(())
            }
            _ => writeln!(f, "*Base form:* _{word}_"),
        }
    }
}

fn fmt_form(f: &mut fmt::Formatter<'_>, entry: &FormEntry) -> fmt::Result {
    writeln!(
        f,
        "ℹ️ This is the *{}* of _{}_\n",
        entry.form_type, entry.base_word
    )?;
    fmt_type_line(f, &entry.word_type)?;
    if !entry.group.is_empty() {
        writeln!(f, "📚 *Group:* {}", entry.group)?;
    }
    writeln!(f)?;

    match (&entry.word_type, &entry.forms) {
        (WordType::Verb, Forms::Verb(forms)) => {
            writeln!(f, "*Full conjugation:*")?;
            fmt_conjugation(f, forms, true)
        }
        (WordType::Noun, Forms::Noun(forms)) => {
            let gender = entry.gender.unwrap_or(Gender::En).article();
            writeln!(f, "*Gender:* {gender}\n")?;
            writeln!(f, "*Full declension:*")?;
            if forms.is_complete() {
                fmt_declension(f, gender, forms)?;
            }
            Ok(())
        }
        (WordType::Adjective, Forms::Adjective(forms)) => {
            writeln!(f, "*Full forms:*")?;
            fmt_adjective_forms(f, forms)?;
            fmt_comparison(f, forms)
        }
        _ => Ok(()),
    }
}

fn fmt_type_line(f: &mut fmt::Formatter<'_>, word_type: &WordType) -> fmt::Result {
    writeln!(
        f,
        "{} *Type:* {}",
        type_emoji(word_type),
        type_display_name(word_type)
    )
}

fn fmt_declension(f: &mut fmt::Formatter<'_>, gender: &str, forms: &NounForms) -> fmt::Result {
    writeln!(f, "• Singular indefinite: _{gender} {}_", forms.singular_indefinite)?;
    writeln!(f, "• Singular definite: _{}_", forms.singular_definite)?;
    writeln!(f, "• Plural indefinite: _{}_", plural(&forms.plural_indefinite))?;
    writeln!(f, "• Plural definite: _{}_", plural(&forms.plural_definite))
}

/// `full` が偽の場合、値のない位置は省略されます。
fn fmt_conjugation(f: &mut fmt::Formatter<'_>, forms: &VerbForms, full: bool) -> fmt::Result {
    writeln!(f, "• Infinitive: _att {}_", or_placeholder(&forms.infinitive))?;
    for (label, value) in [
        ("Present", &forms.present),
        ("Past", &forms.past),
        ("Supine", &forms.supine),
    ] {
        if full || !value.is_empty() {
            writeln!(f, "• {label}: _{}_", or_placeholder(value))?;
        }
    }
    Ok(())
}

fn fmt_adjective_forms(f: &mut fmt::Formatter<'_>, forms: &AdjectiveForms) -> fmt::Result {
    writeln!(f, "• En-form: _{}_", or_placeholder(&forms.en_form))?;
    writeln!(f, "• Ett-form: _{}_", or_placeholder(&forms.ett_form))?;
    writeln!(f, "• Plural/Definite: _{}_", or_placeholder(&forms.plural))
}

fn fmt_comparison(f: &mut fmt::Formatter<'_>, forms: &AdjectiveForms) -> fmt::Result {
    if !forms.comparative.is_empty() {
        writeln!(f, "• Comparative: _{}_", forms.comparative)?;
    }
    if !forms.superlative.is_empty() {
        writeln!(f, "• Superlative: _{}_", forms.superlative)?;
    }
    Ok(())
}

struct MeaningMenu<'a> {
    word: &'a str,
    meanings: &'a [Meaning],
}

impl fmt::Display for MeaningMenu<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📘 *{}*\n", self.word.to_uppercase())?;
        writeln!(f, "This word has multiple meanings. Please choose:\n")?;
        for (i, meaning) in self.meanings.iter().enumerate() {
            let description = meaning
                .description
                .as_deref()
                .unwrap_or(meaning.word_type.as_str());
            writeln!(
                f,
                "{}. {} {description}",
                i + 1,
                type_emoji(&meaning.word_type)
            )?;
        }
        Ok(())
    }
}

struct NotFound<'a> {
    word: &'a str,
    suggestions: &'a [&'a str],
    total: usize,
}

impl fmt::Display for NotFound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "❌ Word '*{}*' not found.\n", self.word)?;
        if self.suggestions.is_empty() {
            writeln!(
                f,
                "The dictionary contains {} Swedish words.",
                thousands(self.total)
            )?;
            writeln!(f, "Please check spelling and try again.\n")?;
            writeln!(f, "Note: Some very rare or archaic words")?;
            return writeln!(f, "might not be included.");
        }
        writeln!(f, "*Did you mean:*")?;
        for suggestion in self.suggestions {
            writeln!(f, "• `{suggestion}`")?;
        }
        Ok(())
    }
}

struct StatsCard<'a>(&'a LexiconStats);

impl fmt::Display for StatsCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        writeln!(f, "📊 *Dictionary Statistics*\n")?;
        writeln!(f, "*Total entries:* {}", thousands(stats.total))?;
        writeln!(f, "*Base words:* {}", thousands(stats.base_words))?;
        writeln!(f, "*Word forms:* {}\n", thousands(stats.word_forms))?;
        writeln!(f, "*By type:*")?;
        writeln!(f, "• Nouns: {}", thousands(stats.nouns))?;
        writeln!(f, "• Verbs: {}", thousands(stats.verbs))?;
        writeln!(f, "• Adjectives: {}\n", thousands(stats.adjectives))?;
        writeln!(f, "*Data source:* SALDO")?;
        writeln!(f, "Swedish Language Bank (Språkbanken)")
    }
}

#[inline(always)]
fn or_placeholder(value: &str) -> &str {
    if value.is_empty() { PLACEHOLDER } else { value }
}

fn plural(value: &str) -> &str {
    if value == NO_FORM {
        "no plural"
    } else {
        or_placeholder(value)
    }
}

/// 先頭の文字だけを大文字にします。
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// 3桁ごとにカンマで区切ります。
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun_entry(forms: Forms) -> Entry {
        Entry::Base(CanonicalEntry {
            word: "hus".to_string(),
            word_type: WordType::Noun,
            paradigm: "nn_6n_hus".to_string(),
            group: "Declension 5 (ett, no change)".to_string(),
            forms,
            gender: Some(Gender::Ett),
        })
    }

    #[test]
    fn test_noun_card() {
        let entry = noun_entry(Forms::Noun(NounForms::new(["hus", "huset", "hus", "husen"])));
        let card = render_card(&entry, "hus", &OrdinalTable::new());
        assert_eq!(
            card,
            "📘 *HUS*\n\n\
             📦 *Type:* Noun (Substantiv)\n\
             📚 *Group:* Declension 5 (ett, no change)\n\n\
             *Gender:* ett\n\n\
             *Declension:*\n\
             • Singular indefinite: _ett hus_\n\
             • Singular definite: _huset_\n\
             • Plural indefinite: _hus_\n\
             • Plural definite: _husen_\n"
        );
    }

    #[test]
    fn test_uncountable_noun_has_no_plural() {
        let entry = noun_entry(Forms::Noun(NounForms::new(["tro", "troen", "-", "-"])));
        let card = render_card(&entry, "tro", &OrdinalTable::new());
        assert!(card.contains("• Plural indefinite: _no plural_\n"));
        assert!(card.contains("• Plural definite: _no plural_\n"));
    }

    #[test]
    fn test_partial_noun_forms() {
        let entry = noun_entry(Forms::Noun(NounForms::from(vec!["hus".to_string()])));
        let card = render_card(&entry, "hus", &OrdinalTable::new());
        assert!(card.ends_with("*Gender:* ett\n\n*Base form:* _hus_\n"));
    }

    #[test]
    fn test_verb_without_forms() {
        let entry = Entry::Base(CanonicalEntry {
            word: "springa".to_string(),
            word_type: WordType::Verb,
            paradigm: "vb_4a_springa".to_string(),
            group: "Verb group 4 (strong)".to_string(),
            forms: Forms::None,
            gender: None,
        });
        let card = render_card(&entry, "springa", &OrdinalTable::new());
        assert!(card.ends_with("*No conjugation data available*\n"));
    }

    #[test]
    fn test_partial_verb_forms() {
        let entry = Entry::Base(CanonicalEntry {
            word: "måste".to_string(),
            word_type: WordType::Verb,
            paradigm: String::new(),
            group: String::new(),
            forms: Forms::Verb(VerbForms::new("måste", "måste", "", "")),
            gender: None,
        });
        let card = render_card(&entry, "måste", &OrdinalTable::new());
        assert!(card.ends_with("*Conjugation:*\n• Infinitive: _att måste_\n• Present: _måste_\n"));
        assert!(!card.contains("📚"));
    }

    #[test]
    fn test_form_card_placeholders() {
        let entry = Entry::Form(FormEntry {
            word_type: WordType::Verb,
            is_form: true,
            base_word: "måste".to_string(),
            form_type: "present".to_string(),
            group: String::new(),
            gender: None,
            forms: Forms::Verb(VerbForms::new("måste", "måste", "", "")),
        });
        let card = render_card(&entry, "Måste", &OrdinalTable::new());
        assert!(card.starts_with("📘 *MÅSTE*\n\nℹ️ This is the *present* of _måste_\n\n"));
        assert!(card.contains("• Past: _—_\n• Supine: _—_\n"));
    }

    #[test]
    fn test_adjective_form_card() {
        let forms = Forms::Adjective(AdjectiveForms::new("stor", "stort", "stora", "större", "störst"));
        let entry = Entry::Form(FormEntry {
            word_type: WordType::Adjective,
            is_form: true,
            base_word: "stor".to_string(),
            form_type: "comparative".to_string(),
            group: "Adjective".to_string(),
            gender: None,
            forms,
        });
        let card = render_card(&entry, "större", &OrdinalTable::new());
        assert!(card.contains("📚 *Group:* Adjective\n"));
        assert!(card.ends_with(
            "*Full forms:*\n• En-form: _stor_\n• Ett-form: _stort_\n• Plural/Definite: _stora_\n\
             • Comparative: _större_\n• Superlative: _störst_\n"
        ));
    }

    #[test]
    fn test_numeral_with_ordinal() {
        let entry = Entry::Base(CanonicalEntry {
            word: "tre".to_string(),
            word_type: WordType::Numeral,
            paradigm: "nl_1_tre".to_string(),
            group: String::new(),
            forms: Forms::None,
            gender: None,
        });
        let mut ordinals = OrdinalTable::new();
        ordinals.insert("tre".to_string(), "tredje".to_string());
        let card = render_card(&entry, "tre", &ordinals);
        assert!(card.ends_with("*Cardinal number*\n\n*Ordinal form:* _tredje_\n"));
    }

    #[test]
    fn test_group_equal_to_type_name_is_hidden() {
        let entry = Entry::Base(CanonicalEntry {
            word: "snabbt".to_string(),
            word_type: WordType::Adverb,
            paradigm: String::new(),
            group: "Adverb".to_string(),
            forms: Forms::None,
            gender: None,
        });
        let card = render_card(&entry, "snabbt", &OrdinalTable::new());
        assert!(!card.contains("*Group:*"));
        assert!(card.ends_with("*Base form:* _snabbt_\n"));
    }

    #[test]
    fn test_meaning_menu() {
        let meanings: Vec<Meaning> = serde_json::from_str(
            r#"[{"type": "noun", "description": "lane / file"}, {"type": "noun"}]"#,
        )
        .unwrap();
        let menu = render_meanings("fil", &meanings);
        assert_eq!(
            menu,
            "📘 *FIL*\n\nThis word has multiple meanings. Please choose:\n\n\
             1. 📦 lane / file\n2. 📦 noun\n"
        );
    }

    #[test]
    fn test_meaning_menu_keeps_empty_description() {
        let meanings: Vec<Meaning> = serde_json::from_str(
            r#"[{"type": "conjunction", "description": "but"}, {"type": "noun", "description": ""}]"#,
        )
        .unwrap();
        let menu = render_meanings("men", &meanings);
        assert!(menu.ends_with("1. 🔗 but\n2. 📦 \n"));
    }

    #[test]
    fn test_table_type_names() {
        let entry: Entry = serde_json::from_str(r#"{"word": "men", "type": "conjunction"}"#).unwrap();
        let card = render_card(&entry, "men", &OrdinalTable::new());
        assert!(card.contains("🔗 *Type:* Conjunction (Konjunktion)\n"));

        let entry: Entry = serde_json::from_str(r#"{"word": "ju", "type": "particle"}"#).unwrap();
        let card = render_card(&entry, "ju", &OrdinalTable::new());
        assert!(card.contains("📝 *Type:* Particle\n"));
        assert!(card.ends_with("*Base form:* _ju_\n"));
    }

    #[test]
    fn test_base_entry_without_word() {
        let entry: Entry = serde_json::from_str(r#"{"type": "adverb"}"#).unwrap();
        let card = render_card(&entry, "ju", &OrdinalTable::new());
        assert!(card.starts_with("📘 *JU*\n\n🔄 *Type:* Adverb\n"));
        assert!(card.ends_with("*Base form:* _—_\n"));
    }

    #[test]
    fn test_not_found() {
        let text = render_not_found("bil", &["bil", "bila"], 10);
        assert!(text.ends_with("*Did you mean:*\n• `bil`\n• `bila`\n"));

        let text = render_not_found("xyz", &[], 315_000);
        assert!(text.contains("The dictionary contains 315,000 Swedish words."));
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("proper_noun"), "Proper_noun");
        assert_eq!(capitalize(""), "");
    }
}
