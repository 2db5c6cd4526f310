//! 語彙エントリの型定義
//!
//! コンパイル済み語彙に格納されるレコード(見出し語エントリと活用形エントリ)、
//! 品詞ごとに形の異なる活用表、および曖昧語テーブルの候補を定義します。
//!
//! これらの型は rkyv でバイナリ成果物に、serde で JSON(手書きテーブルと
//! JSON 出力)に変換されます。JSON の形は元の辞書ファイルと互換で、
//! 名詞の活用表は4要素のリスト、動詞と形容詞の活用表はオブジェクトになります。

use std::fmt;

use rkyv::{Archive, Deserialize, Serialize};

/// 存在しない形を表す記号(不可算名詞の複数形など)
pub const NO_FORM: &str = "-";

/// 名詞の4つの格変化位置のラベル
pub const NOUN_SLOT_LABELS: [&str; 4] = [
    "singular indefinite",
    "singular definite",
    "plural indefinite",
    "plural definite",
];

/// 動詞の活用スロット名
pub const VERB_SLOT_LABELS: [&str; 4] = ["infinitive", "present", "past", "supine"];

/// 形容詞の活用スロット名
pub const ADJECTIVE_SLOT_LABELS: [&str; 5] =
    ["en form", "ett form", "plural", "comparative", "superlative"];

/// 語の分類
///
/// 手書きテーブルに現れる一覧にない分類名は [`WordType::Other`] にそのまま保持されます。
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Hash,
    Archive, Serialize, Deserialize,
    serde::Serialize, serde::Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum WordType {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    ProperNoun,
    Numeral,
    Preposition,
    Conjunction,
    Interjection,
    #[default]
    Unknown,
    Other(String),
}

impl WordType {
    /// JSON とカード表示で使う識別子を返します。
    pub fn as_str(&self) -> &str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Pronoun => "pronoun",
            Self::ProperNoun => "proper_noun",
            Self::Numeral => "numeral",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Interjection => "interjection",
            Self::Unknown => "unknown",
            Self::Other(name) => name,
        }
    }

    /// 識別子から分類を得ます。
    pub fn from_name(name: &str) -> Self {
        match name {
            "noun" => Self::Noun,
            "verb" => Self::Verb,
            "adjective" => Self::Adjective,
            "adverb" => Self::Adverb,
            "pronoun" => Self::Pronoun,
            "proper_noun" => Self::ProperNoun,
            "numeral" => Self::Numeral,
            "preposition" => Self::Preposition,
            "conjunction" => Self::Conjunction,
            "interjection" => Self::Interjection,
            "unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for WordType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<WordType> for String {
    fn from(word_type: WordType) -> Self {
        match word_type {
            WordType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// 名詞の文法性
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash,
    Archive, Serialize, Deserialize,
    serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// 両性(en-ord)
    En,
    /// 中性(ett-ord)
    Ett,
}

impl Gender {
    /// 不定冠詞としての表記を返します。
    pub const fn article(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ett => "ett",
        }
    }
}

/// 名詞の格変化表
///
/// JSON では `[単数未知, 単数既知, 複数未知, 複数既知]` の4要素リストです。
/// 存在しない形は [`NO_FORM`] で表します。
#[derive(
    Clone, Debug, Default, PartialEq, Eq,
    Archive, Serialize, Deserialize,
    serde::Serialize, serde::Deserialize,
)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct NounForms {
    pub singular_indefinite: String,
    pub singular_definite: String,
    pub plural_indefinite: String,
    pub plural_definite: String,
}

impl NounForms {
    pub fn new<S: Into<String>>(slots: [S; 4]) -> Self {
        let [a, b, c, d] = slots;
        Self {
            singular_indefinite: a.into(),
            singular_definite: b.into(),
            plural_indefinite: c.into(),
            plural_definite: d.into(),
        }
    }

    /// 4つの位置すべてに値があるかどうかを返します。
    ///
    /// 手書きテーブルの欠けたリストから作られた表では `false` になります。
    pub fn is_complete(&self) -> bool {
        self.as_array().iter().all(|slot| !slot.is_empty())
    }

    /// 格変化表をスロット順に返します。
    pub fn as_array(&self) -> [&str; 4] {
        [
            &self.singular_indefinite,
            &self.singular_definite,
            &self.plural_indefinite,
            &self.plural_definite,
        ]
    }
}

impl From<Vec<String>> for NounForms {
    // 手書きテーブルには要素の欠けたリストがあり得るため、足りない位置は空にする
    fn from(slots: Vec<String>) -> Self {
        let mut it = slots.into_iter();
        let mut next = || it.next().unwrap_or_default();
        Self {
            singular_indefinite: next(),
            singular_definite: next(),
            plural_indefinite: next(),
            plural_definite: next(),
        }
    }
}

impl From<NounForms> for Vec<String> {
    fn from(forms: NounForms) -> Self {
        vec![
            forms.singular_indefinite,
            forms.singular_definite,
            forms.plural_indefinite,
            forms.plural_definite,
        ]
    }
}

/// 動詞の活用表
#[derive(
    Clone, Debug, Default, PartialEq, Eq,
    Archive, Serialize, Deserialize,
    serde::Serialize, serde::Deserialize,
)]
pub struct VerbForms {
    pub infinitive: String,
    #[serde(default)]
    pub present: String,
    #[serde(default)]
    pub past: String,
    #[serde(default)]
    pub supine: String,
}

impl VerbForms {
    pub fn new<S: Into<String>>(infinitive: S, present: S, past: S, supine: S) -> Self {
        Self {
            infinitive: infinitive.into(),
            present: present.into(),
            past: past.into(),
            supine: supine.into(),
        }
    }

    pub fn as_array(&self) -> [&str; 4] {
        [&self.infinitive, &self.present, &self.past, &self.supine]
    }
}

/// 形容詞の活用表
#[derive(
    Clone, Debug, Default, PartialEq, Eq,
    Archive, Serialize, Deserialize,
    serde::Serialize, serde::Deserialize,
)]
pub struct AdjectiveForms {
    pub en_form: String,
    #[serde(default)]
    pub ett_form: String,
    #[serde(default)]
    pub plural: String,
    #[serde(default)]
    pub comparative: String,
    #[serde(default)]
    pub superlative: String,
}

impl AdjectiveForms {
    pub fn new<S: Into<String>>(
        en_form: S,
        ett_form: S,
        plural: S,
        comparative: S,
        superlative: S,
    ) -> Self {
        Self {
            en_form: en_form.into(),
            ett_form: ett_form.into(),
            plural: plural.into(),
            comparative: comparative.into(),
            superlative: superlative.into(),
        }
    }

    pub fn as_array(&self) -> [&str; 5] {
        [
            &self.en_form,
            &self.ett_form,
            &self.plural,
            &self.comparative,
            &self.superlative,
        ]
    }
}

/// 品詞ごとの活用表
///
/// JSON ではタグなしで表現されます(名詞はリスト、動詞は `infinitive` を持つ
/// オブジェクト、形容詞は `en_form` を持つオブジェクト、活用なしは省略)。
#[derive(
    Clone, Debug, Default, PartialEq, Eq,
    Archive, Serialize, Deserialize,
    serde::Serialize, serde::Deserialize,
)]
#[serde(untagged)]
pub enum Forms {
    Noun(NounForms),
    Verb(VerbForms),
    Adjective(AdjectiveForms),
    #[default]
    None,
}

impl Forms {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// ラベル付きのスロットを表の順に返します。
    ///
    /// 活用形エントリの `form_type` にはこのラベルが使われます。
    pub fn labeled_slots(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Noun(f) => NOUN_SLOT_LABELS.into_iter().zip(f.as_array()).collect(),
            Self::Verb(f) => VERB_SLOT_LABELS.into_iter().zip(f.as_array()).collect(),
            Self::Adjective(f) => ADJECTIVE_SLOT_LABELS.into_iter().zip(f.as_array()).collect(),
            Self::None => vec![],
        }
    }
}

/// 見出し語ごとに1つだけ選ばれた正規エントリ
#[derive(
    Clone, Debug, PartialEq, Eq,
    Archive, Serialize, Deserialize,
    serde::Serialize, serde::Deserialize,
)]
pub struct CanonicalEntry {
    #[serde(default)]
    pub word: String,
    #[serde(rename = "type", default)]
    pub word_type: WordType,
    #[serde(default)]
    pub paradigm: String,
    #[serde(default)]
    pub group: String,
    #[serde(default, skip_serializing_if = "Forms::is_none")]
    pub forms: Forms,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// 見出し語から生成された活用形のエントリ
#[derive(
    Clone, Debug, PartialEq, Eq,
    Archive, Serialize, Deserialize,
    serde::Serialize, serde::Deserialize,
)]
pub struct FormEntry {
    #[serde(rename = "type", default)]
    pub word_type: WordType,
    /// 常に `true`。JSON で見出し語エントリと区別するために出力されます。
    pub is_form: bool,
    pub base_word: String,
    pub form_type: String,
    #[serde(default)]
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Forms::is_none")]
    pub forms: Forms,
}

impl FormEntry {
    /// 見出し語エントリから活用形エントリを作成します。
    ///
    /// 形容詞の活用形は見出し語の分類にかかわらず `"Adjective"` グループに入ります。
    pub fn from_base(base: &CanonicalEntry, form_type: &str) -> Self {
        let group = if base.word_type == WordType::Adjective {
            "Adjective".to_string()
        } else {
            base.group.clone()
        };
        Self {
            word_type: base.word_type.clone(),
            is_form: true,
            base_word: base.word.clone(),
            form_type: form_type.to_string(),
            group,
            gender: base.gender,
            forms: base.forms.clone(),
        }
    }
}

/// コンパイル済み語彙の1レコード
///
/// JSON では `is_form`、`base_word`、`form_type` を持つレコードが活用形エントリ、
/// それ以外が見出し語エントリです。見出し語エントリの項目はすべて省略できるため、
/// 活用形エントリを先に試します。
#[derive(
    Clone, Debug, PartialEq, Eq,
    Archive, Serialize, Deserialize,
    serde::Serialize, serde::Deserialize,
)]
#[serde(untagged)]
pub enum Entry {
    Form(FormEntry),
    Base(CanonicalEntry),
}

impl Entry {
    #[inline(always)]
    pub fn is_form(&self) -> bool {
        matches!(self, Self::Form(_))
    }

    pub fn word_type(&self) -> &WordType {
        match self {
            Self::Base(e) => &e.word_type,
            Self::Form(e) => &e.word_type,
        }
    }

    pub fn group(&self) -> &str {
        match self {
            Self::Base(e) => &e.group,
            Self::Form(e) => &e.group,
        }
    }

    pub fn gender(&self) -> Option<Gender> {
        match self {
            Self::Base(e) => e.gender,
            Self::Form(e) => e.gender,
        }
    }

    pub fn forms(&self) -> &Forms {
        match self {
            Self::Base(e) => &e.forms,
            Self::Form(e) => &e.forms,
        }
    }

    /// 活用形エントリであれば見出し語を返します。
    pub fn base_word(&self) -> Option<&str> {
        match self {
            Self::Base(_) => None,
            Self::Form(e) => Some(&e.base_word),
        }
    }
}

/// 曖昧語テーブルの候補1件
///
/// 正規エントリと同じ形に説明文を加えたものです。
/// 手書きデータで `word` が省略されている場合は問い合わせ語が補われます。
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Meaning {
    #[serde(default)]
    pub word: String,
    #[serde(rename = "type", default)]
    pub word_type: WordType,
    #[serde(default)]
    pub paradigm: String,
    #[serde(default)]
    pub group: String,
    #[serde(default, skip_serializing_if = "Forms::is_none")]
    pub forms: Forms,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Meaning {
    /// カード表示用の見出し語エントリに変換します。
    pub fn to_entry(&self, queried_word: &str) -> Entry {
        let word = if self.word.is_empty() {
            queried_word.to_string()
        } else {
            self.word.clone()
        };
        Entry::Base(CanonicalEntry {
            word,
            word_type: self.word_type.clone(),
            paradigm: self.paradigm.clone(),
            group: self.group.clone(),
            forms: self.forms.clone(),
            gender: self.gender,
        })
    }
}
