//! 同形異義語の解決
//!
//! 同じ表層形を持つ複数の生レコードから、正規エントリの元になる1件を選びます。
//! 名前付きの例外表 [`ResolutionOverrides`] を先に参照し、
//! 該当しなければ品詞コードの優先順位表で選びます。

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use hashbrown::HashMap;

use crate::compiler::classify::char_prefix;
use crate::errors::Result;
use crate::source::RawLexicalEntry;

/// 品詞コード先頭2文字の優先順位。値が小さいほど優先されます。
///
/// 形容詞が名詞より優先されるのは、`stor` のように形容詞と名詞の両方に
/// 登録された語で形容詞を見せたいという経験則によるものです。
const PART_OF_SPEECH_RANKS: [(&str, u32); 5] =
    [("vb", 1), ("av", 2), ("nn", 3), ("ab", 4), ("pm", 10)];

/// 優先順位表にない品詞コードの順位
const DEFAULT_RANK: u32 = 99;

/// 品詞コードの優先順位を返します。
pub fn rank(part_of_speech: &str) -> u32 {
    let code = char_prefix(part_of_speech, 2);
    PART_OF_SPEECH_RANKS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(DEFAULT_RANK, |&(_, rank)| rank)
}

/// 例外表の1行が候補を選ぶ条件
///
/// JSON では `{"paradigm": "vb_4m_vara"}` または
/// `{"part_of_speech_prefix": "av"}` と書きます。
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// パラダイムが完全に一致する最初の候補
    Paradigm(String),
    /// 品詞コードが指定の接頭辞で始まる最初の候補
    PartOfSpeechPrefix(String),
}

impl Selector {
    pub fn matches(&self, entry: &RawLexicalEntry) -> bool {
        match self {
            Self::Paradigm(paradigm) => entry.paradigm == *paradigm,
            Self::PartOfSpeechPrefix(prefix) => entry.part_of_speech.starts_with(prefix.as_str()),
        }
    }
}

/// 名前付きの例外表
///
/// 語ごとに1つの [`Selector`] を持ちます。
/// どの候補も条件に一致しない行は無視され、優先順位表による選択に戻ります。
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ResolutionOverrides {
    rows: HashMap<String, Selector>,
}

impl ResolutionOverrides {
    /// 空の例外表を作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 組み込みの例外表(`vara`、`ha`、`stor`)を返します。
    pub fn builtin() -> Self {
        let mut overrides = Self::new();
        overrides.insert("vara", Selector::Paradigm("vb_4m_vara".to_string()));
        overrides.insert("ha", Selector::Paradigm("vb_2m_ha".to_string()));
        overrides.insert("stor", Selector::PartOfSpeechPrefix("av".to_string()));
        overrides
    }

    /// JSON 形式の例外表を読み込みます。
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        Ok(serde_json::from_reader(rdr)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// 行を追加します。同じ語の行があれば置き換えます。
    pub fn insert<S: Into<String>>(&mut self, word: S, selector: Selector) {
        self.rows.insert(word.into(), selector);
    }

    /// 別の例外表の行で上書きします。
    pub fn extend(&mut self, other: Self) {
        self.rows.extend(other.rows);
    }

    pub fn get(&self, word: &str) -> Option<&Selector> {
        self.rows.get(word)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 語の行が候補のいずれかに一致すれば、最初に一致した候補を返します。
    pub fn select<'a>(
        &self,
        word: &str,
        candidates: &'a [RawLexicalEntry],
    ) -> Option<&'a RawLexicalEntry> {
        let selector = self.get(word)?;
        candidates.iter().find(|entry| selector.matches(entry))
    }
}

/// 解決結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// 選ばれた候補
    pub entry: &'a RawLexicalEntry,
    /// 例外表によって選ばれたかどうか
    pub overridden: bool,
}

/// 候補から1件を選びます。候補が空なら `None` を返します。
///
/// 優先順位が同じ候補の間では入力順で先のものが選ばれます。
pub fn resolve<'a>(
    word: &str,
    candidates: &'a [RawLexicalEntry],
    overrides: &ResolutionOverrides,
) -> Option<Resolution<'a>> {
    if let Some(entry) = overrides.select(word, candidates) {
        return Some(Resolution {
            entry,
            overridden: true,
        });
    }
    candidates
        .iter()
        .min_by_key(|entry| rank(&entry.part_of_speech))
        .map(|entry| Resolution {
            entry,
            overridden: false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(word: &str, pos: &str, paradigm: &str) -> RawLexicalEntry {
        RawLexicalEntry::new(word, pos, paradigm).unwrap()
    }

    #[test]
    fn test_rank() {
        assert_eq!(rank("vb"), 1);
        assert_eq!(rank("vbm"), 1);
        assert_eq!(rank("av"), 2);
        assert_eq!(rank("nn"), 3);
        assert_eq!(rank("ab"), 4);
        assert_eq!(rank("pm"), 10);
        assert_eq!(rank("in"), 99);
        assert_eq!(rank(""), 99);
    }

    #[test]
    fn test_generic_priority() {
        let candidates = [
            raw("lag", "nn", "nn_2u_lag"),
            raw("lag", "av", "av_1_lag"),
        ];
        let resolution = resolve("lag", &candidates, &ResolutionOverrides::new()).unwrap();
        assert_eq!(resolution.entry, &candidates[1]);
        assert!(!resolution.overridden);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = [
            raw("fil", "nn", "nn_2u_fil"),
            raw("fil", "nn", "nn_3u_fil"),
        ];
        let resolution = resolve("fil", &candidates, &ResolutionOverrides::builtin()).unwrap();
        assert_eq!(resolution.entry.paradigm, "nn_2u_fil");
    }

    #[test]
    fn test_builtin_overrides() {
        let candidates = [
            raw("vara", "nn", "nn_1u_vara"),
            raw("vara", "vb", "vb_1a_vara"),
            raw("vara", "vb", "vb_4m_vara"),
        ];
        let resolution = resolve("vara", &candidates, &ResolutionOverrides::builtin()).unwrap();
        assert_eq!(resolution.entry.paradigm, "vb_4m_vara");
        assert!(resolution.overridden);
    }

    #[test]
    fn test_override_without_match_falls_back() {
        let candidates = [raw("ha", "nn", "nn_0u_ha"), raw("ha", "in", "in_1_ha")];
        let resolution = resolve("ha", &candidates, &ResolutionOverrides::builtin()).unwrap();
        assert_eq!(resolution.entry.part_of_speech, "nn");
        assert!(!resolution.overridden);
    }

    #[test]
    fn test_overrides_from_json() {
        let json = r#"{"fast": {"part_of_speech_prefix": "ab"}, "vara": {"paradigm": "vb_1a_vara"}}"#;
        let mut overrides = ResolutionOverrides::builtin();
        overrides.extend(ResolutionOverrides::from_reader(json.as_bytes()).unwrap());
        assert_eq!(overrides.len(), 4);
        assert_eq!(
            overrides.get("vara"),
            Some(&Selector::Paradigm("vb_1a_vara".to_string()))
        );

        let candidates = [raw("fast", "av", "av_1_fast"), raw("fast", "ab", "ab_1_fast")];
        let resolution = resolve("fast", &candidates, &overrides).unwrap();
        assert_eq!(resolution.entry.part_of_speech, "ab");
    }

    #[test]
    fn test_empty_candidates() {
        assert!(resolve("x", &[], &ResolutionOverrides::builtin()).is_none());
    }
}
