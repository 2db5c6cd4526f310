//! 検索サービス
//!
//! [`LookupService`] は語彙と補助テーブルを起動時に1度だけ読み込み、
//! 以降は `&self` だけで検索に応答します。状態は不変なので、
//! 呼び出し側は `Arc` で包んでスレッド間で共有できます。
//!
//! 検索は次の順に行われ、最初に見つかったものが返されます。
//!
//! 1. 強変化動詞・助動詞の上書き表
//! 2. 曖昧語の表
//! 3. コンパイル済み語彙
//!
//! # 例
//!
//! ```
//! use ordbok::compiler::LexiconCompiler;
//! use ordbok::service::{LookupResult, LookupService};
//! use ordbok::source::RawLexicalEntry;
//!
//! let entries = [RawLexicalEntry::new("hus", "nn", "nn_6n_hus").unwrap()];
//! let (lexicon, _) = LexiconCompiler::new().compile(entries);
//! let service = LookupService::new(lexicon);
//!
//! let result = service.lookup("  Huset ").unwrap();
//! assert_eq!(result.word(), "huset");
//! if let LookupResult::Single { entry, .. } = result {
//!     assert_eq!(entry.base_word(), Some("hus"));
//! }
//! ```

use crate::card;
use crate::config::{DataFile, ServiceConfig};
use crate::errors::{OrdbokError, Result};
use crate::lexicon::{CompiledLexicon, Entry, LexiconStats, Meaning};
use crate::tables::{self, AmbiguousTable, OrdinalTable, StrongVerbTable};

/// 見つからなかった語に添える候補の最大数
pub const SUGGESTION_LIMIT: usize = 5;

/// 検索結果
#[derive(Clone, Debug, PartialEq)]
pub enum LookupResult<'a> {
    /// エントリが1つに定まった場合
    Single {
        /// 正規化された問い合わせ語
        word: String,
        entry: &'a Entry,
    },
    /// 曖昧語の表に登録されている場合
    Ambiguous {
        /// 正規化された問い合わせ語
        word: String,
        meanings: &'a [Meaning],
    },
}

impl LookupResult<'_> {
    /// 正規化された問い合わせ語を返します。
    pub fn word(&self) -> &str {
        match self {
            Self::Single { word, .. } | Self::Ambiguous { word, .. } => word,
        }
    }

    /// 候補の数を返します。
    pub fn len(&self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Ambiguous { meanings, .. } => meanings.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }

    /// 0始まりの `index` 番目の候補をエントリとして返します。
    ///
    /// [`LookupResult::Single`] は候補が1つの一覧として扱われます。
    ///
    /// # エラー
    ///
    /// `index` が候補数以上の場合、[`OrdbokError::AmbiguousIndex`] を返します。
    pub fn select(&self, index: usize) -> Result<Entry> {
        let selected = match self {
            Self::Single { entry, .. } => (index == 0).then(|| (*entry).clone()),
            Self::Ambiguous { word, meanings } => {
                meanings.get(index).map(|meaning| meaning.to_entry(word))
            }
        };
        selected.ok_or_else(|| OrdbokError::AmbiguousIndex {
            word: self.word().to_string(),
            index,
            len: self.len(),
        })
    }
}

/// 検索サービス
pub struct LookupService {
    lexicon: CompiledLexicon,
    strong_verbs: StrongVerbTable,
    ambiguous_words: AmbiguousTable,
    ordinal_numbers: OrdinalTable,
}

impl LookupService {
    /// 補助テーブルを持たないサービスを作成します。
    pub fn new(lexicon: CompiledLexicon) -> Self {
        Self {
            lexicon,
            strong_verbs: StrongVerbTable::new(),
            ambiguous_words: AmbiguousTable::new(),
            ordinal_numbers: OrdinalTable::new(),
        }
    }

    /// 強変化動詞・助動詞の上書き表を設定します。
    pub fn strong_verbs(mut self, table: StrongVerbTable) -> Self {
        self.strong_verbs = table;
        self
    }

    /// 曖昧語の表を設定します。
    pub fn ambiguous_words(mut self, table: AmbiguousTable) -> Self {
        self.ambiguous_words = table;
        self
    }

    /// 序数詞の表を設定します。
    pub fn ordinal_numbers(mut self, table: OrdinalTable) -> Self {
        self.ordinal_numbers = table;
        self
    }

    /// 設定に従って資源を読み込み、サービスを作成します。
    ///
    /// 資源の欠落や破損ではサービスを止めません。
    /// 語彙が読み込めなければ空の語彙で、テーブルが読み込めなければ
    /// 空のテーブルで起動し、その旨をログに残します。
    pub fn from_config(config: &ServiceConfig) -> Self {
        let path = config.path(DataFile::Lexicon);
        let lexicon = match CompiledLexicon::load(path) {
            Ok(lexicon) => {
                let stats = lexicon.stats();
                log::info!(
                    "Dictionary loaded: {} entries ({} base words, {} forms)",
                    stats.total,
                    stats.base_words,
                    stats.word_forms
                );
                lexicon
            }
            Err(e) if e.is_not_found() => {
                log::error!("Dictionary not found at {}", path.display());
                CompiledLexicon::default()
            }
            Err(e) => {
                log::error!("Error loading dictionary {}: {e}", path.display());
                CompiledLexicon::default()
            }
        };

        Self::new(lexicon)
            .strong_verbs(load_table(config, DataFile::StrongVerbs))
            .ambiguous_words(load_table(config, DataFile::AmbiguousWords))
            .ordinal_numbers(load_table(config, DataFile::OrdinalNumbers))
    }

    /// 語を検索します。
    ///
    /// 語は前後の空白を除き小文字にしてから検索されます。
    pub fn lookup(&self, word: &str) -> Option<LookupResult<'_>> {
        let word = normalize(word);
        if let Some(entry) = self.strong_verbs.get(word.as_str()) {
            return Some(LookupResult::Single { word, entry });
        }
        if let Some(meanings) = self.ambiguous_words.get(word.as_str()) {
            return Some(LookupResult::Ambiguous { word, meanings });
        }
        let entry = self.lexicon.get(&word)?;
        Some(LookupResult::Single { word, entry })
    }

    /// `partial` で始まる見出し語を語彙の順序で最大 `limit` 件返します。
    ///
    /// 活用形エントリは候補に含まれません。
    pub fn suggest<'a>(
        &'a self,
        partial: &str,
        limit: usize,
    ) -> impl Iterator<Item = &'a str> + use<'a> {
        let prefix = normalize(partial);
        self.lexicon
            .iter()
            .filter(move |(surface, entry)| !entry.is_form() && surface.starts_with(&prefix))
            .map(|(surface, _)| surface)
            .take(limit)
    }

    /// エントリのカードを作成します。
    pub fn render_card(&self, entry: &Entry, queried_word: &str) -> String {
        card::render_card(entry, queried_word, &self.ordinal_numbers)
    }

    /// 曖昧語の候補一覧を作成します。
    pub fn render_meanings(&self, word: &str, meanings: &[Meaning]) -> String {
        card::render_meanings(word, meanings)
    }

    /// 見つからなかった語への応答を、候補を添えて作成します。
    pub fn render_not_found(&self, word: &str) -> String {
        let suggestions: Vec<&str> = self.suggest(word, SUGGESTION_LIMIT).collect();
        card::render_not_found(word.trim(), &suggestions, self.lexicon.len())
    }

    /// 検索結果の応答を作成します。曖昧語には候補一覧を返します。
    pub fn render_result(&self, result: &LookupResult<'_>) -> String {
        match result {
            LookupResult::Single { word, entry } => self.render_card(entry, word),
            LookupResult::Ambiguous { word, meanings } => self.render_meanings(word, meanings),
        }
    }

    /// 語彙の統計情報を返します。
    pub fn stats(&self) -> LexiconStats {
        self.lexicon.stats()
    }

    pub fn lexicon(&self) -> &CompiledLexicon {
        &self.lexicon
    }
}

fn load_table<T: tables::Table>(config: &ServiceConfig, file: DataFile) -> T {
    tables::load_or_empty(config.path(file), file.description())
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::lexicon::{CanonicalEntry, Forms, WordType};

    fn bare(word: &str, word_type: WordType) -> CanonicalEntry {
        CanonicalEntry {
            word: word.to_string(),
            word_type,
            paradigm: String::new(),
            group: String::new(),
            forms: Forms::None,
            gender: None,
        }
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LookupService>();
    }

    #[test]
    fn test_select_single() {
        let entry = Entry::Base(bare("och", WordType::Unknown));
        let result = LookupResult::Single {
            word: "och".to_string(),
            entry: &entry,
        };
        assert_eq!(result.select(0).unwrap(), entry);
        assert!(matches!(
            result.select(1),
            Err(OrdbokError::AmbiguousIndex { index: 1, len: 1, .. })
        ));
    }

    #[test]
    fn test_select_meaning_fills_word() {
        let meanings = [Meaning {
            word_type: WordType::Noun,
            description: Some("lane".to_string()),
            ..Meaning::default()
        }];
        let result = LookupResult::Ambiguous {
            word: "fil".to_string(),
            meanings: &meanings,
        };
        let entry = result.select(0).unwrap();
        assert!(matches!(&entry, Entry::Base(e) if e.word == "fil"));

        let err = result.select(3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'fil' has 1 meanings, but meaning #4 was selected"
        );
    }

    #[test]
    fn test_empty_service() {
        let service = LookupService::new(CompiledLexicon::default());
        assert!(service.lookup("hus").is_none());
        assert_eq!(service.suggest("h", 5).count(), 0);
        assert_eq!(service.stats(), LexiconStats::default());
    }
}
