//! 検索サービスの設定
//!
//! サービスが読み込む資源ファイルの種類と、その配置を定義します。
//! 既定ではすべての資源が1つのデータディレクトリに置かれます。

use std::fmt;
use std::path::{Path, PathBuf};

/// 既定のデータディレクトリ
pub const DEFAULT_DATA_DIR: &str = "data";

/// サービスが読み込む資源ファイルの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFile {
    /// コンパイル済み語彙。`<name>.zst` があればそちらが優先されます。
    Lexicon,
    /// 強変化動詞・助動詞の上書き表
    StrongVerbs,
    /// 曖昧語の表
    AmbiguousWords,
    /// 序数詞の表
    OrdinalNumbers,
}

impl DataFile {
    /// データディレクトリ内でのファイル名を返します。
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Lexicon => "dictionary.dic",
            Self::StrongVerbs => "strong_verbs.json",
            Self::AmbiguousWords => "ambiguous_words.json",
            Self::OrdinalNumbers => "ordinal_numbers.json",
        }
    }

    /// ログに出す名前を返します。
    pub const fn description(self) -> &'static str {
        match self {
            Self::Lexicon => "lexicon",
            Self::StrongVerbs => "strong/modal verbs",
            Self::AmbiguousWords => "ambiguous words",
            Self::OrdinalNumbers => "ordinal numbers",
        }
    }
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// 検索サービスの資源の配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub lexicon: PathBuf,
    pub strong_verbs: PathBuf,
    pub ambiguous_words: PathBuf,
    pub ordinal_numbers: PathBuf,
}

impl ServiceConfig {
    /// すべての資源を `dir` 直下の既定のファイル名から読み込む設定を作成します。
    pub fn from_data_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            lexicon: dir.join(DataFile::Lexicon.file_name()),
            strong_verbs: dir.join(DataFile::StrongVerbs.file_name()),
            ambiguous_words: dir.join(DataFile::AmbiguousWords.file_name()),
            ordinal_numbers: dir.join(DataFile::OrdinalNumbers.file_name()),
        }
    }

    /// 資源の種類に対応するパスを返します。
    pub fn path(&self, file: DataFile) -> &Path {
        match file {
            DataFile::Lexicon => &self.lexicon,
            DataFile::StrongVerbs => &self.strong_verbs,
            DataFile::AmbiguousWords => &self.ambiguous_words,
            DataFile::OrdinalNumbers => &self.ordinal_numbers,
        }
    }

    /// 語彙のパスを差し替えます。
    pub fn with_lexicon<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.lexicon = path.into();
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_data_dir(DEFAULT_DATA_DIR)
    }
}
