//! エラー型の定義
//!
//! このモジュールは、ordbokライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt::{self, Debug};

/// ordbok専用のResult型
///
/// エラー型としてデフォルトで[`OrdbokError`]を使用します。
pub type Result<T, E = OrdbokError> = std::result::Result<T, E>;

/// ordbokのエラー型
///
/// このライブラリで発生する可能性のあるすべてのエラーを表現します。
/// 各バリアントは特定のエラー条件に対応しています。
#[derive(Debug, thiserror::Error)]
pub enum OrdbokError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 無効な状態エラー
    ///
    /// [`InvalidStateError`]のエラーバリアント。
    #[error(transparent)]
    InvalidState(InvalidStateError),

    /// 曖昧語の候補選択が範囲外
    ///
    /// 利用者が存在しない候補番号を選んだ場合に発生します。
    /// 利用者側の入力誤りであり、呼び出し側で報告されることを想定しています。
    #[error(
        "'{word}' has {len} meanings, but meaning #{number} was selected",
        number = .index + 1
    )]
    AmbiguousIndex {
        /// 問い合わせ語
        word: String,
        /// 選択された候補番号(0始まり)
        index: usize,
        /// 候補数
        len: usize,
    },

    /// ディレクトリが指定されたエラー
    ///
    /// ファイルが期待される場所にディレクトリが指定された場合に発生します。
    #[error("The path '{0}' is a directory, but a file was expected.")]
    PathIsDirectory(std::path::PathBuf),

    /// I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// JSONエラー
    ///
    /// 手書きの補助テーブルやJSON出力で発生する[`serde_json::Error`]。
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// XMLエラー
    ///
    /// LMF形式の語彙資源を読む際に発生する[`quick_xml::Error`]。
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    /// rkyvシリアライゼーションエラー
    ///
    /// [`rkyv::rancor::Error`](rkyv::rancor::Error)のエラーバリアント。
    #[error(transparent)]
    RkyvError(#[from] rkyv::rancor::Error),

    /// 一時ファイルの永続化エラー
    ///
    /// [`tempfile::PersistError`](tempfile::PersistError)のエラーバリアント。
    #[error(transparent)]
    PathPersist(#[from] tempfile::PersistError),
}

impl OrdbokError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効な状態エラーを生成します
    ///
    /// # 引数
    ///
    /// * `msg` - エラーメッセージ
    /// * `cause` - エラーの原因
    pub(crate) fn invalid_state<S, M>(msg: S, cause: M) -> Self
    where
        S: Into<String>,
        M: Into<String>,
    {
        Self::InvalidState(InvalidStateError {
            msg: msg.into(),
            cause: cause.into(),
        })
    }

    /// ファイルが存在しないことによるエラーかどうかを返します。
    ///
    /// サービス起動時に「資源の欠落」と「資源の破損」を区別するために使います。
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::IoError(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

/// 状態が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidStateError {
    /// エラーメッセージ
    pub(crate) msg: String,

    /// エラーの根本原因
    pub(crate) cause: String,
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidStateError: {}: {}", self.msg, self.cause)
    }
}

impl Error for InvalidStateError {}

impl From<quick_xml::events::attributes::AttrError> for OrdbokError {
    fn from(error: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(quick_xml::Error::from(error))
    }
}
