//! 手書きの補助テーブル
//!
//! サービス起動時に読み込む JSON テーブルです。いずれも読み取り専用です。
//!
//! | ファイル | 型 | 内容 |
//! |---|---|---|
//! | `strong_verbs.json` | [`StrongVerbTable`] | 表層形 → 完成済みのエントリ(最優先) |
//! | `ambiguous_words.json` | [`AmbiguousTable`] | 表層形 → 意味の候補列 |
//! | `ordinal_numbers.json` | [`OrdinalTable`] | 基数詞 → 序数詞 |
//!
//! ファイルが存在しない場合は警告を、解析に失敗した場合はエラーをログに残し、
//! どちらの場合も空のテーブルで続行します。

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hashbrown::HashMap;
use serde::de::DeserializeOwned;

use crate::errors::Result;
use crate::lexicon::{Entry, Meaning};

/// 強変化動詞・助動詞の上書き表
pub type StrongVerbTable = HashMap<String, Entry>;

/// 曖昧語の表
pub type AmbiguousTable = HashMap<String, Vec<Meaning>>;

/// 序数詞の表
pub type OrdinalTable = HashMap<String, String>;

/// JSON から読み込めるテーブル
pub trait Table: DeserializeOwned + Default {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: DeserializeOwned> Table for HashMap<String, V> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

/// JSON ファイルを読み込みます。
pub fn read_json<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let rdr = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(rdr)?)
}

/// テーブルを読み込みます。失敗した場合は空のテーブルを返します。
///
/// `what` はログに出すテーブルの名前です。
pub fn load_or_empty<T, P>(path: P, what: &str) -> T
where
    T: Table,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match read_json::<T, _>(path) {
        Ok(table) => {
            log::info!("Loaded {} {what}", table.len());
            table
        }
        Err(e) if e.is_not_found() => {
            log::warn!("{what} file not found: {}", path.display());
            T::default()
        }
        Err(e) => {
            log::error!("Error parsing {what} {}: {e}", path.display());
            T::default()
        }
    }
}
