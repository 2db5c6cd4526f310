//! コンパイル済み語彙
//!
//! このモジュールは、表層形から語彙エントリへの写像である [`CompiledLexicon`] と、
//! そのバイナリ成果物の読み書きを提供します。
//!
//! - 表層形は挿入順(初出順)に並び、反復もその順序で行われます。
//! - 成果物はマジックバイト、16バイト境界までのパディング、rkyv アーカイブの順に並びます。
//! - `.zst` で終わるパスは Zstandard 圧縮された成果物として扱われます。
//!
//! # 語彙の読み込み方法
//!
//! - [`CompiledLexicon::load`]: `.zst` 版があればそちらを優先して読み込む(推奨)
//! - [`CompiledLexicon::from_path`]: 非圧縮の成果物を読み込む
//! - [`CompiledLexicon::from_zstd`]: 圧縮された成果物を読み込む
//! - [`CompiledLexicon::read`]: リーダーから読み込む
mod builder;
mod entry;

use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use rkyv::rancor::Error;
use rkyv::util::AlignedVec;
use rkyv::{Archive, Deserialize, Serialize};

use crate::errors::{OrdbokError, Result};

pub use crate::lexicon::builder::{Insertion, LexiconBuilder};
pub use crate::lexicon::entry::{
    ADJECTIVE_SLOT_LABELS, AdjectiveForms, CanonicalEntry, Entry, FormEntry, Forms, Gender,
    Meaning, NO_FORM, NOUN_SLOT_LABELS, NounForms, VERB_SLOT_LABELS, VerbForms, WordType,
};

/// コンパイル済み語彙を識別するマジックバイト。
///
/// "0.2" は成果物フォーマットのバージョンで、クレートのバージョンとは独立しています。
pub const LEXICON_MAGIC: &[u8] = b"OrdbokLexiconRkyv 0.2\n";

const LEXICON_MAGIC_LEN: usize = LEXICON_MAGIC.len();
const RKYV_ALIGNMENT: usize = 16;
const PADDING_LEN: usize =
    (RKYV_ALIGNMENT - (LEXICON_MAGIC_LEN % RKYV_ALIGNMENT)) % RKYV_ALIGNMENT;

/// 圧縮成果物の Zstandard 圧縮レベル
pub const ZSTD_LEVEL: i32 = 19;

/// 書き出した成果物のパーミッション
#[cfg(unix)]
pub const ARTIFACT_MODE: u32 = 0o644;

/// rkyv でアーカイブされる語彙本体
#[derive(Default, Archive, Serialize, Deserialize)]
pub(crate) struct LexiconTable {
    surfaces: Vec<String>,
    entries: Vec<Entry>,
}

/// 表層形から語彙エントリへの不変の写像
///
/// 表層形ごとにエントリは1つだけです。[`LexiconBuilder`] で構築するか、
/// 成果物ファイルから読み込みます。
#[derive(Default)]
pub struct CompiledLexicon {
    table: LexiconTable,
    index: HashMap<String, usize>,
}

impl CompiledLexicon {
    pub(crate) fn from_parts(table: LexiconTable, index: HashMap<String, usize>) -> Self {
        Self { table, index }
    }

    fn from_table(table: LexiconTable) -> Result<Self> {
        if table.surfaces.len() != table.entries.len() {
            return Err(OrdbokError::invalid_state(
                "lexicon table is inconsistent",
                format!(
                    "{} surfaces but {} entries",
                    table.surfaces.len(),
                    table.entries.len()
                ),
            ));
        }
        let mut index = HashMap::with_capacity(table.surfaces.len());
        for (i, surface) in table.surfaces.iter().enumerate() {
            if index.insert(surface.clone(), i).is_some() {
                return Err(OrdbokError::invalid_state(
                    "lexicon table is inconsistent",
                    format!("duplicate surface form {surface:?}"),
                ));
            }
        }
        Ok(Self { table, index })
    }

    /// 表層形の数を返します。
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.table.entries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.table.entries.is_empty()
    }

    /// 表層形のエントリを返します。
    pub fn get(&self, surface: &str) -> Option<&Entry> {
        self.index.get(surface).map(|&i| &self.table.entries[i])
    }

    /// 表層形とエントリの組を挿入順に返します。
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> + '_ {
        self.table
            .surfaces
            .iter()
            .map(String::as_str)
            .zip(self.table.entries.iter())
    }

    /// 語彙の統計情報を計算します。品詞別の件数には活用形エントリも含まれます。
    pub fn stats(&self) -> LexiconStats {
        let mut stats = LexiconStats {
            total: self.len(),
            ..LexiconStats::default()
        };
        for entry in &self.table.entries {
            if entry.is_form() {
                stats.word_forms += 1;
            } else {
                stats.base_words += 1;
            }
            match entry.word_type() {
                WordType::Noun => stats.nouns += 1,
                WordType::Verb => stats.verbs += 1,
                WordType::Adjective => stats.adjectives += 1,
                _ => {}
            }
        }
        stats
    }

    /// 語彙をライターにエクスポートします。
    ///
    /// 同じ語彙からは常に同じバイト列が出力されます。
    ///
    /// # エラー
    ///
    /// 書き込みまたは rkyv のシリアライズに失敗した場合にエラーを返します。
    pub fn write<W>(&self, mut wtr: W) -> Result<()>
    where
        W: Write,
    {
        wtr.write_all(LEXICON_MAGIC)?;

        let padding_bytes = [0xFF; PADDING_LEN];
        wtr.write_all(&padding_bytes)?;

        let bytes = rkyv::to_bytes::<Error>(&self.table)?;
        wtr.write_all(&bytes)?;

        Ok(())
    }

    /// リーダーから語彙を読み込みます。
    ///
    /// # エラー
    ///
    /// マジックバイトが一致しない場合や、データが破損している場合にエラーを返します。
    pub fn read<R: Read>(mut rdr: R) -> Result<Self> {
        let mut magic = [0; LEXICON_MAGIC_LEN];
        rdr.read_exact(&mut magic)?;
        if magic.as_slice() != LEXICON_MAGIC {
            return Err(OrdbokError::invalid_argument(
                "rdr",
                "The magic number of the input lexicon mismatches.",
            ));
        }

        let mut padding_buf = [0; PADDING_LEN];
        rdr.read_exact(&mut padding_buf)?;

        let mut buffer = Vec::new();
        rdr.read_to_end(&mut buffer)?;

        let mut aligned_bytes: AlignedVec = AlignedVec::with_capacity(buffer.len());
        aligned_bytes.extend_from_slice(&buffer);

        let table = rkyv::from_bytes::<LexiconTable, Error>(&aligned_bytes).map_err(|e| {
            OrdbokError::invalid_state(
                "rkyv validation failed. The lexicon file may be corrupted or incompatible."
                    .to_string(),
                e.to_string(),
            )
        })?;

        Self::from_table(table)
    }

    /// 非圧縮の成果物ファイルから語彙を読み込みます。
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(OrdbokError::PathIsDirectory(path.to_path_buf()));
        }
        Self::read(BufReader::new(File::open(path)?))
    }

    /// Zstandard 圧縮された成果物ファイルから語彙を読み込みます。
    pub fn from_zstd<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(OrdbokError::PathIsDirectory(path.to_path_buf()));
        }
        let decoder = zstd::Decoder::new(File::open(path)?)?;
        Self::read(decoder)
    }

    /// 成果物ファイルから語彙を読み込みます。
    ///
    /// `path` が `.zst` で終わる場合は圧縮ファイルとして読み込みます。
    /// そうでない場合、`<path>.zst` が存在すればそちらを優先します。
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if is_zstd_path(path) {
            return Self::from_zstd(path);
        }
        let compressed = zstd_sibling(path);
        if compressed.is_file() {
            log::debug!("loading compressed lexicon {}", compressed.display());
            return Self::from_zstd(compressed);
        }
        Self::from_path(path)
    }

    /// 成果物ファイルを書き出します。
    ///
    /// 同じディレクトリの一時ファイルに書いてから置き換えるため、
    /// 途中で失敗しても既存のファイルは壊れません。
    /// `path` が `.zst` で終わる場合は Zstandard で圧縮します。
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(OrdbokError::PathIsDirectory(path.to_path_buf()));
        }
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = tempfile::NamedTempFile::new_in(dir)?;
        {
            let mut wtr = BufWriter::new(temp_file.as_file_mut());
            if is_zstd_path(path) {
                let mut encoder = zstd::Encoder::new(&mut wtr, ZSTD_LEVEL)?;
                self.write(&mut encoder)?;
                encoder.finish()?;
            } else {
                self.write(&mut wtr)?;
            }
            wtr.flush()?;
        }
        // 一時ファイルは所有者のみ読み書き可能な状態で作成される
        #[cfg(unix)]
        {
            let mut perms = temp_file.as_file().metadata()?.permissions();
            perms.set_mode(ARTIFACT_MODE);
            temp_file.as_file().set_permissions(perms)?;
        }
        temp_file.persist(path)?;

        Ok(())
    }

    /// 語彙を `{表層形: エントリ}` 形式の JSON として書き出します。
    pub fn write_json<W: Write>(&self, wtr: W) -> Result<()> {
        serde_json::to_writer_pretty(wtr, self)?;
        Ok(())
    }

    /// `{表層形: エントリ}` 形式の JSON から語彙を読み込みます。
    ///
    /// キーの出現順がそのまま語彙の順序になります。
    pub fn from_json_reader<R: Read>(rdr: R) -> Result<Self> {
        Ok(serde_json::from_reader(rdr)?)
    }
}

impl fmt::Debug for CompiledLexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledLexicon")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl serde::Serialize for CompiledLexicon {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<'de> serde::Deserialize<'de> for CompiledLexicon {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct LexiconVisitor;

        impl<'de> serde::de::Visitor<'de> for LexiconVisitor {
            type Value = CompiledLexicon;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from surface forms to lexicon entries")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut builder = LexiconBuilder::new();
                while let Some((surface, entry)) = map.next_entry::<String, Entry>()? {
                    builder.insert_raw(surface, entry);
                }
                Ok(builder.build())
            }
        }

        deserializer.deserialize_map(LexiconVisitor)
    }
}

/// 語彙の統計情報
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct LexiconStats {
    /// 表層形の総数
    pub total: usize,
    /// 見出し語エントリの数
    pub base_words: usize,
    /// 活用形エントリの数
    pub word_forms: usize,
    pub nouns: usize,
    pub verbs: usize,
    pub adjectives: usize,
}

fn is_zstd_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zst")
}

/// `<path>.zst` を返します。
pub fn zstd_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".zst");
    PathBuf::from(name)
}
