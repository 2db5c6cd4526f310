//! 語彙コンパイラ
//!
//! 生レコードの列から [`CompiledLexicon`] を構築します。処理は次の順に進みます。
//!
//! 1. 表層形ごとにレコードをまとめる(表層形は初出順、グループ内は入力順)
//! 2. 同形異義語を解決して1件を選ぶ([`resolve`])
//! 3. 分類、変化グループ、文法性を決める([`classify`])
//! 4. 活用表を生成する([`inflect`])
//! 5. 見出し語エントリを登録し、続いて活用形エントリを先勝ちで登録する
//!
//! 同じ入力を同じ順序で与えれば、同じ語彙が得られます。
//!
//! # 例
//!
//! ```
//! use ordbok::compiler::LexiconCompiler;
//! use ordbok::source::RawLexicalEntry;
//!
//! let entries = [
//!     RawLexicalEntry::new("hus", "nn", "nn_6n_hus").unwrap(),
//!     RawLexicalEntry::new("vara", "nn", "nn_1u_vara").unwrap(),
//!     RawLexicalEntry::new("vara", "vb", "vb_4m_vara").unwrap(),
//! ];
//! let (lexicon, report) = LexiconCompiler::new().compile(entries);
//!
//! assert_eq!(report.base_words, 2);
//! assert_eq!(lexicon.get("huset").and_then(|e| e.base_word()), Some("hus"));
//! assert_eq!(lexicon.get("är").and_then(|e| e.base_word()), Some("vara"));
//! ```

pub mod classify;
pub mod inflect;
pub mod resolve;

use std::fmt;

use hashbrown::HashMap;

use crate::lexicon::{
    CanonicalEntry, CompiledLexicon, FormEntry, Insertion, LexiconBuilder, NO_FORM, WordType,
};
use crate::source::RawLexicalEntry;

pub use crate::compiler::resolve::{ResolutionOverrides, Selector};

/// コンパイル結果の集計
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompileReport {
    /// 入力された生レコードの数
    pub raw_entries: usize,
    /// 見出し語(異なり表層形)の数
    pub base_words: usize,
    /// 候補が2件以上あった表層形の数
    pub homonym_groups: usize,
    /// 例外表で解決された表層形の数
    pub overrides_applied: usize,
    /// 活用表を持たない見出し語エントリの数
    pub bare_entries: usize,
    /// 登録された活用形エントリの数
    pub forms_inserted: usize,
    /// 表層形が登録済みで破棄された活用形の数
    pub form_collisions: usize,
    /// 後から来た見出し語エントリに置き換えられた活用形エントリの数
    pub forms_displaced: usize,
}

impl fmt::Display for CompileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "raw_entries={} base_words={} homonym_groups={} overrides_applied={} \
             bare_entries={} forms_inserted={} form_collisions={} forms_displaced={}",
            self.raw_entries,
            self.base_words,
            self.homonym_groups,
            self.overrides_applied,
            self.bare_entries,
            self.forms_inserted,
            self.form_collisions,
            self.forms_displaced,
        )
    }
}

/// 語彙コンパイラ
#[derive(Clone, Debug)]
pub struct LexiconCompiler {
    overrides: ResolutionOverrides,
}

impl Default for LexiconCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconCompiler {
    /// 組み込みの例外表を使うコンパイラを作成します。
    pub fn new() -> Self {
        Self::with_overrides(ResolutionOverrides::builtin())
    }

    pub fn with_overrides(overrides: ResolutionOverrides) -> Self {
        Self { overrides }
    }

    /// 生レコードから語彙をコンパイルします。
    pub fn compile<I>(&self, entries: I) -> (CompiledLexicon, CompileReport)
    where
        I: IntoIterator<Item = RawLexicalEntry>,
    {
        let mut report = CompileReport::default();
        let groups = group_by_surface(entries, &mut report.raw_entries);

        let mut builder = LexiconBuilder::new();
        for (word, candidates) in &groups {
            let Some(resolution) = resolve::resolve(word, candidates, &self.overrides) else {
                continue;
            };
            report.base_words += 1;
            if candidates.len() > 1 {
                report.homonym_groups += 1;
            }
            if resolution.overridden {
                report.overrides_applied += 1;
            }

            let base = canonical_entry(word, resolution.entry);
            if base.forms.is_none() {
                report.bare_entries += 1;
            }
            explode(&mut builder, base, &mut report);
        }

        (builder.build(), report)
    }
}

/// 見出し語エントリと、その活用形エントリを登録します。
fn explode(
    builder: &mut LexiconBuilder,
    base: CanonicalEntry,
    report: &mut CompileReport,
) {
    let forms: Vec<(&'static str, FormEntry, String)> = base
        .forms
        .labeled_slots()
        .into_iter()
        .filter(|(_, surface)| !surface.is_empty() && *surface != NO_FORM && *surface != base.word)
        .map(|(label, surface)| (label, FormEntry::from_base(&base, label), surface.to_string()))
        .collect();

    match builder.insert_base(base) {
        Insertion::Replaced => report.forms_displaced += 1,
        Insertion::Kept => log::warn!("a base entry was registered twice"),
        Insertion::Inserted => {}
    }

    for (label, form, surface) in forms {
        match builder.insert_form(&surface, form) {
            Insertion::Inserted => report.forms_inserted += 1,
            _ => {
                log::trace!("kept the existing entry of {surface:?} over its {label} form");
                report.form_collisions += 1;
            }
        }
    }
}

/// 表層形ごとに候補をまとめます。表層形は初出順に並びます。
fn group_by_surface<I>(entries: I, count: &mut usize) -> Vec<(String, Vec<RawLexicalEntry>)>
where
    I: IntoIterator<Item = RawLexicalEntry>,
{
    let mut groups: Vec<(String, Vec<RawLexicalEntry>)> = vec![];
    let mut index: HashMap<String, usize> = HashMap::new();
    for entry in entries {
        *count += 1;
        match index.get(entry.surface_form.as_str()) {
            Some(&i) => groups[i].1.push(entry),
            None => {
                index.insert(entry.surface_form.clone(), groups.len());
                groups.push((entry.surface_form.clone(), vec![entry]));
            }
        }
    }
    groups
}

/// 選ばれた生レコードから正規エントリを作成します。
pub fn canonical_entry(word: &str, raw: &RawLexicalEntry) -> CanonicalEntry {
    let word_type = classify::word_type(&raw.part_of_speech);
    CanonicalEntry {
        word: word.to_string(),
        paradigm: raw.paradigm.clone(),
        group: classify::group(&raw.paradigm, &word_type).to_string(),
        forms: inflect::generate_forms(word, &raw.paradigm, &word_type),
        gender: (word_type == WordType::Noun).then(|| classify::gender(&raw.paradigm)),
        word_type,
    }
}
