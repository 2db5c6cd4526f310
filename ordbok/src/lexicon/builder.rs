//! 語彙アリーナの構築
//!
//! 表層形の出現順を保ったまま、見出し語エントリと活用形エントリを積み上げます。
//! どちらが表層形を取るかの規則はここに集約されています。
//!
//! - 見出し語エントリは、同じ表層形の活用形エントリを位置を保ったまま置き換えます。
//!   既存の見出し語エントリは置き換えません。
//! - 活用形エントリは、表層形が未登録の場合にだけ追加されます(先勝ち)。

use hashbrown::HashMap;

use crate::lexicon::entry::{CanonicalEntry, Entry, FormEntry};
use crate::lexicon::{CompiledLexicon, LexiconTable};

/// 1回の挿入の結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// 新しい表層形として追加された
    Inserted,
    /// 既存の活用形エントリを置き換えた
    Replaced,
    /// 既存のエントリが残り、挿入は破棄された
    Kept,
}

/// [`CompiledLexicon`] のビルダー
#[derive(Default)]
pub struct LexiconBuilder {
    surfaces: Vec<String>,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登録済みの表層形の数を返します。
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, surface: &str) -> Option<&Entry> {
        self.index.get(surface).map(|&i| &self.entries[i])
    }

    /// 見出し語エントリを `entry.word` の位置に登録します。
    ///
    /// 活用形エントリが先に登録されていた場合は同じ位置で置き換えます。
    pub fn insert_base(&mut self, entry: CanonicalEntry) -> Insertion {
        if let Some(&i) = self.index.get(entry.word.as_str()) {
            let slot = &mut self.entries[i];
            if slot.is_form() {
                *slot = Entry::Base(entry);
                return Insertion::Replaced;
            }
            return Insertion::Kept;
        }
        let surface = entry.word.clone();
        self.push(surface, Entry::Base(entry));
        Insertion::Inserted
    }

    /// 活用形エントリを `surface` に登録します。表層形が登録済みなら何もしません。
    pub fn insert_form(&mut self, surface: &str, entry: FormEntry) -> Insertion {
        if self.index.contains_key(surface) {
            return Insertion::Kept;
        }
        self.push(surface.to_string(), Entry::Form(entry));
        Insertion::Inserted
    }

    /// 表層形とエントリをそのまま登録します。重複した表層形は後勝ちで上書きされます。
    ///
    /// JSON 形式の語彙を読み込む場合に使います。
    pub(crate) fn insert_raw(&mut self, surface: String, entry: Entry) {
        if let Some(&i) = self.index.get(surface.as_str()) {
            self.entries[i] = entry;
        } else {
            self.push(surface, entry);
        }
    }

    fn push(&mut self, surface: String, entry: Entry) {
        self.index.insert(surface.clone(), self.entries.len());
        self.surfaces.push(surface);
        self.entries.push(entry);
    }

    /// 不変の語彙を構築します。
    pub fn build(self) -> CompiledLexicon {
        let Self {
            surfaces,
            entries,
            index,
        } = self;
        CompiledLexicon::from_parts(LexiconTable { surfaces, entries }, index)
    }
}
