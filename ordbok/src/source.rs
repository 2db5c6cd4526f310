//! 語彙資源の読み込み
//!
//! 形態論辞書の生レコードを [`RawLexicalEntry`] の列として読み込みます。
//! 対応する形式は次の2つです。
//!
//! - SALDO の LMF 形式 XML ([`read_lmf`])
//! - `writtenForm,partOfSpeech,paradigm` の3列からなる CSV ([`read_csv`])
//!
//! 見出し語の欠けたレコードなど、壊れたレコードはログを残して読み飛ばします。
//! I/O エラーと XML の構文エラーは読み込み全体を失敗させます。

mod csv;
mod lmf;

pub use crate::source::csv::{parse_csv, read_csv};
pub use crate::source::lmf::read_lmf;

/// 辞書資源の生レコード
///
/// 同じ表層形を持つレコードが複数あり得ます(同形異義語)。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawLexicalEntry {
    /// 小文字化された表層形
    pub surface_form: String,
    /// 品詞コード(例: `nn`, `vb`, `av`)
    pub part_of_speech: String,
    /// 活用パラダイム(例: `nn_6n_hus`)
    pub paradigm: String,
}

impl RawLexicalEntry {
    /// 表層形を正規化してレコードを作成します。
    ///
    /// 表層形が空になる場合は `None` を返します。
    pub fn new<S, P, Q>(written_form: S, part_of_speech: P, paradigm: Q) -> Option<Self>
    where
        S: AsRef<str>,
        P: Into<String>,
        Q: Into<String>,
    {
        let surface_form = written_form.as_ref().trim().to_lowercase();
        if surface_form.is_empty() {
            return None;
        }
        Some(Self {
            surface_form,
            part_of_speech: part_of_speech.into(),
            paradigm: paradigm.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_surface() {
        let entry = RawLexicalEntry::new(" Stockholm ", "pm", "pm_hph_stockholm").unwrap();
        assert_eq!(entry.surface_form, "stockholm");
        assert_eq!(entry.part_of_speech, "pm");

        let entry = RawLexicalEntry::new("ÄPPLE", "nn", "nn_5n_äpple").unwrap();
        assert_eq!(entry.surface_form, "äpple");
    }

    #[test]
    fn test_new_empty_surface() {
        assert!(RawLexicalEntry::new("  ", "nn", "nn_2u_bil").is_none());
    }
}
