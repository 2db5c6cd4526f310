use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::errors::Result;
use crate::source::RawLexicalEntry;

/// `FormRepresentation` 要素に含まれる素性
#[derive(Default)]
struct FormFeatures {
    written_form: Option<String>,
    part_of_speech: Option<String>,
    paradigm: Option<String>,
}

impl FormFeatures {
    fn set(&mut self, att: &str, val: String) {
        match att {
            "writtenForm" => self.written_form = Some(val),
            "partOfSpeech" => self.part_of_speech = Some(val),
            "paradigm" => self.paradigm = Some(val),
            _ => {}
        }
    }

    fn into_entry(self) -> Option<RawLexicalEntry> {
        let Some(written_form) = self.written_form else {
            log::debug!("skipped a FormRepresentation without writtenForm");
            return None;
        };
        let entry = RawLexicalEntry::new(
            &written_form,
            self.part_of_speech.unwrap_or_default(),
            self.paradigm.unwrap_or_default(),
        );
        if entry.is_none() {
            log::debug!("skipped an empty writtenForm {written_form:?}");
        }
        entry
    }
}

/// SALDO の LMF 形式 XML を読み込みます。
///
/// `LexicalEntry` 内の各 `FormRepresentation` について、
/// `<feat att="..." val="..."/>` から `writtenForm`、`partOfSpeech`、`paradigm` を取り出します。
/// 1つの `LexicalEntry` が複数の `FormRepresentation` を持つ場合は、それぞれがレコードになります。
///
/// # エラー
///
/// 読み込みに失敗した場合や、XML が整形式でない場合にエラーを返します。
pub fn read_lmf<R>(rdr: R) -> Result<Vec<RawLexicalEntry>>
where
    R: BufRead,
{
    let mut reader = Reader::from_reader(rdr);
    let mut buf = vec![];
    let mut entries = vec![];

    let mut entry_depth = 0usize;
    let mut current: Option<FormFeatures> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"LexicalEntry" => entry_depth += 1,
                b"FormRepresentation" if entry_depth > 0 => {
                    current = Some(FormFeatures::default());
                }
                b"feat" => read_feat(&e, current.as_mut())?,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"feat" => read_feat(&e, current.as_mut())?,
                b"FormRepresentation" if entry_depth > 0 => {
                    log::debug!("skipped an empty FormRepresentation");
                }
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"FormRepresentation" => {
                    if let Some(entry) = current.take().and_then(FormFeatures::into_entry) {
                        entries.push(entry);
                    }
                }
                b"LexicalEntry" => entry_depth = entry_depth.saturating_sub(1),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}

fn read_feat(e: &BytesStart<'_>, features: Option<&mut FormFeatures>) -> Result<()> {
    let Some(features) = features else {
        return Ok(());
    };
    let mut att = None;
    let mut val = None;
    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"att" => att = Some(attr.unescape_value()?.into_owned()),
            b"val" => val = Some(attr.unescape_value()?.into_owned()),
            _ => {}
        }
    }
    if let (Some(att), Some(val)) = (att, val) {
        features.set(&att, val);
    }
    Ok(())
}
