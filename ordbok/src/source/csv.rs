use std::io::Read;

use csv_core::ReadFieldResult;

use crate::errors::{OrdbokError, Result};
use crate::source::RawLexicalEntry;

const HEADER_FIELD: &str = "writtenForm";

/// CSV 形式の語彙資源を読み込みます。
///
/// 各行は `writtenForm,partOfSpeech,paradigm` の3列です。
/// 先頭行が `writtenForm` で始まる場合はヘッダーとして読み飛ばします。
pub fn read_csv<R>(mut rdr: R) -> Result<Vec<RawLexicalEntry>>
where
    R: Read,
{
    let mut buf = vec![];
    rdr.read_to_end(&mut buf)?;
    parse_csv(&buf, "lexicon.csv")
}

/// CSV のバイト列を解析します。
///
/// 列数の合わないレコードと表層形が空のレコードは読み飛ばします。
///
/// # エラー
///
/// フィールドが UTF-8 として不正な場合にエラーを返します。
pub fn parse_csv(mut bytes: &[u8], name: &'static str) -> Result<Vec<RawLexicalEntry>> {
    let mut entries = vec![];

    let mut rdr = csv_core::Reader::new();
    let mut output = [0; 4096];
    let mut field = vec![];
    let mut record: Vec<String> = vec![];
    let mut first_record = true;

    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        bytes = &bytes[nin..];
        field.extend_from_slice(&output[..nout]);
        match result {
            // 入力が尽きた後は空のスライスを渡すことで終端が通知される
            ReadFieldResult::InputEmpty | ReadFieldResult::OutputFull => continue,
            ReadFieldResult::End => break,
            ReadFieldResult::Field { record_end } => {
                let value = std::str::from_utf8(&field).map_err(|e| {
                    OrdbokError::invalid_format(
                        name,
                        format!("line {}: invalid UTF-8 ({e})", rdr.line()),
                    )
                })?;
                record.push(value.to_string());
                field.clear();
                if !record_end {
                    continue;
                }
            }
        }

        let is_header = first_record && record.first().is_some_and(|f| f == HEADER_FIELD);
        first_record = false;
        if !is_header {
            push_record(&mut entries, &record, rdr.line());
        }
        record.clear();
    }

    Ok(entries)
}

fn push_record(entries: &mut Vec<RawLexicalEntry>, record: &[String], line: u64) {
    let [written_form, part_of_speech, paradigm] = record else {
        log::debug!(
            "skipped a record with {} fields at line {line}: {record:?}",
            record.len()
        );
        return;
    };
    match RawLexicalEntry::new(written_form, part_of_speech.as_str(), paradigm.as_str()) {
        Some(entry) => entries.push(entry),
        None => log::debug!("skipped an empty surface at line {line}"),
    }
}
