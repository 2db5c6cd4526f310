//! 語彙の JSON 出力モジュール
//!
//! コンパイル済み語彙を `{表層形: エントリ}` 形式の JSON に書き出します。
//! 出力は `build --json-in` でそのまま読み戻せます。

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use ordbok::CompiledLexicon;
use ordbok::errors::OrdbokError;

use clap::Parser;

/// JSON 出力コマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "export-json",
    about = "A program to export the lexicon artifact as JSON."
)]
pub struct Args {
    /// Compiled lexicon. A sibling `<path>.zst` is preferred when present.
    #[clap(short = 'i', long)]
    lexicon_in: PathBuf,

    /// File to which the JSON is output. Writes to stdout if not specified.
    #[clap(short = 'o', long)]
    json_out: Option<PathBuf>,
}

/// JSON 出力中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum ExportJsonError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 語彙の読み込みまたは出力のエラー
    #[error("Lexicon export failed: {0}")]
    Ordbok(#[from] OrdbokError),
}

/// JSON 出力コマンドを実行する
pub fn run(args: Args) -> Result<(), ExportJsonError> {
    tracing::info!("Loading the lexicon...");
    let lexicon = CompiledLexicon::load(&args.lexicon_in)?;

    match &args.json_out {
        Some(path) => {
            let mut wtr = BufWriter::new(File::create(path)?);
            lexicon.write_json(&mut wtr)?;
            wtr.flush()?;
            tracing::info!("Exported {} entries to {}", lexicon.len(), path.display());
        }
        None => {
            let mut wtr = BufWriter::new(io::stdout().lock());
            lexicon.write_json(&mut wtr)?;
            writeln!(wtr)?;
            wtr.flush()?;
        }
    }
    Ok(())
}
