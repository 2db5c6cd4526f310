//! 語彙を検索するユーティリティ
//!
//! このバイナリは、標準入力から1行に1語を読み込んで検索し、
//! 結果のカードを標準出力に出力します。
//!
//! 曖昧語には候補の一覧が出力されます。`<語> <番号>` の形で入力すると、
//! 1から数えたその番号の候補のカードが出力されます。

use std::io::{self, BufRead, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use ordbok::config::DEFAULT_DATA_DIR;
use ordbok::{LookupService, ServiceConfig};

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "lookup", about = "Looks up Swedish words", version)]
struct Args {
    /// Directory containing dictionary.dic and the JSON tables.
    #[clap(short = 'd', long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Compiled lexicon. Overrides <DATA_DIR>/dictionary.dic.
    #[clap(short = 'i', long)]
    lexicon: Option<PathBuf>,

    /// Prints the statistics of the lexicon and exits.
    #[clap(long)]
    stats: bool,
}

/// 検索中に発生する可能性のあるエラー
#[derive(Debug, Error)]
enum LookupError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// 入力行の解釈
enum Query<'a> {
    /// 語の検索
    Word(&'a str),
    /// 曖昧語の候補の選択(1始まり)
    Select(&'a str, usize),
}

impl<'a> Query<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if let Some((word, number)) = line.rsplit_once(char::is_whitespace)
            && let Ok(number) = number.parse::<usize>()
        {
            return Some(Self::Select(word.trim_end(), number));
        }
        Some(Self::Word(line))
    }
}

/// 1行分の応答を作成する
fn respond(service: &LookupService, query: Query<'_>) -> String {
    match query {
        Query::Word(word) => match service.lookup(word) {
            Some(result) => service.render_result(&result),
            None => service.render_not_found(word),
        },
        Query::Select(word, number) => {
            let Some(result) = service.lookup(word) else {
                return service.render_not_found(word);
            };
            let Some(index) = number.checked_sub(1) else {
                return "Meaning numbers start at 1.\n".to_string();
            };
            match result.select(index) {
                Ok(entry) => service.render_card(&entry, result.word()),
                Err(e) => format!("{e}\n"),
            }
        }
    }
}

/// メイン関数
///
/// 語彙とテーブルを読み込み、標準入力の各行を検索して結果を標準出力に出力します。
fn main() -> Result<(), LookupError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = ServiceConfig::from_data_dir(&args.data_dir);
    if let Some(lexicon) = args.lexicon {
        config = config.with_lexicon(lexicon);
    }

    tracing::info!("ordbok {}: loading the lexicon...", ordbok::VERSION);
    let service = LookupService::from_config(&config);

    let out = io::stdout();
    let is_tty = out.is_terminal();
    let mut out = BufWriter::new(out.lock());

    if args.stats {
        out.write_all(ordbok::card::render_stats(&service.stats()).as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    tracing::info!("Ready to look up");

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(query) = Query::parse(&line) else {
            continue;
        };
        out.write_all(respond(&service, query).as_bytes())?;
        out.write_all(b"\n")?;
        if is_tty {
            out.flush()?;
        }
    }
    out.flush()?;

    Ok(())
}
