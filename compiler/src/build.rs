//! 語彙のビルドモジュール
//!
//! このモジュールは、SALDO の語彙資源(LMF XML または CSV)から
//! バイナリ形式のコンパイル済み語彙を構築する機能を提供します。
//! 以前に書き出した JSON 形式の語彙を、そのまま成果物に変換することもできます。

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use ordbok::compiler::{CompileReport, LexiconCompiler, ResolutionOverrides};
use ordbok::errors::OrdbokError;
use ordbok::source::{read_csv, read_lmf};
use ordbok::CompiledLexicon;

use clap::Parser;

/// ビルドコマンドの引数
///
/// 語彙資源を1つと出力先を指定します。
#[derive(Parser, Debug)]
#[clap(
    name = "build",
    about = "A program to compile the lexicon artifact."
)]
pub struct Args {
    /// SALDO lexical resource in LMF XML (saldom.xml).
    #[clap(short = 's', long)]
    saldo_in: Option<PathBuf>,

    /// Lexical resource in CSV with columns writtenForm,partOfSpeech,paradigm.
    #[clap(short = 'l', long)]
    lexicon_in: Option<PathBuf>,

    /// Lexicon previously exported as JSON ({surface: entry}).
    ///
    /// The entries are converted as they are, without resolution or inflection.
    #[clap(short = 'j', long)]
    json_in: Option<PathBuf>,

    /// Homonym resolution overrides in JSON.
    ///
    /// The rows are merged over the built-in table (vara, ha, stor).
    #[clap(long)]
    overrides: Option<PathBuf>,

    /// Uses only the rows of --overrides and ignores the built-in table.
    #[clap(long, requires = "overrides")]
    no_builtin_overrides: bool,

    /// File to which the lexicon is output. Compressed in zstd if it ends with `.zst`.
    #[clap(short = 'o', long)]
    lexicon_out: PathBuf,
}

/// ビルド処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// 不正な引数の組み合わせ
    ///
    /// `--saldo-in`、`--lexicon-in`、`--json-in` のうち、
    /// ちょうど1つが指定されている必要があります。
    #[error(
        "Invalid argument combination: Exactly one of \
        --saldo-in, --lexicon-in, or --json-in must be specified."
    )]
    InvalidSourceArguments,

    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 語彙構築エラー
    #[error("Lexicon building failed: {0}")]
    Ordbok(#[from] OrdbokError),
}

/// 語彙ビルドのソースファイル情報
pub enum BuildSource {
    /// LMF 形式の XML から構築
    Saldo(PathBuf),
    /// 3列の CSV から構築
    Csv(PathBuf),
    /// JSON 形式の語彙から変換
    Json(PathBuf),
}

/// コマンドライン引数からビルドソースを決定する
///
/// # エラー
///
/// ソースが指定されていないか、複数指定されている場合、
/// `BuildError::InvalidSourceArguments`を返します。
fn get_source_from_args(args: &Args) -> Result<BuildSource, BuildError> {
    match (&args.saldo_in, &args.lexicon_in, &args.json_in) {
        (Some(path), None, None) => Ok(BuildSource::Saldo(path.clone())),
        (None, Some(path), None) => Ok(BuildSource::Csv(path.clone())),
        (None, None, Some(path)) => Ok(BuildSource::Json(path.clone())),
        _ => Err(BuildError::InvalidSourceArguments),
    }
}

/// 引数に従って同形異義語の例外表を用意する
fn load_overrides(args: &Args) -> Result<ResolutionOverrides, BuildError> {
    let mut overrides = if args.no_builtin_overrides {
        ResolutionOverrides::new()
    } else {
        ResolutionOverrides::builtin()
    };
    if let Some(path) = &args.overrides {
        let rows = ResolutionOverrides::from_path(path)?;
        tracing::info!("Loaded {} override rows from {}", rows.len(), path.display());
        overrides.extend(rows);
    }
    Ok(overrides)
}

/// ビルドコマンドを実行する
///
/// 指定されたソースから語彙を構築し、バイナリ形式で出力します。
///
/// # エラー
///
/// ファイルの読み書きや語彙構築に失敗した場合、`BuildError`を返します。
pub fn run(args: Args) -> Result<(), BuildError> {
    let source = get_source_from_args(&args)?;
    let compiler = LexiconCompiler::with_overrides(load_overrides(&args)?);

    tracing::info!("Compiling the lexicon...");
    let (lexicon, report) = build_lexicon(&source, &compiler)?;
    if let Some(report) = report {
        tracing::info!("{report}");
    }
    let stats = lexicon.stats();
    tracing::info!(
        "{} entries ({} base words, {} forms)",
        stats.total,
        stats.base_words,
        stats.word_forms
    );

    tracing::info!("Writing the lexicon...");
    lexicon.write_to_path(&args.lexicon_out)?;

    tracing::info!(
        "Successfully built the lexicon to {}",
        args.lexicon_out.display()
    );
    Ok(())
}

/// 指定されたソースから語彙を構築する
///
/// CLIに依存しないコアのビルドロジックです。
/// JSON から変換した場合、コンパイル結果の集計は返されません。
pub fn build_lexicon(
    source: &BuildSource,
    compiler: &LexiconCompiler,
) -> Result<(CompiledLexicon, Option<CompileReport>), BuildError> {
    let entries = match source {
        BuildSource::Saldo(path) => read_lmf(open(path)?)?,
        BuildSource::Csv(path) => read_csv(open(path)?)?,
        BuildSource::Json(path) => {
            let lexicon = CompiledLexicon::from_json_reader(open(path)?)?;
            return Ok((lexicon, None));
        }
    };
    tracing::info!("Read {} raw entries", entries.len());
    let (lexicon, report) = compiler.compile(entries);
    Ok((lexicon, Some(report)))
}

fn open(path: &Path) -> Result<BufReader<File>, BuildError> {
    Ok(BufReader::new(File::open(path)?))
}
