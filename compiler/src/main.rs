//! Ordbok 語彙コンパイラのメインエントリーポイント
//!
//! このモジュールは、コンパイル済み語彙を扱うためのサブコマンドを提供します。
//! 語彙資源からの成果物のビルドと、成果物の JSON 出力を統合したCLIツールです。
//!
//! ログの出力先は標準エラー出力で、`RUST_LOG` で詳細度を変更できます。

mod build;
mod export_json;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::{build::BuildError, export_json::ExportJsonError};

/// コマンドライン引数の構造体
#[derive(Parser, Debug)]
#[clap(name = "compile", version)]
struct Cli {
    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 利用可能なサブコマンド
#[derive(Parser, Debug)]
enum Command {
    /// 語彙資源からバイナリ語彙を構築します
    ///
    /// 同形異義語の解決と活用表の生成を行い、検索サービスが読み込む成果物を出力します。
    Build(build::Args),

    /// バイナリ語彙を JSON 形式で出力します
    ExportJson(export_json::Args),
}

/// コンパイラの実行中に発生する可能性のあるエラー
///
/// 各サブコマンドで発生したエラーをラップします。
#[derive(Debug, Error)]
pub enum CompileError {
    /// 語彙ビルド中のエラー
    #[error(transparent)]
    BuildError(#[from] BuildError),
    /// JSON 出力中のエラー
    #[error(transparent)]
    ExportJsonError(#[from] ExportJsonError),
}

/// メイン関数
///
/// コマンドライン引数をパースし、指定されたサブコマンドを実行します。
fn main() -> Result<(), CompileError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Build(args) => Ok(build::run(args)?),
        Command::ExportJson(args) => Ok(export_json::run(args)?),
    }
}
