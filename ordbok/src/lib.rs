//! # Ordbok
//!
//! Ordbokは、SALDO形態論語彙資源に基づくスウェーデン語の語彙コンパイラと検索サービスです。
//!
//! ## 概要
//!
//! 生の語彙資源(LMF XML または CSV)を読み込み、同形異義語の解決、
//! 変化グループと文法性の分類、活用表の生成を行って、
//! 表層形から語彙エントリへの写像をコンパイルします。
//! コンパイル結果はrkyv形式の成果物として書き出され、検索サービスが起動時に読み込みます。
//!
//! ## 主な機能
//!
//! - **語彙のコンパイル**: 同形異義語の解決と規則による活用表の生成
//! - **高速な読み込み**: rkyvアーカイブとZstandard圧縮の成果物
//! - **多段の検索**: 強変化動詞の上書き表、曖昧語の表、語彙の順に検索
//! - **カード表示**: 検索結果のMarkdown整形、曖昧語の候補一覧、前方一致の候補提示
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ordbok::{LexiconCompiler, LookupResult, LookupService};
//!
//! let csv = "writtenForm,partOfSpeech,paradigm
//! bil,nn,nn_2u_bil
//! vara,nn,nn_1u_vara
//! vara,vb,vb_4m_vara";
//!
//! let entries = ordbok::source::read_csv(csv.as_bytes())?;
//! let (lexicon, report) = LexiconCompiler::new().compile(entries);
//! assert_eq!(report.base_words, 2);
//!
//! let service = LookupService::new(lexicon);
//! let Some(LookupResult::Single { entry, .. }) = service.lookup("Bilarna") else {
//!     panic!("bilarna should be found");
//! };
//! assert_eq!(entry.base_word(), Some("bil"));
//!
//! let card = service.render_card(entry, "bilarna");
//! assert!(card.starts_with("📘 *BILARNA*"));
//! # Ok(())
//! # }
//! ```

/// カード表示
pub mod card;

/// 語彙コンパイラ
pub mod compiler;

/// 検索サービスの設定
pub mod config;

/// エラー型の定義
pub mod errors;

/// 語彙データ構造と成果物の読み書き
pub mod lexicon;

/// 検索サービス
pub mod service;

/// 生の語彙資源の読み込み
pub mod source;

/// 手書きの補助テーブル
pub mod tables;


// Re-exports
pub use compiler::{CompileReport, LexiconCompiler};
pub use config::ServiceConfig;
pub use lexicon::{CompiledLexicon, Entry};
pub use service::{LookupResult, LookupService};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
