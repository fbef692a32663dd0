//! ptgen 共通ライブラリ
//!
//! LLM 呼び出し・ファイル・環境変数・ログなど、アプリが外界に触れる部分を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// LLMドライバーとプロバイダ
pub mod llm;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;
