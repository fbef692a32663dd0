//! Ports & Adapters のポート定義
//!
//! - inbound: CLI がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（LLM・保存先・コンソール・診断出力）を使うための trait

pub mod inbound;
pub mod outbound;
