//! 生成モデル呼び出しの Outbound ポート
//!
//! usecase からはプロンプトを渡して応答テキストを受け取るだけの不透明な関数に見える。
//! 応答の形式（セクション・XML）は一切保証されない。

use common::error::Error;

/// プロンプト 1 つに対して応答テキストを 1 つ返す（ブロッキング）
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, Error>;
}
