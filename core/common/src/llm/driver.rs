//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理を提供します。

use crate::error::Error;
use crate::llm::provider::LlmProvider;

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// LLMにクエリを送信してレスポンスを取得
    ///
    /// # Arguments
    /// * `query` - プロンプト全文
    /// * `system_instruction` - システム指示（オプション）
    ///
    /// # Returns
    /// * `Ok(String)` - LLMからの応答テキスト
    /// * `Err(Error)` - ペイロード生成・通信・パースのいずれかの失敗
    pub fn query(&self, query: &str, system_instruction: Option<&str>) -> Result<String, Error> {
        // リクエストペイロードを生成
        let payload = self.provider.make_request_payload(query, system_instruction)?;

        // JSON文字列に変換
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        // HTTPリクエストを実行
        let response_json = self.provider.make_http_request(&request_json)?;

        // レスポンスからテキストを抽出
        self.provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::http("No text in response"))
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
