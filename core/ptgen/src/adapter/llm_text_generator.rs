//! LlmDriver を TextGenerator ポートとして使うアダプタ
//!
//! システム指示は配線時に一度だけ決め、以後は全呼び出しに同じものを付ける。

use std::sync::Arc;

use common::error::Error;
use common::llm::{LlmDriver, LlmProvider};
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::ports::outbound::TextGenerator;

pub struct LlmTextGenerator<P: LlmProvider + Send + Sync> {
    driver: LlmDriver<P>,
    system_instruction: String,
    log: Arc<dyn Log>,
}

impl<P: LlmProvider + Send + Sync> LlmTextGenerator<P> {
    pub fn new(driver: LlmDriver<P>, system_instruction: impl Into<String>, log: Arc<dyn Log>) -> Self {
        Self {
            driver,
            system_instruction: system_instruction.into(),
            log,
        }
    }
}

impl<P: LlmProvider + Send + Sync> TextGenerator for LlmTextGenerator<P> {
    fn generate(&self, prompt: &str) -> Result<String, Error> {
        let provider = self.driver.provider().name().to_string();
        let result = self.driver.query(prompt, Some(&self.system_instruction));
        let record = match &result {
            Ok(text) => LogRecord::new(LogLevel::Info, "llm call")
                .field("response_len", text.len()),
            Err(e) => LogRecord::new(LogLevel::Error, format!("llm call failed: {}", e)),
        };
        let _ = self.log.log(
            &record
                .layer("adapter")
                .kind("llm")
                .field("provider", provider)
                .field("prompt_len", prompt.len()),
        );
        result
    }
}
