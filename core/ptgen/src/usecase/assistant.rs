//! テストプラン作成アシスタント
//!
//! 提案・修正・最終生成の 3 操作を持ち、会話状態はこの構造体だけが（追記のみで）更新する。

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::ConversationState;
use crate::jmx::{self, PipelineOutcome};
use crate::ports::outbound::{Diagnostics, TextGenerator};
use crate::usecase::prompts;

/// 1 セッション分のアシスタント（再開時は作り直す）
pub struct PlanAssistant {
    generator: Arc<dyn TextGenerator>,
    diagnostics: Arc<dyn Diagnostics>,
    log: Arc<dyn Log>,
    conversation: ConversationState,
}

impl PlanAssistant {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        diagnostics: Arc<dyn Diagnostics>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            generator,
            diagnostics,
            log,
            conversation: ConversationState::new(),
        }
    }

    /// 要件から最初のテスト構成を提案させる。応答は加工せずに返す
    pub fn suggest(&mut self, requirement: &str) -> Result<String, Error> {
        let response = self
            .generator
            .generate(&prompts::suggestion_prompt(requirement))?;
        self.conversation.record(requirement, response.as_str());
        Ok(response)
    }

    /// これまでの会話とフィードバックから構成を更新させる
    pub fn refine(&mut self, feedback: &str) -> Result<String, Error> {
        let prompt = prompts::refinement_prompt(&self.conversation.transcript(), feedback);
        let response = self.generator.generate(&prompt)?;
        self.conversation.record(feedback, response.as_str());
        Ok(response)
    }

    /// 採用された構成から .jmx 文書を生成する
    ///
    /// 応答は抽出・修復・検証を経て返す。検証に通らなければ既定プランになる。
    /// 会話状態には追記しない。
    pub fn finalize(&self, final_setup: &str) -> Result<String, Error> {
        let prompt = prompts::generation_prompt(&self.conversation.transcript(), final_setup);
        let raw = self.generator.generate(&prompt)?;
        let outcome = jmx::build_document(&raw);
        self.report(&outcome);
        Ok(outcome.document)
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    fn report(&self, outcome: &PipelineOutcome) {
        if outcome.method == jmx::ExtractMethod::Failed {
            self.diagnostics
                .info("Could not extract XML from the model response");
        }
        for name in &outcome.removed_elements {
            self.diagnostics
                .warn(&format!("Removing incompatible element '{}' from JMX", name));
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Warn, "removed incompatible element")
                    .layer("usecase")
                    .kind("repair")
                    .field("element", *name),
            );
        }
        if outcome.used_fallback {
            self.diagnostics.info(&format!(
                "Generated plan is missing {}; using the default test plan",
                outcome.missing_markers.join(", ")
            ));
        }
        let _ = self.log.log(
            &LogRecord::new(
                LogLevel::Info,
                if outcome.used_fallback {
                    "pipeline fell back to default plan"
                } else {
                    "pipeline accepted generated plan"
                },
            )
            .layer("usecase")
            .kind("pipeline")
            .field("method", outcome.method.as_str())
            .field("removed", serde_json::json!(outcome.removed_elements))
            .field("missing", serde_json::json!(outcome.missing_markers))
            .field("fallback", outcome.used_fallback),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StubGenerator;
    use crate::domain::Exchange;
    use crate::tests::support::RecordingDiagnostics;
    use common::adapter::NoopLog;

    fn assistant(stub: Arc<StubGenerator>) -> PlanAssistant {
        PlanAssistant::new(stub, Arc::new(RecordingDiagnostics::default()), Arc::new(NoopLog))
    }

    #[test]
    fn test_suggest_returns_raw_response() {
        let stub = Arc::new(StubGenerator::new(["  TEST TYPE: Load  \n"]));
        let mut a = assistant(stub.clone());
        assert_eq!(a.suggest("api").unwrap(), "  TEST TYPE: Load  \n");
        assert!(stub.prompts()[0].contains("api"));
    }

    #[test]
    fn test_suggest_then_refine_appends_four_exchanges() {
        let stub = Arc::new(StubGenerator::new(["r1", "r2"]));
        let mut a = assistant(stub.clone());
        a.suggest("A").unwrap();
        a.refine("B").unwrap();
        assert_eq!(
            a.conversation().exchanges(),
            &[
                Exchange::user("A"),
                Exchange::assistant("r1"),
                Exchange::user("B"),
                Exchange::assistant("r2"),
            ]
        );
        assert!(stub.prompts()[1].contains("User: A\nAssistant: r1"));
    }

    #[test]
    fn test_generator_error_leaves_conversation_untouched() {
        let stub = Arc::new(StubGenerator::with_results([Err(Error::http("503"))]));
        let mut a = assistant(stub);
        let err = a.suggest("A").unwrap_err();
        assert_eq!(err, Error::http("503"));
        assert!(a.conversation().is_empty());
    }
}
