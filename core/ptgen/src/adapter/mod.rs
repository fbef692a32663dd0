//! アダプター（ptgen の Outbound ポート実装）

pub mod file_plan_store;
pub mod llm_text_generator;
pub mod stderr_diagnostics;
pub mod std_console;
pub mod stub_generator;

pub use file_plan_store::FilePlanStore;
pub use llm_text_generator::LlmTextGenerator;
pub use stderr_diagnostics::StderrDiagnostics;
pub use std_console::StdConsole;
#[cfg(test)]
pub use stub_generator::StubGenerator;
