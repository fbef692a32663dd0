//! Outbound ポート: アプリが外界を使うための trait

pub mod console;
pub mod diagnostics;
pub mod plan_store;
pub mod text_generator;

pub use console::Console;
pub use diagnostics::Diagnostics;
pub use plan_store::PlanStore;
pub use text_generator::TextGenerator;
