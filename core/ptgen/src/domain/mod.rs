//! ptgen 固有のドメイン型（型と不変条件）

pub mod command;
pub mod conversation;
pub mod exchange;
pub mod menu;
pub mod plan_label;

pub use command::PtgenCommand;
pub use conversation::ConversationState;
#[cfg(test)]
pub use exchange::{Exchange, Role};
pub use menu::MenuChoice;
pub use plan_label::PlanLabel;
