//! ユースケース（ポート経由でのみ I/O を行う）

pub mod assistant;
pub mod prompts;
pub mod session;
