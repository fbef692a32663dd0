//! CLI から組み立てる実行コマンド

use common::domain::{ModelName, ProviderName};
use std::path::PathBuf;

/// ptgen が実行するコマンド
#[derive(Debug, Clone, PartialEq)]
pub enum PtgenCommand {
    Help,
    /// 対話セッション（最初の要件を引数で渡すこともできる）
    Interactive {
        profile: Option<ProviderName>,
        model: Option<ModelName>,
        output_dir: Option<PathBuf>,
        requirement: Option<String>,
    },
}
