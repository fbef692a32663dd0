//! テストプラン保存先の Outbound ポート

use crate::domain::PlanLabel;
use common::error::Error;
use std::path::PathBuf;

/// 生成したテストプランを保存し、保存先パスを返す
///
/// 保存ごとに異なるパスになること（同じラベルでも上書きしない）。
pub trait PlanStore: Send + Sync {
    fn save(&self, content: &str, label: &PlanLabel) -> Result<PathBuf, Error>;
}
