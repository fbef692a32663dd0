//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・出力ディレクトリ・API キーを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 任意の環境変数を読む（未設定・空文字は None）
    fn var(&self, name: &str) -> Option<String>;

    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. PTGEN_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/ptgen（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/ptgen
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// プロバイダプロファイル設定ファイルのパス
    /// PTGEN_HOME があれば $PTGEN_HOME/config/profiles.json、なければ resolve_home_dir() 直下の profiles.json
    fn resolve_profiles_config_path(&self) -> Result<PathBuf, Error>;

    /// JSONL ログファイルのパス（<home>/logs/ptgen.jsonl）
    fn resolve_log_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.logs_dir().join("ptgen.jsonl"))
    }

    /// テストプラン出力先（PTGEN_OUTPUT_DIR、未設定なら None）
    fn output_dir_from_env(&self) -> Option<PathBuf> {
        self.var("PTGEN_OUTPUT_DIR").map(PathBuf::from)
    }
}
