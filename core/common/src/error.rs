//! エラーハンドリング
//!
//! 全レイヤーで共有するエラー型。種別ごとに終了コードが決まる。

use thiserror::Error as ThisError;

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 引数・入力の不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// ファイル I/O・標準入出力の失敗
    #[error("{0}")]
    Io(String),
    /// JSON のシリアライズ／パース失敗
    #[error("{0}")]
    Json(String),
    /// LLM API 呼び出しの失敗
    #[error("{0}")]
    Http(String),
    /// 環境変数（API キー等）の不足
    #[error("{0}")]
    Env(String),
    /// その他のシステムエラー
    #[error("{0}")]
    System(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// システムエラー
    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセスの終了コード（sysexits.h 準拠）
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Io(_) | Self::Json(_) | Self::Http(_) => 74,
            Self::System(_) => 70,
            Self::Env(_) => 78,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
