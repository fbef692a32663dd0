//! 対話用コンソールの Outbound ポート
//!
//! usecase はこの trait 経由でのみ標準入出力に触れる。

use common::error::Error;

/// 行単位の対話入出力
pub trait Console {
    /// 1 行（以上）を表示する
    fn print(&self, text: &str);

    /// プロンプトを表示して 1 行読む。末尾の改行は除く。入力終端（EOF）なら None
    fn read_line(&self, prompt: &str) -> Result<Option<String>, Error>;
}
