//! ユーザー向け診断出力の Outbound ポート
//!
//! 非互換要素の削除などを「警告」として知らせる。エラーにはしない。

/// 診断メッセージの出力先
pub trait Diagnostics: Send + Sync {
    /// 警告（常に表示）
    fn warn(&self, message: &str);

    /// 補足情報（-v 指定時のみ表示する実装を想定）
    fn info(&self, message: &str);
}
