//! 検証に失敗したときに差し替える既定のテストプラン
//!
//! スレッドグループ 1 つ（100 スレッド・30 秒ランプアップ・300 秒・エラー時続行）、
//! 固定タイマー（1000ms）、HTTP サンプラー（GET https://example.com/）、
//! 結果コレクター 2 つ（View Results Tree / Summary Report）を含む。

const DEFAULT_PLAN: &str = include_str!("../../templates/default_plan.jmx");

/// 既定のテストプラン（JMeter 5.6.3 形式）
///
/// 構造検証を必ず通り、修復パスを適用しても変化しない。
pub fn default_document() -> &'static str {
    DEFAULT_PLAN.trim_end()
}
