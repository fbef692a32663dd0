//! 構造検証（必須マーカーの有無だけを見る）

/// 使えるテストプランとみなすために必要な文字列
///
/// 変更した場合は `fallback::default_document()` がすべて含むことを確認すること。
pub const REQUIRED_MARKERS: [&str; 5] = [
    "<jmeterTestPlan",
    "<hashTree>",
    "<ThreadGroup",
    "num_threads",
    "ramp_time",
];

/// 必須マーカーのうち文書に含まれないもの（ログ用）
pub fn missing_markers(doc: &str) -> Vec<&'static str> {
    REQUIRED_MARKERS
        .iter()
        .copied()
        .filter(|marker| !doc.contains(marker))
        .collect()
}

/// 必須マーカーをすべて含むなら true（大文字小文字を区別する部分文字列一致のみ）
pub fn is_valid(doc: &str) -> bool {
    REQUIRED_MARKERS.iter().all(|marker| doc.contains(marker))
}
