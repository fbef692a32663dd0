//! JMeter テストプラン（.jmx）の後処理パイプライン
//!
//! LLM の生テキスト → 抽出 → フィールド削除 → 要素削除 → 構造検証 → （失敗時）既定プラン。
//! 文書は常に生テキストのまま扱い、パース済みの木は作らない。

pub mod fallback;
pub mod repairer;
pub mod sanitizer;
pub mod validator;

pub use fallback::default_document;
pub use repairer::{remove_incompatible_elements, remove_problematic_fields};
#[cfg(test)]
pub use sanitizer::extract;
pub use sanitizer::ExtractMethod;
pub use validator::is_valid;

/// パイプラインの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    /// 最終的な文書（検証を通ったもの、または既定プラン）
    pub document: String,
    pub method: ExtractMethod,
    /// 要素単位のパスで削除された要素名
    pub removed_elements: Vec<&'static str>,
    /// 検証に失敗して既定プランに差し替えたか
    pub used_fallback: bool,
    /// 差し替え前の文書に欠けていた必須マーカー
    pub missing_markers: Vec<&'static str>,
}

/// LLM の生テキストから使えるテストプランを組み立てる
///
/// 検証レベルの問題では失敗せず、必ず何らかの文書を返す。
pub fn build_document(raw: &str) -> PipelineOutcome {
    let extracted = sanitizer::extract_detailed(raw);
    let fixed = remove_problematic_fields(&extracted.document);
    let repaired = remove_incompatible_elements(&fixed);

    let used_fallback = !is_valid(&repaired.document);
    let (document, missing_markers) = if used_fallback {
        (
            default_document().to_string(),
            validator::missing_markers(&repaired.document),
        )
    } else {
        (repaired.document, Vec::new())
    };

    PipelineOutcome {
        document,
        method: extracted.method,
        removed_elements: repaired.removed,
        used_fallback,
        missing_markers,
    }
}
