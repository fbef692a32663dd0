//! LLM の生テキストから XML 文書部分を取り出す
//!
//! パーサではなく正規表現による推定。ルート要素の入れ子は考慮しないため、
//! 文書外にタグ風の文字列があると取り過ぎ・取りこぼしが起こりうる。

use regex::Regex;
use std::sync::OnceLock;

/// 先頭に付与する XML 宣言
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// 抽出に失敗したときに付与する警告コメント
pub const EXTRACTION_WARNING: &str = "<!-- WARNING: Could not extract valid XML -->";

/// どの方法で文書を取り出したか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMethod {
    /// `<jmeterTestPlan ...>...</jmeterTestPlan>` が見つかった
    RootElement,
    /// 最初の開始タグから最後の終了タグまで
    AnyElement,
    /// 見つからず、生テキストに警告を付けて返した
    Failed,
}

impl ExtractMethod {
    /// ログ出力用の名前
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RootElement => "root_element",
            Self::AnyElement => "any_element",
            Self::Failed => "failed",
        }
    }
}

/// 抽出結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub document: String,
    pub method: ExtractMethod,
}

fn code_fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```xml|```jmx|```").expect("static pattern"))
}

fn root_element_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)(<\?xml.*?>\s*)?<jmeterTestPlan.*?</jmeterTestPlan>")
            .expect("static pattern")
    })
}

fn any_element_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]+>.*</[^>]+>").expect("static pattern"))
}

fn with_declaration(xml: &str) -> String {
    if xml.starts_with("<?xml") {
        xml.to_string()
    } else {
        format!("{}\n{}", XML_DECLARATION, xml)
    }
}

/// 生テキストから文書を取り出し、方法も返す
pub fn extract_detailed(raw: &str) -> Extracted {
    let content = code_fence_re().replace_all(raw, "");

    if let Some(m) = root_element_re().find(&content) {
        return Extracted {
            document: with_declaration(m.as_str()),
            method: ExtractMethod::RootElement,
        };
    }

    if let Some(m) = any_element_re().find(&content) {
        return Extracted {
            document: with_declaration(m.as_str()),
            method: ExtractMethod::AnyElement,
        };
    }

    Extracted {
        document: format!("{}\n{}\n{}", XML_DECLARATION, EXTRACTION_WARNING, content),
        method: ExtractMethod::Failed,
    }
}

/// 生テキストから文書部分を取り出す
#[cfg(test)]
pub fn extract(raw: &str) -> String {
    extract_detailed(raw).document
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"<jmeterTestPlan version="1.2" properties="5.0" jmeter="5.6.3">
  <hashTree>
    <ThreadGroup testname="Users"/>
  </hashTree>
</jmeterTestPlan>"#;

    #[test]
    fn test_clean_document_is_unchanged() {
        let doc = format!("{}\n{}", XML_DECLARATION, PLAN);
        let out = extract_detailed(&doc);
        assert_eq!(out.document, doc);
        assert_eq!(out.method, ExtractMethod::RootElement);
    }

    #[test]
    fn test_strips_code_fences_and_prose() {
        let raw = format!(
            "Here is your test plan:\n```xml\n{}\n```\nLet me know if you need changes.",
            PLAN
        );
        let out = extract(&raw);
        assert_eq!(out, format!("{}\n{}", XML_DECLARATION, PLAN));
    }

    #[test]
    fn test_strips_jmx_fence() {
        let raw = format!("```jmx\n{}\n```", PLAN);
        assert_eq!(extract(&raw), format!("{}\n{}", XML_DECLARATION, PLAN));
    }

    #[test]
    fn test_keeps_existing_declaration_with_whitespace() {
        let decl = r#"<?xml version="1.0" encoding="ISO-8859-1"?>"#;
        let raw = format!("prose\n{}\n\n{}\ntrailing", decl, PLAN);
        let out = extract(&raw);
        assert_eq!(out, format!("{}\n\n{}", decl, PLAN));
        assert!(!out.contains(r#"encoding="UTF-8""#));
    }

    #[test]
    fn test_root_match_stops_at_first_closing_root() {
        let raw = format!("{}\n{}", PLAN, PLAN);
        let out = extract(&raw);
        assert_eq!(out.matches("</jmeterTestPlan>").count(), 1);
    }

    #[test]
    fn test_falls_back_to_any_element_greedily() {
        let raw = "noise <TestPlan>a</TestPlan> middle <other>b</other> tail";
        let out = extract_detailed(raw);
        assert_eq!(out.method, ExtractMethod::AnyElement);
        assert_eq!(
            out.document,
            format!("{}\n<TestPlan>a</TestPlan> middle <other>b</other>", XML_DECLARATION)
        );
    }

    #[test]
    fn test_no_tags_wraps_with_warning() {
        let raw = "Sorry, I cannot help with that.";
        let out = extract_detailed(raw);
        assert_eq!(out.method, ExtractMethod::Failed);
        assert_eq!(
            out.document,
            format!("{}\n{}\n{}", XML_DECLARATION, EXTRACTION_WARNING, raw)
        );
    }

    #[test]
    fn test_unclosed_tag_is_not_extracted() {
        let out = extract_detailed("<jmeterTestPlan only opening");
        assert_eq!(out.method, ExtractMethod::Failed);
    }

    #[test]
    fn test_fence_is_removed_even_when_extraction_fails() {
        let out = extract("```\nno xml here\n```");
        assert!(!out.contains("```"));
        assert!(out.contains("no xml here"));
    }
}
