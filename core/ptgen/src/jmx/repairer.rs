//! 既知の非互換・非推奨な断片をタグ名で削除する
//!
//! どちらのパスも文書全体に対するテキスト一致で、要素の入れ子や所属は見ない。
//! 関係ない文脈に同名タグがあっても削除する。壊れた結果は後段の検証と既定プランで吸収する。

use regex::Regex;
use std::sync::OnceLock;

/// SampleSaveConfiguration で問題になるフィールド名
pub const PROBLEMATIC_FIELDS: [&str; 6] = [
    "sampleCounts",
    "errorCount",
    "assertions",
    "hostname",
    "threadCounts",
    "sampleCount",
];

/// JMeter 5.6.3 で使えない、または削除済みのコンポーネント名
pub const INCOMPATIBLE_ELEMENTS: [&str; 12] = [
    "ResponseTimeAssertion",
    "DebugSampler",
    "BSFSampler",
    "BSFPreProcessor",
    "BSFPostProcessor",
    "BSFAssertion",
    "BeanShellSampler",
    "AjpSampler",
    "GraphVisualizer",
    "ComparisonVisualizer",
    "MonitorHealthVisualizer",
    "DisableAction",
];

/// 要素削除パスの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRepair {
    pub document: String,
    /// 実際に削除が起きた要素名（INCOMPATIBLE_ELEMENTS の順）
    pub removed: Vec<&'static str>,
}

fn field_patterns() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        PROBLEMATIC_FIELDS
            .iter()
            .map(|name| {
                let name = regex::escape(name);
                Regex::new(&format!(r"(?s)<{}>.*?</{}>", name, name)).expect("static pattern")
            })
            .collect()
    })
}

fn element_patterns() -> &'static [(&'static str, Regex)] {
    static RES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RES.get_or_init(|| {
        INCOMPATIBLE_ELEMENTS
            .iter()
            .map(|&name| {
                let escaped = regex::escape(name);
                let re = Regex::new(&format!(r"(?s)<{}.*?</{}>", escaped, escaped))
                    .expect("static pattern");
                (name, re)
            })
            .collect()
    })
}

fn empty_hash_tree_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<hashTree>\s*</hashTree>").expect("static pattern"))
}

/// 問題フィールド `<name>...</name>` をすべて削除する（フィールド単位のパス）
pub fn remove_problematic_fields(doc: &str) -> String {
    field_patterns()
        .iter()
        .fold(doc.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
}

/// 非互換要素 `<name ...>...</name>` をすべて削除する（要素単位のパス）
///
/// 削除が起きるたびに、中身が空白だけになった `<hashTree>` の組も取り除く。
/// 名前が現れない場合は何も変えない。
pub fn remove_incompatible_elements(doc: &str) -> ElementRepair {
    let mut document = doc.to_string();
    let mut removed = Vec::new();
    for (name, re) in element_patterns() {
        if !re.is_match(&document) {
            continue;
        }
        document = re.replace_all(&document, "").into_owned();
        document = empty_hash_tree_re().replace_all(&document, "").into_owned();
        removed.push(*name);
    }
    ElementRepair { document, removed }
}
