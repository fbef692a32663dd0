//! 保存ファイル名に使うテスト種別ラベル
//!
//! 採用された提案の `TEST TYPE:` 行から導出する。ファイル名の一意性は保存側（タイムスタンプ）で担保する。

/// ラベルが導出できないときの既定値
pub const DEFAULT_LABEL: &str = "performance_test";

const MAX_LABEL_LEN: usize = 40;

/// ファイル名に使える形（`[a-z0-9_]`）に正規化済みのラベル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanLabel(String);

impl PlanLabel {
    /// 任意の文字列を正規化する。空になれば既定値
    pub fn sanitized(raw: &str) -> Self {
        let mut out = String::new();
        let mut pending_sep = false;
        for c in raw.chars().flat_map(char::to_lowercase) {
            if c.is_ascii_alphanumeric() {
                if pending_sep && !out.is_empty() {
                    out.push('_');
                }
                pending_sep = false;
                out.push(c);
            } else {
                pending_sep = true;
            }
        }
        out.truncate(MAX_LABEL_LEN);
        let trimmed = out.trim_end_matches('_');
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self(trimmed.to_string())
        }
    }

    /// 提案テキストの `TEST TYPE:` 行からラベルを作る
    ///
    /// 例: `TEST TYPE: Spike Test - sudden bursts` → `spike_test`
    pub fn from_setup(setup: &str) -> Self {
        let type_name = setup
            .lines()
            .map(str::trim)
            .find_map(|line| {
                let (head, rest) = line.split_once(':')?;
                head.trim().eq_ignore_ascii_case("TEST TYPE").then_some(rest)
            })
            .map(|rest| {
                let end = [" - ", ":", "(", ","]
                    .iter()
                    .filter_map(|sep| rest.find(sep))
                    .min()
                    .unwrap_or(rest.len());
                &rest[..end]
            })
            .unwrap_or("");
        Self::sanitized(type_name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PlanLabel {
    fn default() -> Self {
        Self(DEFAULT_LABEL.to_string())
    }
}

impl std::fmt::Display for PlanLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
