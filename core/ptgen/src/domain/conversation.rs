//! 会話状態（追記のみの発言ログ）
//!
//! 1 つのアシスタントセッションが専有し、削除・要約・並べ替えはしない。

use super::exchange::{Exchange, Role};

/// 時系列順の発言ログ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    exchanges: Vec<Exchange>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// ユーザー入力とモデル応答をこの順で追記する
    pub fn record(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.exchanges.push(Exchange::user(user));
        self.exchanges.push(Exchange::assistant(assistant));
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// 直近のモデル応答
    #[cfg(test)]
    pub fn last_assistant(&self) -> Option<&str> {
        self.exchanges
            .iter()
            .rev()
            .find(|e| e.role() == Role::Assistant)
            .map(|e| e.content())
    }

    /// プロンプト用に `User: ...` / `Assistant: ...` の行へ直列化する
    pub fn transcript(&self) -> String {
        self.exchanges
            .iter()
            .map(|e| format!("{}: {}", e.role().label(), e.content()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
