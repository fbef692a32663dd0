//! 提案表示後のメニュー選択

/// メニューの選択肢（1〜4）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. この設定でテストプランを生成する
    Accept,
    /// 2. 設定を修正する
    Modify,
    /// 3. 新しいテストでやり直す
    Restart,
    /// 4. 終了
    Exit,
}

impl MenuChoice {
    /// 入力行を解析する（前後の空白は無視、不明なら None）
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Accept),
            "2" => Some(Self::Modify),
            "3" => Some(Self::Restart),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}
