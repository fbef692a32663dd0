//! テスト用のポート実装

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

use common::error::Error;
use common::ports::outbound::Clock;

use crate::domain::PlanLabel;
use crate::ports::outbound::{Console, Diagnostics, PlanStore};

/// 入力行を順に返し、表示内容を記録する Console
#[derive(Default)]
pub struct ScriptedConsole {
    inputs: RefCell<VecDeque<String>>,
    output: RefCell<Vec<String>>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: RefCell::new(inputs.iter().map(|s| s.to_string()).collect()),
            output: RefCell::new(Vec::new()),
        }
    }

    /// 表示とプロンプトを改行で連結したもの
    pub fn transcript(&self) -> String {
        self.output.borrow().join("\n")
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.borrow().len()
    }
}

impl Console for ScriptedConsole {
    fn print(&self, text: &str) {
        self.output.borrow_mut().push(text.to_string());
    }

    fn read_line(&self, prompt: &str) -> Result<Option<String>, Error> {
        self.output.borrow_mut().push(prompt.to_string());
        Ok(self.inputs.borrow_mut().pop_front())
    }
}

/// 警告・補足情報を記録する Diagnostics
#[derive(Default)]
pub struct RecordingDiagnostics {
    warnings: Mutex<Vec<String>>,
    infos: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }
}

/// 保存内容をメモリに残す PlanStore
#[derive(Default)]
pub struct MemoryPlanStore {
    saved: Mutex<Vec<(PlanLabel, String)>>,
    fail: bool,
}

impl MemoryPlanStore {
    pub fn failing() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn saved(&self) -> Vec<(PlanLabel, String)> {
        self.saved.lock().unwrap().clone()
    }
}

impl PlanStore for MemoryPlanStore {
    fn save(&self, content: &str, label: &PlanLabel) -> Result<PathBuf, Error> {
        if self.fail {
            return Err(Error::io_msg("disk full"));
        }
        let mut saved = self.saved.lock().unwrap();
        saved.push((label.clone(), content.to_string()));
        Ok(PathBuf::from(format!("mem/{}_{}.jmx", label, saved.len())))
    }
}

/// 固定時刻の Clock
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.0
    }
}
