//! 診断メッセージを stderr に出し、同じ内容を JSONL ログにも残す

use std::sync::Arc;

use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::ports::outbound::Diagnostics;

pub struct StderrDiagnostics {
    log: Arc<dyn Log>,
    verbose: bool,
}

impl StderrDiagnostics {
    pub fn new(log: Arc<dyn Log>, verbose: bool) -> Self {
        Self { log, verbose }
    }
}

impl Diagnostics for StderrDiagnostics {
    fn warn(&self, message: &str) {
        eprintln!("Warning: {}", message);
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Warn, message)
                .layer("adapter")
                .kind("diagnostics"),
        );
    }

    fn info(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message);
        }
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, message)
                .layer("adapter")
                .kind("diagnostics"),
        );
    }
}
