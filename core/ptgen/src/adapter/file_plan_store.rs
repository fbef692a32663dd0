//! 出力ディレクトリへ .jmx を書き出す PlanStore 実装
//!
//! ファイル名は `<label>_<YYYYmmdd_HHMMSS>.jmx`。同名が既にあれば `_2`, `_3`, … を付ける。

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, TimeZone};
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, Log, LogLevel, LogRecord};

use crate::domain::PlanLabel;
use crate::ports::outbound::PlanStore;

/// 出力ディレクトリの既定値（カレントディレクトリからの相対）
pub const DEFAULT_OUTPUT_DIR: &str = "jmeter-tests/test-plans";

pub struct FilePlanStore {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
    output_dir: PathBuf,
}

impl FilePlanStore {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            clock,
            log,
            output_dir: output_dir.into(),
        }
    }

    fn timestamp(&self) -> Result<String, Error> {
        let ms = self.clock.now_ms() as i64;
        let dt = Local
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| Error::system(format!("invalid clock value: {}", ms)))?;
        Ok(dt.format("%Y%m%d_%H%M%S").to_string())
    }

    /// `<stem>.jmx`, `<stem>_2.jmx`, … の順に新規作成を試み、作れたパスを返す
    ///
    /// 存在確認と作成を 1 回の create_new で行うので、同時に保存しても上書きしない。
    fn write_unique(&self, stem: &str, content: &str) -> Result<PathBuf, Error> {
        let mut n = 1usize;
        loop {
            let name = if n == 1 {
                format!("{}.jmx", stem)
            } else {
                format!("{}_{}.jmx", stem, n)
            };
            let path = self.output_dir.join(name);
            if self.fs.write_new(&path, content)? {
                return Ok(path);
            }
            n += 1;
        }
    }
}

impl PlanStore for FilePlanStore {
    fn save(&self, content: &str, label: &PlanLabel) -> Result<PathBuf, Error> {
        self.fs.create_dir_all(&self.output_dir)?;
        let stem = format!("{}_{}", label, self.timestamp()?);
        let path = self.write_unique(&stem, content)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "test plan saved")
                .layer("adapter")
                .kind("persist")
                .field("path", path.display().to_string())
                .field("bytes", content.len()),
        );
        Ok(path)
    }
}
