//! 標準入出力による Console 実装

use std::io::{self, BufRead, Write};

use common::error::Error;

use crate::ports::outbound::Console;

pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn print(&self, text: &str) {
        println!("{}", text);
    }

    fn read_line(&self, prompt: &str) -> Result<Option<String>, Error> {
        print!("{}", prompt);
        let _ = io::stdout().flush();

        let mut line = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(e.to_string()))?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string()))
    }
}
