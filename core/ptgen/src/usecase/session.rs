//! 対話セッション（要件入力 → 提案 → メニュー → 生成・保存）
//!
//! 入出力はすべて Console ポート経由。テストプランを 1 つ作るたびに新しい PlanAssistant を作る。

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{MenuChoice, PlanLabel};
use crate::ports::outbound::{Console, Diagnostics, PlanStore, TextGenerator};
use crate::usecase::assistant::PlanAssistant;

const WELCOME: &str = "Welcome to the JMeter Test Plan Generator!

Describe what you want to test, and I'll help you create a JMeter test plan.

Examples:
- 'I want to test my mobile app API at https://api.example.com'
- 'Need to load test my web application with 500 concurrent users'
- 'I want to stress test my database with sudden spikes in traffic'
- 'Need to test my REST API with different HTTP methods'";

const MENU: &str = "
What would you like to do?
1. Accept this setup and generate JMX
2. Modify the setup
3. Start over with a new test
4. Exit";

const MODIFY_EXAMPLES: &str = "
What changes would you like to make?
Examples:
- 'Change the number of users to 200'
- 'Add a 2-second think time'
- 'Include authentication headers'
- 'Add response assertions'";

const GOODBYE: &str = "Goodbye!";

/// 1 つのテストプランについてメニューループが終わった理由
enum PlanEnd {
    /// 新しい要件から始め直す
    Again,
    /// セッション終了
    Quit,
}

pub struct PlanSession {
    generator: Arc<dyn TextGenerator>,
    diagnostics: Arc<dyn Diagnostics>,
    store: Arc<dyn PlanStore>,
    console: Arc<dyn Console>,
    log: Arc<dyn Log>,
}

impl PlanSession {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        diagnostics: Arc<dyn Diagnostics>,
        store: Arc<dyn PlanStore>,
        console: Arc<dyn Console>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            generator,
            diagnostics,
            store,
            console,
            log,
        }
    }

    /// セッションを実行する。正常終了なら 0
    ///
    /// `initial_requirement` があれば最初の要件入力を省略する。
    pub fn run(&self, initial_requirement: Option<String>) -> Result<i32, Error> {
        self.console.print(WELCOME);
        let mut pending = initial_requirement
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        loop {
            let requirement = match pending.take() {
                Some(r) => r,
                None => match self.ask_requirement()? {
                    Some(r) => r,
                    None => break,
                },
            };
            match self.plan(&requirement)? {
                PlanEnd::Again => continue,
                PlanEnd::Quit => break,
            }
        }
        self.console.print(GOODBYE);
        Ok(0)
    }

    /// 空でない要件が入力されるまで聞く。EOF なら None
    fn ask_requirement(&self) -> Result<Option<String>, Error> {
        loop {
            match self.console.read_line("\nWhat would you like to test? ")? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => return Ok(Some(line.trim().to_string())),
            }
        }
    }

    fn plan(&self, requirement: &str) -> Result<PlanEnd, Error> {
        let mut assistant = PlanAssistant::new(
            Arc::clone(&self.generator),
            Arc::clone(&self.diagnostics),
            Arc::clone(&self.log),
        );
        let mut setup = assistant.suggest(requirement)?;
        self.console.print("\nHere's my suggested test setup:");
        self.console.print(&setup);

        loop {
            self.console.print(MENU);
            let Some(line) = self.console.read_line("\nEnter your choice (1-4): ")? else {
                return Ok(PlanEnd::Quit);
            };
            match MenuChoice::parse(&line) {
                Some(MenuChoice::Accept) => return self.accept(&assistant, &setup),
                Some(MenuChoice::Modify) => {
                    self.console.print(MODIFY_EXAMPLES);
                    let Some(feedback) = self.console.read_line("\nYour changes: ")? else {
                        return Ok(PlanEnd::Quit);
                    };
                    let feedback = feedback.trim();
                    if feedback.is_empty() {
                        self.console.print("No changes entered.");
                        continue;
                    }
                    setup = assistant.refine(feedback)?;
                    self.console.print("\nUpdated test setup:");
                    self.console.print(&setup);
                }
                Some(MenuChoice::Restart) => return Ok(PlanEnd::Again),
                Some(MenuChoice::Exit) => return Ok(PlanEnd::Quit),
                None => self.console.print("Invalid choice. Please try again."),
            }
        }
    }

    fn accept(&self, assistant: &PlanAssistant, setup: &str) -> Result<PlanEnd, Error> {
        self.console.print("\nGenerating JMX file...");
        let document = assistant.finalize(setup)?;
        let label = PlanLabel::from_setup(setup);
        let path = self.store.save(&document, &label)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "plan accepted")
                .layer("usecase")
                .kind("session")
                .field("label", label.as_str())
                .field("exchanges", assistant.conversation().exchanges().len()),
        );
        self.console.print(&format!(
            "\nJMX file has been generated and saved to: {}",
            path.display()
        ));
        self.console
            .print("\nWould you like to create another test plan? (y/n)");
        let again = self
            .console
            .read_line("")?
            .map(|s| s.trim().eq_ignore_ascii_case("y"))
            .unwrap_or(false);
        Ok(if again { PlanEnd::Again } else { PlanEnd::Quit })
    }
}
