mod adapter;
mod cli;
mod domain;
mod jmx;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::PtgenCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_ptgen, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = match cmd {
            PtgenCommand::Help => {
                print_help();
                Ok(0)
            }
            PtgenCommand::Interactive {
                profile,
                model,
                output_dir,
                requirement,
            } => self
                .app
                .session(profile.as_ref(), model.as_ref(), output_dir)
                .and_then(|session| session.run(requirement)),
        };

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn cmd_name_for_log(cmd: &PtgenCommand) -> &'static str {
    match cmd {
        PtgenCommand::Help => "help",
        PtgenCommand::Interactive { .. } => "interactive",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("ptgen: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_ptgen(config.verbose);
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: ptgen [options] [requirement...]");
}

fn print_help() {
    println!("Usage: ptgen [options] [requirement...]");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -p, --profile <profile>       Specify LLM profile (gemini, echo, or a name from profiles.json). Default: gemini");
    println!("  -m, --model <model>           Specify model name (e.g. gemini-2.0-flash). Default: profile default");
    println!("  -o, --output-dir <dir>        Directory for generated .jmx files. Default: jmeter-tests/test-plans");
    println!("  -v, --verbose                 Print extra diagnostics to stderr");
    println!("  --generate <shell>            Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Environment:");
    println!("  GEMINI_API_KEY    API key for the gemini provider (or the profile's api_key_env)");
    println!("  GOOGLE_API_KEY    Used when GEMINI_API_KEY is unset or empty");
    println!("  PTGEN_HOME        Home directory. Profiles: $PTGEN_HOME/config/profiles.json; logs: $PTGEN_HOME/logs/");
    println!("                    If unset, $XDG_CONFIG_HOME/ptgen (e.g. ~/.config/ptgen) is used.");
    println!("  PTGEN_OUTPUT_DIR  Directory for generated .jmx files (overridden by -o)");
    println!();
    println!("Description:");
    println!("  Describe what you want to test. The assistant suggests a test setup, lets you");
    println!("  refine it, and writes a JMeter 5.6.3 test plan (.jmx) when you accept it.");
    println!();
    println!("Examples:");
    println!("  ptgen");
    println!("  ptgen load test my REST API with 500 users");
    println!("  ptgen -p echo -o /tmp/plans");
}
