//! `tasklist` binary entry point.
//!
//! # Responsibility
//! - Resolve config, start logging, and hand stdin/stdout to a session.

use std::io;
use std::process::ExitCode;
use tasklist_cli::config::{CliConfig, Mode, USAGE};
use tasklist_cli::menu::MenuSession;
use tasklist_cli::session::Session;
use tasklist_core::{core_version, init_logging, TodoService, TodoStore};

fn main() -> ExitCode {
    let mode = match Mode::from_args(std::env::args().skip(1)) {
        Ok(mode) => mode,
        Err(arg) => {
            eprintln!("unexpected argument `{arg}`\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    if mode == Mode::Version {
        println!("tasklist {}", core_version());
        return ExitCode::SUCCESS;
    }

    // Logging problems are reported but never block the session.
    match CliConfig::from_env() {
        Ok(config) => {
            if let Err(err) = init_logging(&config.log) {
                eprintln!("warning: logging disabled: {err}");
            }
        }
        Err(err) => eprintln!("warning: logging disabled: {err}"),
    }

    match run(mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(mode: Mode) -> io::Result<()> {
    let service = TodoService::new(TodoStore::new());
    let (input, output) = (io::stdin().lock(), io::stdout().lock());
    match mode {
        Mode::Menu => MenuSession::new(service).run(input, output),
        Mode::Commands | Mode::Version => Session::new(service).run(input, output),
    }
}
