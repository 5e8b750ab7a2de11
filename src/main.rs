//! Interactive bowling scorekeeper (default binary).
//!
//! Reads commands line by line from stdin and prints replies to stdout.
//! Diagnostics go to stderr through `env_logger` (`RUST_LOG=debug` for detail).

use std::io;

use anyhow::Result;
use crossterm::tty::IsTty;

use tui_bowling::engine::{Session, ShellConfig, Transcript};
use tui_bowling::term::{Console, Shell};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ShellConfig::from_env();
    let color = config.color && io::stdout().is_tty();
    log::debug!("starting with {config:?}, color={color}");

    let mut session = Session::new();
    if let Some(path) = config.log_path.as_deref() {
        match Transcript::open(path) {
            Ok(transcript) => session = session.with_transcript(transcript),
            Err(e) => eprintln!("[Session] transcript disabled: {e:#}"),
        }
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), Console::stdout(color), session, config);
    shell.run()
}
