//! The interactive command loop.
//!
//! Generic over the input and output streams so it can be driven by stdin and
//! stdout in the binary and by byte buffers in tests.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::engine::{Reply, Session, ShellConfig, Step, PINS_PROMPT};
use crate::input::{parse_input, LineReader};
use crate::renderer::Console;

pub struct Shell<R, W: Write> {
    reader: LineReader<R>,
    console: Console<W>,
    session: Session,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, console: Console<W>, session: Session, config: ShellConfig) -> Self {
        Self {
            reader: LineReader::new(input),
            console,
            session,
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    /// Run until `quit` or end of input.
    ///
    /// Only I/O failures end the loop with an error; every user mistake is
    /// reported as a warning and the loop carries on.
    pub fn run(&mut self) -> Result<()> {
        self.console.reply(&Reply::Help)?;

        loop {
            self.console.prompt(&self.config.prompt)?;
            let input = match self.reader.read_line()? {
                Some(line) => parse_input(line),
                None => return self.close(),
            };

            match self.session.execute(&input) {
                Step::Reply(reply) => self.console.reply(&reply)?,
                Step::Quit(reply) => {
                    self.console.reply(&reply)?;
                    return Ok(());
                }
                Step::PromptPins => {
                    self.console.prompt(PINS_PROMPT)?;
                    let replies = match self.reader.read_line()? {
                        Some(line) => self.session.roll_line(line),
                        None => return self.close(),
                    };
                    for reply in &replies {
                        self.console.reply(reply)?;
                    }
                    if self.config.show_card {
                        self.console.reply(&self.session.card())?;
                    }
                }
            }
        }
    }

    /// End of input behaves like `quit`.
    fn close(&mut self) -> Result<()> {
        log::debug!("end of input, closing");
        self.console.line("", crate::fb::CellStyle::PLAIN)?;
        self.console.reply(&Reply::Closing)
    }
}
