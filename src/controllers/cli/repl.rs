use std::io::{self, BufRead, Write};

use tracing::{debug, error};

use crate::controllers::cli::command::{Command, HELP_TEXT};
use crate::controllers::interactive::errors::SessionError;

pub const PROMPT: &str = ">> ";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TourOutcome {
    Explored,
    NoPoints,
}

/// What the REPL's session commands do.
pub trait CommandHandler {
    fn interactive(&mut self) -> Result<(), SessionError>;

    fn tour(&mut self) -> Result<TourOutcome, SessionError>;
}

/// Line-oriented command loop.
pub struct Repl<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads commands until `quit` or end of input. Session failures are
    /// reported and the prompt is re-issued.
    pub fn run<H: CommandHandler>(&mut self, handler: &mut H) -> io::Result<()> {
        writeln!(self.output, "Input 'help' for command list")?;

        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                writeln!(self.output, "quitting")?;
                return Ok(());
            }

            let Some(command) = Command::parse(&line) else {
                debug!(input = line.trim(), "ignoring unknown command");
                continue;
            };

            match command {
                Command::Quit => {
                    writeln!(self.output, "quitting")?;
                    return Ok(());
                }
                Command::Help => writeln!(self.output, "{HELP_TEXT}")?,
                Command::Interactive => {
                    writeln!(self.output, "Engaging interactive mode")?;
                    let result = handler.interactive();
                    self.report(result)?;
                }
                Command::Tour => match handler.tour() {
                    Ok(TourOutcome::Explored) => {}
                    Ok(TourOutcome::NoPoints) => {
                        writeln!(self.output, "The loaded sample point list is empty")?
                    }
                    Err(err) => self.report(Err(err))?,
                },
            }
        }
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    fn report(&mut self, result: Result<(), SessionError>) -> io::Result<()> {
        if let Err(err) = result {
            error!(%err, "session failed");
            writeln!(self.output, "error: {err}")?;
        }

        Ok(())
    }
}
