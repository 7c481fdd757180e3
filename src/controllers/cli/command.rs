#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Interactive,
    Tour,
    Quit,
}

pub const HELP_TEXT: &str = "\
help           provides the command list
interactive    initiates interactive mode
quit           quits the program
tour           explores a randomly chosen point of interest
";

impl Command {
    /// Matches a command line after trimming surrounding whitespace.
    /// Anything unrecognised is `None`.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "help" => Some(Self::Help),
            "interactive" => Some(Self::Interactive),
            "tour" => Some(Self::Tour),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}
