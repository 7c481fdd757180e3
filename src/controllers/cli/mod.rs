pub mod command;
pub mod explorer;
pub mod repl;
