//! Output formatting for the command-line client

pub mod console;
pub mod formatter;
