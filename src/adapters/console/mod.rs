//! Console output adapters

mod reporter;

pub use reporter::{ConsoleReporter, Tone};
