//! User-facing output
//!
//! Commands never print directly; they report through an
//! [`OutputWriter`](output::OutputWriter) so the same code drives the
//! terminal and the tests.

pub mod output;

pub use output::{BufferedWriter, MessageLevel, OutputWriter, StdoutWriter};
