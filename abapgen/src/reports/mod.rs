//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod mangle;
mod output;

pub use check::CheckReport;
pub use mangle::MangleReport;
pub use output::{Report, TerminalOutput};
