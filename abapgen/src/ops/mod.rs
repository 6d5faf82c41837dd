//! Core operations.
//!
//! This module contains the business logic for abapgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod load;
pub mod mangle;

use abapgen_codegen::Diagnostic;
pub use check::check;
pub use load::load;
pub use mangle::mangle;

/// Message of a diagnostic with its location on a second line.
pub(crate) fn describe(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
