//! Post-processing pipeline that mangles a descriptor tree.
//!
//! This module provides a [`Pipeline`] orchestrator that walks the descriptor
//! in a fixed order and rewrites every name, type and path field through one
//! run-scoped [`NamingContext`](crate::naming::NamingContext). The pipeline
//! provides:
//!
//! - Explicit phase boundaries (validate → map-types → models → operations → supporting-data)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//!
//! # Example
//!
//! ```ignore
//! use abapgen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(descriptor, config)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! std::fs::write("mangled.json", ctx.descriptor.to_json()?)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
