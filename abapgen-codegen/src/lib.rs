//! Identifier mangling engine and post-processing pipeline for abapgen.
//!
//! This crate turns the free-form names of a parsed API descriptor into
//! identifiers that satisfy the ABAP naming rules: at most 30 characters,
//! no leading digit or `@`, no reserved words, and unique under truncation.
//!
//! # Module Organization
//!
//! - [`naming`] - The run-scoped [`NamingContext`] and its building blocks
//! - [`pipeline`] - Phases that walk a descriptor in canonical order

pub mod naming;
pub mod pipeline;

pub use naming::{NamingContext, NamingError, NamingLimits, Prefix};
pub use pipeline::{CompilationContext, Diagnostic, Pipeline, Severity};
