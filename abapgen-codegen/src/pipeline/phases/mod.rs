//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`ValidatePhase`] - lints the descriptor and collects diagnostics
//! - [`MapTypesPhase`] - maps schema types to ABAP types
//! - [`ModelsPhase`] - mangles models and their properties
//! - [`OperationsPhase`] - mangles API groups, operations and parameters
//! - [`SupportingDataPhase`] - fills the run-wide property bag

mod map_types;
mod models;
mod operations;
mod supporting;
mod validate;

pub use map_types::MapTypesPhase;
pub use models::ModelsPhase;
pub use operations::OperationsPhase;
pub use supporting::SupportingDataPhase;
pub use validate::{
    DuplicateOperationLint, Lint, LintInfo, ParameterPlacementLint, PathTemplateLint,
    ValidatePhase,
};
