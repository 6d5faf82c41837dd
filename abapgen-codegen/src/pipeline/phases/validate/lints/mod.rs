//! Built-in lints for descriptor validation.

mod duplicate_operation;
mod parameter_placement;
mod path_template;

pub use duplicate_operation::DuplicateOperationLint;
pub use parameter_placement::ParameterPlacementLint;
pub use path_template::PathTemplateLint;
