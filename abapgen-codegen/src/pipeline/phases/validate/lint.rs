//! Lint trait for descriptor validation.

use abapgen_descriptor::Descriptor;

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks the descriptor for issues before anything is mangled.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the descriptor and add any diagnostics.
    fn check(&self, descriptor: &Descriptor, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
