//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// Information about a pipeline phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase in the mangling pipeline.
///
/// Phases run in a fixed order and share one [`CompilationContext`]. The
/// order matters: it decides which names reach the collision buckets and the
/// type interner first.
///
/// Built-in phases:
/// - `ValidatePhase` - lints the descriptor and bails on errors
/// - `MapTypesPhase` - maps schema types to ABAP types
/// - `ModelsPhase` - mangles models and their properties
/// - `OperationsPhase` - mangles API groups, operations, parameters and paths
/// - `SupportingDataPhase` - fills the run-wide property bag
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
