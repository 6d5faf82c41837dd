//! Compilation context passed through pipeline phases.

use abapgen_descriptor::{Config, Descriptor};

use super::diagnostic::{Diagnostic, Severity};
use crate::naming::NamingContext;

/// Context passed through all pipeline phases.
///
/// Owns the descriptor being mangled in place and the single
/// [`NamingContext`] of the run, so every phase shares one set of collision
/// buckets and type codes.
#[derive(Debug)]
pub struct CompilationContext {
    /// The descriptor tree, rewritten in place.
    pub descriptor: Descriptor,
    /// Configuration the run was started with.
    pub config: Config,
    /// Run-scoped naming state.
    pub naming: NamingContext,
    /// Diagnostics collected during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new context with naming state built from the config.
    pub fn new(descriptor: Descriptor, config: Config) -> Self {
        let naming = NamingContext::from_config(&config.naming);
        Self {
            descriptor,
            config,
            naming,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Edit an identifier, recording an info diagnostic when it had to be
    /// truncated or escaped.
    pub fn edit(
        &mut self,
        phase: &str,
        location: &str,
        name: &str,
        prefix: impl AsRef<str>,
    ) -> String {
        let edited = self.naming.edit_with_outcome(name, prefix);

        if edited.truncated {
            self.add_diagnostic(
                Diagnostic::info(
                    phase,
                    format!("'{}' shortened to '{}'", name, edited.value),
                )
                .at(location),
            );
        }
        if edited.escaped {
            self.add_diagnostic(
                Diagnostic::info(
                    phase,
                    format!("'{}' escaped to '{}'", name, edited.value),
                )
                .at(location),
            );
        }

        edited.value
    }
}
