//! Pipeline orchestrator.

use abapgen_descriptor::{Config, Descriptor};
use eyre::Result;

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{MapTypesPhase, ModelsPhase, OperationsPhase, SupportingDataPhase, ValidatePhase},
};

/// The mangling pipeline orchestrator.
///
/// Runs the built-in phases (validate, map-types, models, operations,
/// supporting-data) followed by any user phases, calling plugin hooks before
/// and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(MyPlugin);
/// let ctx = pipeline.run(descriptor, config)?;
/// println!("{}", ctx.descriptor.to_json()?);
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with only the built-in phases.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Name and description of every phase, in execution order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        builtin_phases()
            .iter()
            .chain(self.phases.iter())
            .map(|phase| phase.info())
            .collect()
    }

    /// Run the pipeline on a descriptor with a fresh naming context.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. Validation errors are
    /// fatal; use [`run_with`](Self::run_with) to keep the diagnostics.
    pub fn run(&self, descriptor: Descriptor, config: Config) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(descriptor, config);
        self.run_with(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on an existing context.
    ///
    /// Diagnostics recorded before a failure stay on the context.
    pub fn run_with(&self, ctx: &mut CompilationContext) -> Result<()> {
        for phase in builtin_phases().iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), ctx)?;
        }
        Ok(())
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        log::debug!("running phase '{}'", phase_name);

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in phases in execution order.
fn builtin_phases() -> Vec<Box<dyn Phase>> {
    vec![
        Box::new(ValidatePhase::new()),
        Box::new(MapTypesPhase),
        Box::new(ModelsPhase),
        Box::new(OperationsPhase),
        Box::new(SupportingDataPhase),
    ]
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct OrderPlugin {
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl Plugin for OrderPlugin {
        fn name(&self) -> &'static str {
            "order"
        }

        fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.seen.lock().unwrap().push(phase.to_string());
            Ok(())
        }
    }

    struct MarkerPhase;

    impl Phase for MarkerPhase {
        fn name(&self) -> &'static str {
            "marker"
        }

        fn description(&self) -> &'static str {
            "Adds a marker to the property bag"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            ctx.descriptor
                .additional_properties
                .insert("marker".into(), serde_json::Value::Bool(true));
            Ok(())
        }
    }

    #[test]
    fn test_pipeline_runs_on_empty_descriptor() {
        let ctx = Pipeline::new()
            .run(Descriptor::default(), Config::default())
            .expect("pipeline should succeed");

        assert!(!ctx.has_errors());
        assert_eq!(ctx.descriptor.property_str("apiVersion"), Some("1.0.0"));
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let plugin = CountingPlugin {
            before_count: before.clone(),
            after_count: after.clone(),
        };

        Pipeline::new()
            .plugin(plugin)
            .run(Descriptor::default(), Config::default())
            .expect("pipeline should succeed");

        // 5 built-in phases = 5 before + 5 after hooks
        assert_eq!(before.load(Ordering::SeqCst), 5);
        assert_eq!(after.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_phase_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        Pipeline::new()
            .phase(MarkerPhase)
            .plugin(OrderPlugin { seen: seen.clone() })
            .run(Descriptor::default(), Config::default())
            .expect("pipeline should succeed");

        assert_eq!(
            *seen.lock().unwrap(),
            [
                "validate",
                "map-types",
                "models",
                "operations",
                "supporting-data",
                "marker"
            ]
        );
    }

    #[test]
    fn test_user_phase_runs_last() {
        let ctx = Pipeline::new()
            .phase(MarkerPhase)
            .run(Descriptor::default(), Config::default())
            .expect("pipeline should succeed");
        assert_eq!(
            ctx.descriptor.additional_properties.get("marker"),
            Some(&serde_json::Value::Bool(true))
        );
    }

    #[test]
    fn test_phase_info() {
        let info = Pipeline::new().phase(MarkerPhase).phase_info();
        assert_eq!(info.len(), 6);
        assert_eq!(info[0].name, "validate");
        assert_eq!(info[5].description, "Adds a marker to the property bag");
    }
}
