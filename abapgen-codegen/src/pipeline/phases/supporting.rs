//! Supporting-data phase - fills the run-wide property bag.

use eyre::Result;
use serde_json::Value;

use crate::pipeline::{CompilationContext, Phase};

const PHASE: &str = "supporting-data";

const APP_NAME: &str = "appName";
const INTF_NAME: &str = "intfName";
const API_VERSION: &str = "apiVersion";

/// Phase that derives the interface name and API version for the templates.
///
/// `app_name` from the config takes precedence over `appName` in the bag.
/// The formatted name is written back as `appName` and also as `intfName`;
/// `intfName` is empty when no application name is known. `apiVersion` is
/// only added when the descriptor does not carry one.
pub struct SupportingDataPhase;

impl Phase for SupportingDataPhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Format the interface name and fill the property bag"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let app_name = ctx
            .config
            .generator
            .app_name
            .clone()
            .or_else(|| ctx.descriptor.property_str(APP_NAME).map(str::to_string));

        let intf_name = match app_name {
            Some(app_name) => {
                let formatted = ctx.naming.format_global_name(&app_name);
                log::debug!("interface name '{}' formatted as '{}'", app_name, formatted);
                ctx.descriptor
                    .additional_properties
                    .insert(APP_NAME.to_string(), Value::String(formatted.clone()));
                formatted
            }
            None => String::new(),
        };

        let bag = &mut ctx.descriptor.additional_properties;
        bag.insert(INTF_NAME.to_string(), Value::String(intf_name));
        if !bag.contains_key(API_VERSION) {
            bag.insert(
                API_VERSION.to_string(),
                Value::String(ctx.config.generator.api_version.clone()),
            );
        }

        let summary = format!(
            "mangled {} model(s), {} operation(s) in {} api group(s); {} type code(s) assigned",
            ctx.descriptor.models.len(),
            ctx.descriptor.operation_count(),
            ctx.descriptor.apis.len(),
            ctx.naming.types().len()
        );
        ctx.add_info(PHASE, summary);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use abapgen_descriptor::{Config, Descriptor};

    use super::*;

    fn run(descriptor: &str, config: &str) -> CompilationContext {
        let descriptor: Descriptor = descriptor.parse().unwrap();
        let config: Config = config.parse().unwrap();
        let mut ctx = CompilationContext::new(descriptor, config);
        SupportingDataPhase.run(&mut ctx).unwrap();
        ctx
    }

    #[test]
    fn test_app_name_from_descriptor() {
        let ctx = run(
            r#"{ "additionalProperties": { "appName": "Swagger Petstore" } }"#,
            "",
        );

        assert_eq!(ctx.descriptor.property_str(APP_NAME), Some("swagger_petstore"));
        assert_eq!(ctx.descriptor.property_str(INTF_NAME), Some("swagger_petstore"));
        assert_eq!(ctx.descriptor.property_str(API_VERSION), Some("1.0.0"));
    }

    #[test]
    fn test_config_app_name_wins() {
        let ctx = run(
            r#"{ "additionalProperties": { "appName": "Swagger Petstore" } }"#,
            r#"
            [generator]
            app_name = "Cloud Storage/JSON API v1"
            api_version = "v1"
            "#,
        );

        assert_eq!(ctx.descriptor.property_str(APP_NAME), Some("cloud_storage_json_api_v1"));
        assert_eq!(ctx.descriptor.property_str(API_VERSION), Some("v1"));
    }

    #[test]
    fn test_missing_app_name() {
        let ctx = run("{}", "");

        assert_eq!(ctx.descriptor.property_str(APP_NAME), None);
        assert_eq!(ctx.descriptor.property_str(INTF_NAME), Some(""));
    }

    #[test]
    fn test_non_string_app_name_is_ignored() {
        let ctx = run(r#"{ "additionalProperties": { "appName": 42 } }"#, "");

        assert_eq!(
            ctx.descriptor.additional_properties.get(APP_NAME),
            Some(&Value::from(42))
        );
        assert_eq!(ctx.descriptor.property_str(INTF_NAME), Some(""));
    }

    #[test]
    fn test_existing_api_version_is_kept() {
        let ctx = run(r#"{ "additionalProperties": { "apiVersion": "2.1" } }"#, "");
        assert_eq!(ctx.descriptor.property_str(API_VERSION), Some("2.1"));
    }

    #[test]
    fn test_bag_keeps_insertion_order() {
        let ctx = run(
            r#"{ "additionalProperties": { "appName": "Petstore", "other": true } }"#,
            "",
        );
        let keys: Vec<_> = ctx.descriptor.additional_properties.keys().collect();
        assert_eq!(keys, [APP_NAME, "other", INTF_NAME, API_VERSION]);
    }

    #[test]
    fn test_summary_info() {
        let ctx = run("{}", "");
        assert_eq!(ctx.diagnostics.len(), 1);
        assert!(ctx.diagnostics[0].severity.is_info());
    }
}
