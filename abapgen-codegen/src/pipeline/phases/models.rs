//! Models phase - mangles model schemas and their properties.

use abapgen_core::{AbapTypeMapper, TypeMapper};
use abapgen_descriptor::Model;
use eyre::Result;

use crate::{
    naming::Prefix,
    pipeline::{CompilationContext, Phase},
};

const PHASE: &str = "models";

/// Phase that rewrites every model in input order.
///
/// Runs before [`OperationsPhase`](super::OperationsPhase), so model types
/// receive the lowest type codes.
pub struct ModelsPhase;

impl Phase for ModelsPhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Mangle model names, property names and property types"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut models = std::mem::take(&mut ctx.descriptor.models);
        for model in &mut models {
            mangle_model(ctx, model);
        }
        ctx.descriptor.models = models;
        Ok(())
    }
}

fn mangle_model(ctx: &mut CompilationContext, model: &mut Model) {
    let mapper = AbapTypeMapper;
    let location = format!("models.{}", model.name);

    if model.is_inline() {
        model.class_var_name = model.name.clone();
        model.class_filename = model.name.clone();
    }

    for var in &mut model.vars {
        if !var.data_type.is_empty() && !mapper.is_primitive(&var.data_type) {
            var.data_type = ctx.naming.intern(&var.data_type, Prefix::Type);
        }

        let var_location = format!("{}.vars.{}", location, var.base_name);
        var.base_name = ctx.edit(PHASE, &var_location, &var.base_name, Prefix::None);

        if let Some(complex_type) = var.complex_type.take() {
            let complex_type = if mapper.is_primitive(&complex_type) {
                complex_type
            } else if complex_type == "string" {
                "STRING".to_string()
            } else {
                ctx.naming.intern(&complex_type, Prefix::Type)
            };
            var.complex_type = Some(complex_type);
        }

        var.description = Some(
            ctx.naming
                .extract_description(var.unescaped_description.as_deref()),
        );
    }

    let type_name = [&model.class_var_name, &model.classname, &model.name]
        .into_iter()
        .find(|candidate| !candidate.is_empty())
        .cloned()
        .unwrap_or_default();
    let type_code = ctx.naming.intern(&type_name, Prefix::Type);
    log::trace!("model '{}' has type code '{}'", model.name, type_code);
    model.type_code = Some(type_code);
}

#[cfg(test)]
mod tests {
    use abapgen_descriptor::{Config, Descriptor};

    use super::*;

    fn run(json: &str) -> CompilationContext {
        let descriptor: Descriptor = json.parse().unwrap();
        let mut ctx = CompilationContext::new(descriptor, Config::default());
        ModelsPhase.run(&mut ctx).unwrap();
        ctx
    }

    #[test]
    fn test_property_types_and_names() {
        let ctx = run(r#"{
            "models": [{ "name": "Pet", "classname": "Pet", "classVarName": "Pet", "vars": [
                { "baseName": "photoUrls", "dataType": "STANDARD TABLE OF", "complexType": "string" },
                { "baseName": "category", "dataType": "Category", "complexType": "Category" },
                { "baseName": "id", "dataType": "int8" }
            ]}]
        }"#);

        let model = &ctx.descriptor.models[0];
        assert_eq!(model.vars[0].base_name, "photo_urls");
        assert_eq!(model.vars[0].data_type, "STANDARD TABLE OF");
        assert_eq!(model.vars[0].complex_type.as_deref(), Some("STRING"));

        assert_eq!(model.vars[1].data_type, "ty_000");
        assert_eq!(model.vars[1].complex_type.as_deref(), Some("ty_000"));

        assert_eq!(model.vars[2].data_type, "int8");
        assert_eq!(model.vars[2].complex_type, None);

        assert_eq!(model.type_code.as_deref(), Some("ty_001"));
    }

    #[test]
    fn test_missing_complex_type_takes_no_code() {
        let ctx = run(r#"{
            "models": [{ "name": "Pet", "classname": "Pet", "vars": [
                { "baseName": "id", "dataType": "int8" },
                { "baseName": "name", "dataType": "STRING" },
                { "baseName": "category", "dataType": "Category", "complexType": "Category" }
            ]}]
        }"#);

        let model = &ctx.descriptor.models[0];
        assert_eq!(model.vars[2].complex_type.as_deref(), Some("ty_000"));
        assert_eq!(model.type_code.as_deref(), Some("ty_001"));
        assert_eq!(ctx.naming.types().len(), 2);
    }

    #[test]
    fn test_string_complex_type_compared_by_content() {
        let name = String::from("str") + "ing";
        let json = format!(
            r#"{{ "models": [{{ "name": "A", "classname": "A", "vars": [
                {{ "baseName": "x", "dataType": "STANDARD TABLE OF", "complexType": "{}" }}
            ]}}]}}"#,
            name
        );
        let ctx = run(&json);
        assert_eq!(
            ctx.descriptor.models[0].vars[0].complex_type.as_deref(),
            Some("STRING")
        );
        assert_eq!(ctx.naming.types().len(), 1);
    }

    #[test]
    fn test_inline_model_uses_its_name() {
        let ctx = run(r#"{
            "models": [{
                "name": "findPets_200_response",
                "classname": "FindPets200Response",
                "classVarName": "findPets200Response",
                "classFilename": "FindPets200Response"
            }]
        }"#);

        let model = &ctx.descriptor.models[0];
        assert!(model.is_inline());
        assert_eq!(model.class_var_name, "findPets_200_response");
        assert_eq!(model.class_filename, "findPets_200_response");
        assert_eq!(ctx.naming.types().get("findPets_200_response"), Some("ty_000"));
    }

    #[test]
    fn test_descriptions() {
        let ctx = run(r#"{
            "models": [{ "name": "Pet", "classname": "Pet", "vars": [
                { "baseName": "status", "dataType": "STRING", "unescapedDescription": "pet status in the store. One of available, pending or sold. Defaults to available." },
                { "baseName": "name", "dataType": "STRING" }
            ]}]
        }"#);

        let vars = &ctx.descriptor.models[0].vars;
        assert_eq!(
            vars[0].description.as_deref(),
            Some("\"pet status in the store.One of available, pending or sold.")
        );
        assert_eq!(vars[1].description.as_deref(), Some(""));
    }

    #[test]
    fn test_type_code_falls_back_to_classname() {
        let ctx = run(r#"{ "models": [{ "name": "Tag", "classname": "Tag" }] }"#);
        assert_eq!(ctx.naming.types().get("Tag"), Some("ty_000"));
        assert_eq!(ctx.descriptor.models[0].type_code.as_deref(), Some("ty_000"));
    }

    #[test]
    fn test_reserved_property_name_is_reported() {
        let ctx = run(r#"{
            "models": [{ "name": "Pet", "classname": "Pet", "vars": [
                { "baseName": "type", "dataType": "STRING" }
            ]}]
        }"#);

        assert_eq!(ctx.descriptor.models[0].vars[0].base_name, "_type");
        assert_eq!(
            ctx.diagnostics[0].location.as_deref(),
            Some("models.Pet.vars.type")
        );
    }
}
