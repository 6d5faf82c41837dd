//! Mangle operation - runs the pipeline and serializes the result.

use std::path::PathBuf;

use abapgen_codegen::Pipeline;
use abapgen_descriptor::{Config, Descriptor};
use eyre::{Context, Result};

use super::describe;
use crate::reports::MangleReport;

/// Execute the mangle operation.
///
/// Runs the full pipeline and returns the mangled tree as pretty JSON together
/// with the pipeline warnings. Nothing is written here.
pub fn mangle(
    descriptor: Descriptor,
    config: Config,
    output: Option<PathBuf>,
) -> Result<MangleReport> {
    let ctx = Pipeline::new()
        .run(descriptor, config)
        .wrap_err("Mangling failed")?;

    let json = ctx
        .descriptor
        .to_json()
        .wrap_err("Failed to serialize mangled descriptor")?;

    Ok(MangleReport {
        output,
        json,
        warnings: ctx.warnings().map(describe).collect(),
        type_codes: ctx.naming.types().len(),
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_mangle_produces_json() {
        let descriptor = Descriptor::from_str(
            r#"{ "apis": [{ "classname": "PetApi", "operations": [
                { "operationId": "getPetById", "path": "/pet/{petId}",
                  "allParams": [{ "baseName": "petId", "isPathParam": true }] }
            ]}] }"#,
        )
        .unwrap();

        let report = mangle(descriptor, Config::default(), None).unwrap();

        assert!(report.json.contains("\"operationId\": \"get_pet_by_id\""));
        assert!(report.json.contains("\"path\": \"/pet/{ iv_p_pet_id }\""));
        assert!(report.warnings.is_empty());
        assert_eq!(report.type_codes, 0);
    }

    #[test]
    fn test_mangle_fails_on_malformed_path() {
        let descriptor = Descriptor::from_str(
            r#"{ "apis": [{ "classname": "PetApi", "operations": [
                { "operationId": "getPetById", "path": "/pet/{petId" }
            ]}] }"#,
        )
        .unwrap();

        let err = mangle(descriptor, Config::default(), None).unwrap_err();
        assert_eq!(err.to_string(), "Mangling failed");
    }
}
