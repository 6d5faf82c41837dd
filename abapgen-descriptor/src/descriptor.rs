//! Descriptor tree handed over by the schema parser.
//!
//! The tree mirrors what the upstream parser exports: API groups holding
//! operations and their parameters, and models holding their properties.
//! Every name, type and path field is rewritten in place by the mangling
//! pipeline; the tree is then serialized back for the rendering stage.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, error::SourceContext};

/// Side-channel key/value bag shared with every template.
pub type PropertyBag = IndexMap<String, serde_json::Value>;

/// Root of the descriptor tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    /// API groups (one generated class each)
    #[serde(default)]
    pub apis: Vec<ApiGroup>,

    /// Model schemas (one generated type each)
    #[serde(default)]
    pub models: Vec<Model>,

    /// Run-wide properties, e.g. `appName`
    #[serde(default)]
    pub additional_properties: PropertyBag,
}

/// A group of operations rendered into a single class.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGroup {
    pub classname: String,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// A single API operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: String,

    /// Name of the client stub
    #[serde(default)]
    pub base_name: String,

    /// URL path pattern with `{placeholder}` segments
    #[serde(default)]
    pub path: String,

    /// Whether the operation declares response media types
    #[serde(default)]
    pub has_produces: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,

    /// Container marker of the response, e.g. `array`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_container: Option<String>,

    /// Element type inside the response container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_base_type: Option<String>,

    #[serde(default)]
    pub all_params: Vec<Parameter>,
}

/// An operation parameter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Raw parameter name as written in the schema
    pub base_name: String,

    /// Plain variable name (filled in by the pipeline)
    #[serde(default)]
    pub param_name: String,

    #[serde(default)]
    pub data_type: String,

    #[serde(default)]
    pub is_query_param: bool,

    #[serde(default)]
    pub is_path_param: bool,

    #[serde(default)]
    pub is_body_param: bool,

    #[serde(default)]
    pub is_array: bool,
}

impl Parameter {
    /// Where the parameter is placed in the request.
    ///
    /// Flags are checked in the order query, path, body; the first set flag wins.
    pub fn placement(&self) -> Placement {
        if self.is_query_param {
            Placement::Query
        } else if self.is_path_param {
            Placement::Path
        } else if self.is_body_param {
            Placement::Body
        } else {
            Placement::Other
        }
    }

    /// Number of placement flags set. More than one is ambiguous.
    pub fn placement_count(&self) -> usize {
        [self.is_query_param, self.is_path_param, self.is_body_param]
            .into_iter()
            .filter(|flag| *flag)
            .count()
    }
}

/// Request placement of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Query,
    Path,
    Body,
    /// Header, cookie or form parameters; names are edited without a role prefix
    Other,
}

/// A model schema.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub name: String,

    #[serde(default)]
    pub classname: String,

    #[serde(default)]
    pub class_var_name: String,

    #[serde(default)]
    pub class_filename: String,

    /// Interned type code (filled in by the pipeline)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_code: Option<String>,

    #[serde(default)]
    pub vars: Vec<Property>,
}

impl Model {
    /// Inline schemas get a generated name that differs from their class name.
    pub fn is_inline(&self) -> bool {
        self.name != self.classname
    }
}

/// A model property.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub base_name: String,

    #[serde(default)]
    pub data_type: String,

    /// Referenced complex type, absent for plain primitives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unescaped_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FromStr for Descriptor {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "descriptor.json")
    }
}

impl Descriptor {
    /// Parse a descriptor JSON file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a descriptor from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let descriptor: Descriptor =
            serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?;
        log::debug!(
            "loaded descriptor '{}': {} api group(s), {} model(s)",
            filename,
            descriptor.apis.len(),
            descriptor.models.len()
        );
        Ok(descriptor)
    }

    /// Serialize the tree back to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Total number of operations across all API groups.
    pub fn operation_count(&self) -> usize {
        self.apis.iter().map(|api| api.operations.len()).sum()
    }

    /// Get a string-valued entry from the property bag.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.additional_properties.get(key).and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETSTORE: &str = r#"{
        "apis": [{
            "classname": "PetApi",
            "operations": [{
                "operationId": "getPetById",
                "baseName": "Pet",
                "path": "/pet/{petId}",
                "hasProduces": true,
                "returnType": "Pet",
                "allParams": [
                    { "baseName": "petId", "dataType": "int8", "isPathParam": true }
                ]
            }]
        }],
        "models": [{
            "name": "Pet",
            "classname": "Pet",
            "classVarName": "pet",
            "vars": [
                { "baseName": "photoUrls", "dataType": "STANDARD TABLE OF", "complexType": "string" }
            ]
        }],
        "additionalProperties": { "appName": "Swagger Petstore" }
    }"#;

    #[test]
    fn test_parse_descriptor() {
        let descriptor = Descriptor::from_str(PETSTORE).unwrap();

        assert_eq!(descriptor.apis.len(), 1);
        assert_eq!(descriptor.operation_count(), 1);
        let op = &descriptor.apis[0].operations[0];
        assert_eq!(op.operation_id, "getPetById");
        assert!(op.has_produces);
        assert_eq!(op.all_params[0].placement(), Placement::Path);
        assert!(!op.all_params[0].is_array);

        let model = &descriptor.models[0];
        assert!(!model.is_inline());
        assert_eq!(model.vars[0].complex_type.as_deref(), Some("string"));
        assert_eq!(descriptor.property_str("appName"), Some("Swagger Petstore"));
    }

    #[test]
    fn test_placement_priority() {
        let param = Parameter {
            base_name: "id".into(),
            is_query_param: true,
            is_path_param: true,
            ..Default::default()
        };
        assert_eq!(param.placement(), Placement::Query);
        assert_eq!(param.placement_count(), 2);

        let header = Parameter {
            base_name: "X-Request-Id".into(),
            ..Default::default()
        };
        assert_eq!(header.placement(), Placement::Other);
        assert_eq!(header.placement_count(), 0);
    }

    #[test]
    fn test_property_bag_keeps_order() {
        let descriptor = Descriptor::from_str(
            r#"{ "additionalProperties": { "zeta": 1, "alpha": "a", "mid": true } }"#,
        )
        .unwrap();
        let keys: Vec<_> = descriptor.additional_properties.keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(descriptor.property_str("zeta"), None);
    }

    #[test]
    fn test_invalid_json() {
        let err = Descriptor::from_str(r#"{ "apis": [ { "operations": [] } ] }"#).unwrap_err();
        assert!(matches!(*err, Error::Json { .. }));
    }

    #[test]
    fn test_round_trip_skips_unset_options() {
        let descriptor = Descriptor::from_str(PETSTORE).unwrap();
        let json = descriptor.to_json().unwrap();
        assert!(!json.contains("typeCode"));
        assert!(!json.contains("returnContainer"));
        assert!(json.contains("\"operationId\": \"getPetById\""));
    }
}
