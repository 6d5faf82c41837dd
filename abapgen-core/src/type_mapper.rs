//! Type mapping between OpenAPI schema types and ABAP types.

/// Types the generator treats as built-in and never interns.
///
/// Contains both the OpenAPI spellings and the ABAP spellings so that a type
/// is recognised before and after mapping.
pub const LANGUAGE_PRIMITIVES: &[&str] = &[
    "array",
    "number",
    "REF TO DATA",
    "STRING",
    "integer",
    "int4",
    "int8",
    "XSTRING",
    "/goog/num_float",
    "abap_bool",
    "List",
    "OBJECT",
    "AnyType",
    "STANDARD TABLE OF",
];

/// Trait for mapping schema types to language-specific type strings.
///
/// Implement this trait for each target dialect to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a schema type name to a language type, if the table knows it
    fn map_type(&self, schema_type: &str) -> Option<&'static str>;

    /// Whether a type is a built-in of the target language
    fn is_primitive(&self, type_name: &str) -> bool;

    /// Map a schema type, falling back to the input for unknown types
    fn map_or_keep<'a>(&self, schema_type: &'a str) -> &'a str {
        self.map_type(schema_type).unwrap_or(schema_type)
    }
}

/// ABAP type mapper implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct AbapTypeMapper;

impl TypeMapper for AbapTypeMapper {
    fn language(&self) -> &'static str {
        "abap"
    }

    fn map_type(&self, schema_type: &str) -> Option<&'static str> {
        let mapped = match schema_type {
            "object" | "AnyType" => "REF TO DATA",
            "string" | "DateTime" | "Date" | "UUID" | "URI" => "STRING",
            "integer" => "int4",
            "long" => "int8",
            "number" => "/goog/num_float",
            "boolean" => "abap_bool",
            "array" | "List" => "STANDARD TABLE OF",
            "byte" => "XSTRING",
            _ => return None,
        };
        Some(mapped)
    }

    fn is_primitive(&self, type_name: &str) -> bool {
        LANGUAGE_PRIMITIVES.contains(&type_name)
    }
}
