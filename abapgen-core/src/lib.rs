//! Core utilities and types for the abapgen identifier engine.
//!
//! This crate provides the pure, stateless building blocks used across
//! the abapgen workspace: case conversion, numeric suffix codes and the
//! OpenAPI-to-ABAP primitive type table.

mod case;
mod code;
mod type_mapper;

// String utilities
pub use case::{camel_to_snake, sentence_to_snake, to_snake_identifier};
pub use code::{SUFFIX_WIDTH, suffix_code};
// Type table
pub use type_mapper::{AbapTypeMapper, LANGUAGE_PRIMITIVES, TypeMapper};
