//! Lenient OpenAPI 3.x document model
//!
//! The engine never parses specification text itself beyond deserializing it
//! into this tree: every field defaults, unknown fields are ignored, and
//! vendor extensions on operations are captured in a flattened map. A
//! document that cannot deserialize into this shape is the parse-failure
//! state, which is a scored outcome rather than an error.

mod document;

pub use document::{
    Components, ExternalDocs, Info, MediaType, Method, OpenApiDocument, Operation, Parameter,
    PathItem, RequestBody, Response, SchemaObject, SecurityScheme, Server, StatusCode, Tag,
};

use thiserror::Error;

/// Why a document could not be turned into an [`OpenApiDocument`]
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse OpenAPI document: {0}")]
    Syntax(#[from] serde_yaml::Error),
}

/// Parse raw specification text (YAML or JSON) into a document tree.
///
/// YAML is a superset of JSON, so a single parser covers both input formats.
pub fn parse_document(text: &str) -> Result<OpenApiDocument, ParseError> {
    Ok(serde_yaml::from_str(text)?)
}
