//! Document model extractor
//!
//! One walk over the parsed document producing the aggregate counts every
//! analyzer uses to normalize percentages. Total by construction: a document
//! with no paths or no components yields all-zero stats, and downstream
//! analyzers treat zero as "no data", never as an error.

use crate::models::DocumentStats;
use crate::openapi::OpenApiDocument;

/// Extract aggregate statistics from a parsed document
pub fn extract_stats(document: &OpenApiDocument) -> DocumentStats {
    let mut stats = DocumentStats {
        schema_count: document.components.schemas.len(),
        security_scheme_count: document.components.security_schemes.len(),
        tag_count: document.tags.len(),
        ..DocumentStats::default()
    };

    for item in document.paths.values() {
        // Path-level parameters are shared by every method slot but counted
        // once per path item.
        stats.parameter_count += item.parameters.len();
        for (_, operation) in item.operations() {
            stats.operation_count += 1;
            stats.parameter_count += operation.parameters.len();
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::parse_document;

    #[test]
    fn test_empty_document_yields_zero_stats() {
        let doc = OpenApiDocument::default();
        assert_eq!(extract_stats(&doc), DocumentStats::default());
    }

    #[test]
    fn test_counts_operations_and_parameters() {
        let doc = parse_document(
            r#"
openapi: 3.0.3
tags:
  - name: users
paths:
  /users:
    parameters:
      - name: tenant
        in: header
    get:
      parameters:
        - name: limit
          in: query
    post: {}
  /users/{id}:
    get:
      parameters:
        - name: id
          in: path
components:
  schemas:
    User: {}
    Error: {}
  securitySchemes:
    bearer:
      type: http
      scheme: bearer
"#,
        )
        .unwrap();

        let stats = extract_stats(&doc);
        assert_eq!(stats.operation_count, 3);
        assert_eq!(stats.parameter_count, 3);
        assert_eq!(stats.schema_count, 2);
        assert_eq!(stats.tag_count, 1);
        assert_eq!(stats.security_scheme_count, 1);
    }
}
