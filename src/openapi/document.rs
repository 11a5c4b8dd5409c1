//! Typed document tree for OpenAPI 3.0.x / 3.1.x
//!
//! Only the parts the scoring engine inspects are modeled; everything else is
//! ignored during deserialization. Schemas are deliberately shallow: one
//! level of description / example / properties, with property values kept as
//! raw JSON so no recursion is needed.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// A security requirement: scheme name -> required scopes
pub type SecurityRequirement = BTreeMap<String, Vec<String>>;

/// The parsed specification tree. Read-only input, never mutated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OpenApiDocument {
    pub openapi: String,
    pub info: Info,
    pub servers: Vec<Server>,
    pub tags: Vec<Tag>,
    #[serde(rename = "externalDocs")]
    pub external_docs: Option<ExternalDocs>,
    pub paths: BTreeMap<String, PathItem>,
    pub components: Components,
    pub security: Vec<SecurityRequirement>,
}

impl OpenApiDocument {
    /// Iterate every operation in the document, with its path and method.
    ///
    /// BTreeMap path order plus fixed method-slot order makes this iteration
    /// deterministic, which keeps signal counts and scores replayable.
    pub fn operations(&self) -> impl Iterator<Item = (&str, Method, &Operation)> {
        self.paths.iter().flat_map(|(path, item)| {
            item.operations()
                .map(move |(method, op)| (path.as_str(), method, op))
        })
    }
}

/// API-level metadata
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Info {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    pub contact: Option<Value>,
    pub license: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Server {
    pub url: String,
    pub description: Option<String>,
}

impl Server {
    /// An agent can reach this server safely if the URL is HTTPS, templated
    /// (`{host}`), or relative (no scheme at all). Plain `http://` fails.
    pub fn is_secure_url(&self) -> bool {
        self.url.starts_with("https://") || self.url.contains('{') || !self.url.contains("://")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExternalDocs {
    pub url: String,
    pub description: Option<String>,
}

/// The eight HTTP method slots of a path item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::Get,
        Method::Put,
        Method::Post,
        Method::Delete,
        Method::Options,
        Method::Head,
        Method::Patch,
        Method::Trace,
    ];

    /// Idempotent by HTTP-method convention
    pub fn is_idempotent(&self) -> bool {
        matches!(
            self,
            Method::Get | Method::Put | Method::Delete | Method::Head | Method::Options
        )
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Method::Get => "get",
            Method::Put => "put",
            Method::Post => "post",
            Method::Delete => "delete",
            Method::Options => "options",
            Method::Head => "head",
            Method::Patch => "patch",
            Method::Trace => "trace",
        };
        f.write_str(s)
    }
}

/// One path entry with its method slots and shared parameters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathItem {
    pub parameters: Vec<Parameter>,
    pub get: Option<Operation>,
    pub put: Option<Operation>,
    pub post: Option<Operation>,
    pub delete: Option<Operation>,
    pub options: Option<Operation>,
    pub head: Option<Operation>,
    pub patch: Option<Operation>,
    pub trace: Option<Operation>,
}

impl PathItem {
    pub fn operation(&self, method: Method) -> Option<&Operation> {
        match method {
            Method::Get => self.get.as_ref(),
            Method::Put => self.put.as_ref(),
            Method::Post => self.post.as_ref(),
            Method::Delete => self.delete.as_ref(),
            Method::Options => self.options.as_ref(),
            Method::Head => self.head.as_ref(),
            Method::Patch => self.patch.as_ref(),
            Method::Trace => self.trace.as_ref(),
        }
    }

    /// Present operations in fixed method-slot order
    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
        Method::ALL
            .iter()
            .filter_map(move |m| self.operation(*m).map(|op| (*m, op)))
    }
}

/// One HTTP-method handler on one path
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Operation {
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub parameters: Vec<Parameter>,
    #[serde(rename = "requestBody")]
    pub request_body: Option<RequestBody>,
    pub responses: BTreeMap<StatusCode, Response>,
    pub security: Option<Vec<SecurityRequirement>>,
    /// Everything else, including vendor extensions (`x-*`)
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl Operation {
    /// Explicit idempotency flag (`x-idempotent: true`)
    pub fn idempotency_extension(&self) -> bool {
        matches!(
            self.extensions.get("x-idempotent"),
            Some(Value::Bool(true))
        )
    }

    /// Responses whose status code is >= 400 (including 4XX/5XX ranges)
    pub fn error_responses(&self) -> impl Iterator<Item = (&StatusCode, &Response)> {
        self.responses.iter().filter(|(code, _)| code.is_error())
    }

    pub fn has_error_response(&self) -> bool {
        self.error_responses().next().is_some()
    }
}

/// A response status key, kept as text so range keys like `4XX` survive.
///
/// Accepts both quoted (`'200'`) and bare (`200`) YAML keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(pub String);

impl StatusCode {
    pub fn as_u16(&self) -> Option<u16> {
        self.0.parse().ok()
    }

    /// True for concrete codes >= 400 and for the 4XX / 5XX range keys
    pub fn is_error(&self) -> bool {
        if let Some(code) = self.as_u16() {
            return code >= 400;
        }
        let upper = self.0.to_ascii_uppercase();
        upper == "4XX" || upper == "5XX"
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StatusVisitor;

        impl serde::de::Visitor<'_> for StatusVisitor {
            type Value = StatusCode;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a status code as a string or integer")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<StatusCode, E> {
                Ok(StatusCode(v.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<StatusCode, E> {
                Ok(StatusCode(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<StatusCode, E> {
                Ok(StatusCode(v.to_string()))
            }
        }

        deserializer.deserialize_any(StatusVisitor)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub description: Option<String>,
    pub required: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestBody {
    pub description: Option<String>,
    pub content: BTreeMap<String, MediaType>,
    pub required: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Response {
    pub description: Option<String>,
    pub content: BTreeMap<String, MediaType>,
}

impl Response {
    /// Any content media type carrying a schema
    pub fn first_schema(&self) -> Option<&SchemaObject> {
        self.content.values().find_map(|m| m.schema.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MediaType {
    pub schema: Option<SchemaObject>,
    pub example: Option<Value>,
    pub examples: BTreeMap<String, Value>,
}

impl MediaType {
    pub fn has_example(&self) -> bool {
        self.example.is_some() || !self.examples.is_empty()
    }
}

/// A deliberately shallow schema view: enough for description, example, and
/// property-name checks, with one level of local `$ref` indirection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SchemaObject {
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    pub description: Option<String>,
    pub example: Option<Value>,
    pub properties: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Components {
    pub schemas: BTreeMap<String, SchemaObject>,
    #[serde(rename = "securitySchemes")]
    pub security_schemes: BTreeMap<String, SecurityScheme>,
}

impl Components {
    /// Follow one level of `#/components/schemas/...` indirection.
    ///
    /// Anything else (remote refs, nested refs) comes back unchanged; broken
    /// references are an upstream validator's concern, not ours.
    pub fn resolve<'a>(&'a self, schema: &'a SchemaObject) -> &'a SchemaObject {
        const PREFIX: &str = "#/components/schemas/";
        if let Some(reference) = &schema.reference {
            if let Some(name) = reference.strip_prefix(PREFIX) {
                if let Some(target) = self.schemas.get(name) {
                    return target;
                }
            }
        }
        schema
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub kind: String,
    pub scheme: Option<String>,
    pub description: Option<String>,
}

impl SecurityScheme {
    /// OAuth2, apiKey, or HTTP bearer — the kinds agents know how to drive
    pub fn is_agent_friendly(&self) -> bool {
        match self.kind.as_str() {
            "oauth2" | "apiKey" => true,
            "http" => self.scheme.as_deref() == Some("bearer"),
            _ => false,
        }
    }
}
