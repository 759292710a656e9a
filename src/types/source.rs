//! Source and target types for conversion requests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Where the content of a conversion request comes from.
///
/// Discriminated by `kind` on the wire. An unknown or missing `kind` fails at
/// the parse stage, before any cross-field rule is evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    /// Content supplied inline with the request, base64-encoded.
    File {
        /// Original filename, used by the engine to pick a format backend
        filename: String,
        /// Base64-encoded file content
        base64_string: String,
    },
    /// Content the engine must fetch from a remote URL.
    Http {
        url: String,
        /// Extra headers forwarded with the fetch (e.g. authorization)
        #[serde(default, skip_serializing_if = "HashMap::is_empty")]
        headers: HashMap<String, String>,
    },
    /// Content the engine must fetch from S3-compatible object storage.
    S3(S3Coordinates),
}

impl Source {
    /// The wire discriminator for this source.
    pub fn kind(&self) -> &'static str {
        match self {
            Source::File { .. } => "file",
            Source::Http { .. } => "http",
            Source::S3(_) => "s3",
        }
    }

    /// Check if this source requires object-storage access.
    pub fn is_s3(&self) -> bool {
        matches!(self, Source::S3(_))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// Where and how the conversion result should be delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    /// Result returned inline in the response body.
    #[serde(rename = "inbody")]
    InBody,
    /// Result returned as a packaged zip archive.
    Zip,
    /// Result written to object storage.
    S3(S3Coordinates),
}

impl Target {
    /// The wire discriminator for this target.
    pub fn kind(&self) -> &'static str {
        match self {
            Target::InBody => "inbody",
            Target::Zip => "zip",
            Target::S3(_) => "s3",
        }
    }

    /// Check if this target writes to object storage.
    pub fn is_s3(&self) -> bool {
        matches!(self, Target::S3(_))
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::InBody
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// Coordinates for an S3-compatible bucket, used by both sources and targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Coordinates {
    /// Endpoint host, e.g. "s3.eu-de.cloud-object-storage.appdomain.cloud"
    pub endpoint: String,

    /// Whether to verify TLS certificates when connecting
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,

    pub access_key: String,

    pub secret_key: String,

    pub bucket: String,

    /// Prefix prepended to every object key read or written
    #[serde(default)]
    pub key_prefix: String,
}

fn default_verify_ssl() -> bool {
    true
}

/// Inline file source for the chunking flow.
///
/// Chunking has no remote fetch path; content always arrives base64-encoded
/// in the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base64FileSource {
    /// Base64-encoded file content
    pub base64_string: String,

    /// Original filename
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_source_kind_discriminator() {
        let source: Source = serde_json::from_value(serde_json::json!({
            "kind": "http",
            "url": "https://example.com/report.pdf"
        }))
        .unwrap();
        assert_eq!(source.kind(), "http");
        assert!(!source.is_s3());
    }

    #[test]
    fn test_s3_source_defaults() {
        let source: Source = serde_json::from_value(serde_json::json!({
            "kind": "s3",
            "endpoint": "s3.example.com",
            "access_key": "ak",
            "secret_key": "sk",
            "bucket": "docs"
        }))
        .unwrap();
        match source {
            Source::S3(coords) => {
                assert!(coords.verify_ssl);
                assert_eq!(coords.key_prefix, "");
            }
            other => panic!("expected s3 source, got {other}"),
        }
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let result: Result<Source, _> = serde_json::from_value(serde_json::json!({
            "kind": "ftp",
            "url": "ftp://example.com/a.pdf"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_kind_is_parse_error() {
        let result: Result<Source, _> = serde_json::from_value(serde_json::json!({
            "url": "https://example.com/a.pdf"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_target_serializes_tag() {
        let value = serde_json::to_value(Target::Zip).unwrap();
        assert_eq!(value, serde_json::json!({"kind": "zip"}));

        let value = serde_json::to_value(Target::default()).unwrap();
        assert_eq!(value, serde_json::json!({"kind": "inbody"}));
    }
}
