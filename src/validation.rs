//! Cross-field validation for conversion and chunking requests.
//!
//! Runs after serde parsing succeeded, so everything here deals with
//! well-formed but possibly inconsistent requests. The validators are pure:
//! the configured engine kind is passed in explicitly rather than read from
//! process-wide configuration.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use thiserror::Error;
use tracing::debug;

use crate::engine::EngineKind;
use crate::types::{ChunkingRequest, ConvertDocumentsRequest, Source};

/// A single violated validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("source kind \"s3\" requires engine kind \"KFP\"")]
    S3SourceRequiresKfpEngine,

    #[error("source kind \"s3\" requires target kind \"s3\"")]
    S3SourceRequiresS3Target,

    #[error("target kind \"s3\" requires source kind \"s3\"")]
    S3TargetRequiresS3Source,

    #[error("at least one source is required")]
    EmptySources,

    #[error("max_tokens must be at least 1")]
    MaxTokensOutOfRange,

    #[error("picture_description.images_scale must be at least 1")]
    ImagesScaleOutOfRange,

    #[error("ocr.dpi must be at least 1")]
    DpiOutOfRange,

    #[error("source \"{filename}\" is not valid base64")]
    InvalidBase64Payload { filename: String },
}

impl ValidationError {
    /// Stable error category for the wire, independent of the message text.
    pub fn category(&self) -> &'static str {
        match self {
            ValidationError::S3SourceRequiresKfpEngine
            | ValidationError::S3SourceRequiresS3Target
            | ValidationError::InvalidBase64Payload { .. } => "error source",
            ValidationError::S3TargetRequiresS3Source => "error target",
            ValidationError::EmptySources
            | ValidationError::MaxTokensOutOfRange
            | ValidationError::ImagesScaleOutOfRange
            | ValidationError::DpiOutOfRange => "error request",
        }
    }
}

/// Every rule a request violated, batched so the client sees all of them at
/// once instead of fixing one per round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// The violated rules, in evaluation order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check whether a specific rule was violated.
    pub fn contains(&self, error: &ValidationError) -> bool {
        self.errors.contains(error)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a parsed conversion request against the configured engine kind.
///
/// Evaluates the S3 consistency rules as one pass: an S3 source requires the
/// KFP engine and an S3 target, and an S3 target requires an S3 source.
/// Independent rules are not short-circuited against each other, but each
/// rule is reported at most once regardless of how many sources violate it.
pub fn validate_convert_request(
    request: &ConvertDocumentsRequest,
    engine: EngineKind,
) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if request.sources.is_empty() {
        errors.push(ValidationError::EmptySources);
    }

    let has_s3_source = request.sources.iter().any(Source::is_s3);

    if has_s3_source {
        if !engine.supports_s3_sources() {
            errors.push(ValidationError::S3SourceRequiresKfpEngine);
        }
        if !request.target.is_s3() {
            errors.push(ValidationError::S3SourceRequiresS3Target);
        }
    } else if request.target.is_s3() {
        errors.push(ValidationError::S3TargetRequiresS3Source);
    }

    for source in &request.sources {
        if let Source::File {
            filename,
            base64_string,
        } = source
        {
            if BASE64.decode(base64_string).is_err() {
                errors.push(ValidationError::InvalidBase64Payload {
                    filename: filename.clone(),
                });
            }
        }
    }

    finish(errors, "conversion")
}

/// Validate a parsed chunking request.
///
/// Chunking has no cross-field business rules; this checks shape only:
/// payloads must decode and numeric options must stay in range. Option
/// *effects* are the engine's responsibility.
pub fn validate_chunking_request(request: &ChunkingRequest) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if request.sources.is_empty() {
        errors.push(ValidationError::EmptySources);
    }

    for source in &request.sources {
        if BASE64.decode(&source.base64_string).is_err() {
            errors.push(ValidationError::InvalidBase64Payload {
                filename: source.filename.clone(),
            });
        }
    }

    if request.max_tokens == Some(0) {
        errors.push(ValidationError::MaxTokensOutOfRange);
    }

    if let Some(picture) = &request.picture_description {
        if picture.images_scale == 0 {
            errors.push(ValidationError::ImagesScaleOutOfRange);
        }
    }

    if let Some(ocr) = &request.ocr {
        if ocr.dpi == Some(0) {
            errors.push(ValidationError::DpiOutOfRange);
        }
    }

    finish(errors, "chunking")
}

fn finish(errors: Vec<ValidationError>, flow: &'static str) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        debug!(flow, violations = errors.len(), "request failed validation");
        Err(ValidationErrors::new(errors))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::types::{Base64FileSource, OcrOptions, PictureDescriptionOptions, S3Coordinates, Target};

    use super::*;

    fn file_source() -> Source {
        Source::File {
            filename: "report.pdf".to_string(),
            base64_string: "aGVsbG8=".to_string(),
        }
    }

    fn s3_coords() -> S3Coordinates {
        S3Coordinates {
            endpoint: "s3.example.com".to_string(),
            verify_ssl: true,
            access_key: "ak".to_string(),
            secret_key: "sk".to_string(),
            bucket: "docs".to_string(),
            key_prefix: "in/".to_string(),
        }
    }

    fn convert_request(sources: Vec<Source>, target: Target) -> ConvertDocumentsRequest {
        ConvertDocumentsRequest {
            options: Default::default(),
            sources,
            target,
        }
    }

    fn chunking_request(sources: Vec<Base64FileSource>) -> ChunkingRequest {
        serde_json::from_value(serde_json::json!({ "sources": [] }))
            .map(|mut request: ChunkingRequest| {
                request.sources = sources;
                request
            })
            .unwrap()
    }

    fn inline_source() -> Base64FileSource {
        Base64FileSource {
            base64_string: "aGVsbG8=".to_string(),
            filename: "notes.md".to_string(),
        }
    }

    #[test]
    fn test_plain_request_passes_on_any_engine() {
        let request = convert_request(vec![file_source()], Target::InBody);
        assert!(validate_convert_request(&request, EngineKind::Local).is_ok());
        assert!(validate_convert_request(&request, EngineKind::Kfp).is_ok());
    }

    #[test]
    fn test_target_defaults_to_inbody() {
        // Scenario: target omitted on the wire.
        let request: ConvertDocumentsRequest = serde_json::from_value(serde_json::json!({
            "sources": [{"kind": "file", "filename": "a.pdf", "base64_string": "aGk="}]
        }))
        .unwrap();
        assert_eq!(request.target, Target::InBody);
        assert!(validate_convert_request(&request, EngineKind::Local).is_ok());
    }

    #[test]
    fn test_s3_source_needs_kfp_engine() {
        // Scenario: s3 source, zip target, non-KFP engine.
        let request = convert_request(vec![Source::S3(s3_coords())], Target::Zip);
        let errors = validate_convert_request(&request, EngineKind::Local).unwrap_err();

        assert!(errors.contains(&ValidationError::S3SourceRequiresKfpEngine));
        assert_eq!(
            ValidationError::S3SourceRequiresKfpEngine.to_string(),
            "source kind \"s3\" requires engine kind \"KFP\""
        );
        assert_eq!(ValidationError::S3SourceRequiresKfpEngine.category(), "error source");
    }

    #[test]
    fn test_s3_source_needs_s3_target() {
        let request = convert_request(vec![Source::S3(s3_coords())], Target::InBody);
        let errors = validate_convert_request(&request, EngineKind::Kfp).unwrap_err();

        assert_eq!(errors.errors(), &[ValidationError::S3SourceRequiresS3Target]);
        assert_eq!(
            ValidationError::S3SourceRequiresS3Target.to_string(),
            "source kind \"s3\" requires target kind \"s3\""
        );
    }

    #[test]
    fn test_s3_target_needs_s3_source() {
        let request = convert_request(vec![file_source()], Target::S3(s3_coords()));
        let errors = validate_convert_request(&request, EngineKind::Kfp).unwrap_err();

        assert_eq!(errors.errors(), &[ValidationError::S3TargetRequiresS3Source]);
        assert_eq!(ValidationError::S3TargetRequiresS3Source.category(), "error target");
    }

    #[test]
    fn test_s3_round_trip_passes_on_kfp() {
        // Scenario: s3 source, s3 target, KFP engine.
        let request = convert_request(vec![Source::S3(s3_coords())], Target::S3(s3_coords()));
        assert!(validate_convert_request(&request, EngineKind::Kfp).is_ok());
    }

    #[test]
    fn test_independent_rules_are_batched() {
        // s3 source, non-s3 target, non-KFP engine: both source rules fire.
        let request = convert_request(vec![Source::S3(s3_coords())], Target::Zip);
        let errors = validate_convert_request(&request, EngineKind::Local).unwrap_err();

        assert_eq!(
            errors.errors(),
            &[
                ValidationError::S3SourceRequiresKfpEngine,
                ValidationError::S3SourceRequiresS3Target,
            ]
        );
    }

    #[test]
    fn test_rules_reported_once_per_request() {
        let request = convert_request(
            vec![Source::S3(s3_coords()), Source::S3(s3_coords())],
            Target::InBody,
        );
        let errors = validate_convert_request(&request, EngineKind::Kfp).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_mixed_sources_trigger_s3_rules() {
        // One s3 source among plain ones is enough.
        let request = convert_request(
            vec![file_source(), Source::S3(s3_coords())],
            Target::S3(s3_coords()),
        );
        assert!(validate_convert_request(&request, EngineKind::Kfp).is_ok());
        assert!(validate_convert_request(&request, EngineKind::Local).is_err());
    }

    #[test]
    fn test_empty_sources_rejected() {
        let request = convert_request(Vec::new(), Target::InBody);
        let errors = validate_convert_request(&request, EngineKind::Local).unwrap_err();
        assert_eq!(errors.errors(), &[ValidationError::EmptySources]);
    }

    #[test]
    fn test_invalid_file_payload_rejected() {
        let request = convert_request(
            vec![Source::File {
                filename: "broken.pdf".to_string(),
                base64_string: "not//valid++base64!".to_string(),
            }],
            Target::InBody,
        );
        let errors = validate_convert_request(&request, EngineKind::Local).unwrap_err();
        assert!(matches!(
            errors.errors()[0],
            ValidationError::InvalidBase64Payload { .. }
        ));
    }

    #[test]
    fn test_chunking_defaults_pass() {
        let request = chunking_request(vec![inline_source()]);
        assert!(validate_chunking_request(&request).is_ok());
    }

    #[test]
    fn test_chunking_empty_sources_rejected() {
        let request = chunking_request(Vec::new());
        let errors = validate_chunking_request(&request).unwrap_err();
        assert!(errors.contains(&ValidationError::EmptySources));
    }

    #[test]
    fn test_chunking_range_checks() {
        let mut request = chunking_request(vec![inline_source()]);
        request.max_tokens = Some(0);
        request.picture_description = Some(PictureDescriptionOptions {
            enabled: true,
            images_scale: 0,
            ..Default::default()
        });
        request.ocr = Some(OcrOptions {
            enabled: true,
            ocr_languages: Some(vec!["eng".to_string()]),
            dpi: Some(0),
        });

        let errors = validate_chunking_request(&request).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                ValidationError::MaxTokensOutOfRange,
                ValidationError::ImagesScaleOutOfRange,
                ValidationError::DpiOutOfRange,
            ]
        );
    }

    #[test]
    fn test_display_joins_messages() {
        let request = convert_request(vec![Source::S3(s3_coords())], Target::Zip);
        let errors = validate_convert_request(&request, EngineKind::Local).unwrap_err();
        let rendered = errors.to_string();
        assert!(rendered.contains("engine kind \"KFP\""));
        assert!(rendered.contains("; "));
    }
}
