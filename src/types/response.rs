//! Outbound response types for the conversion API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health check acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
}

impl Default for HealthCheckResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Acknowledgement for clearing engine-held results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearResponse {
    pub status: String,
}

impl Default for ClearResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Outcome of converting a single document, as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionStatus {
    Pending,
    Started,
    Failure,
    Success,
    PartialSuccess,
    Skipped,
}

impl ConversionStatus {
    /// Check if the conversion produced usable output.
    pub fn is_ok(&self) -> bool {
        matches!(self, ConversionStatus::Success | ConversionStatus::PartialSuccess)
    }
}

/// A single processing error reported by the engine, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    /// Pipeline component that failed (e.g. "ocr", "layout")
    pub component_type: String,

    /// Engine module the error originated in
    pub module_name: String,

    pub error_message: String,
}

/// Profiling data for one pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilingItem {
    /// Wall-clock durations in seconds, one per invocation of the stage
    #[serde(default)]
    pub times: Vec<f64>,

    /// How many times the stage ran
    #[serde(default)]
    pub count: usize,
}

impl ProfilingItem {
    /// Total time spent in this stage.
    pub fn total(&self) -> f64 {
        self.times.iter().sum()
    }
}

/// Rendered content for one converted document.
///
/// Only the formats the request asked for are populated; an absent field
/// means that format was not requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub filename: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md_content: Option<String>,

    /// Structured document, carried losslessly as JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_content: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctags_content: Option<String>,
}

impl DocumentResponse {
    /// Create an empty response for the given filename.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            md_content: None,
            json_content: None,
            html_content: None,
            text_content: None,
            doctags_content: None,
        }
    }
}

/// Full result of a conversion request delivered in the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertDocumentResponse {
    pub document: DocumentResponse,

    pub status: ConversionStatus,

    /// Per-document processing errors; always present, possibly empty
    #[serde(default)]
    pub errors: Vec<ErrorItem>,

    /// Wall-clock processing time in seconds
    pub processing_time: f64,

    /// Per-stage profiling, keyed by stage name; additive and order-insensitive
    #[serde(default)]
    pub timings: HashMap<String, ProfilingItem>,
}

/// Result of a conversion whose output was written behind a presigned URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresignedUrlConvertDocumentResponse {
    pub status: ConversionStatus,

    /// Wall-clock processing time in seconds
    pub processing_time: f64,
}

/// Error envelope for a conversion that produced no document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertDocumentErrorResponse {
    pub status: ConversionStatus,
}

/// Progress counters for an in-flight task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskProcessingMeta {
    pub num_docs: usize,

    pub num_processed: usize,

    pub num_succeeded: usize,

    pub num_failed: usize,

    /// When the engine started processing the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

/// Snapshot of an asynchronous task's state.
///
/// `task_status` is deliberately an open string: the state space is owned by
/// the external job engine, not this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatusResponse {
    pub task_id: String,

    pub task_status: String,

    /// Position in the engine's queue, when queued
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_position: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_meta: Option<TaskProcessingMeta>,
}
