//! Execution engine seam.
//!
//! The engines that actually convert, chunk, and OCR documents live outside
//! this crate. They are reached through [`ExecutionEngine`], and the only
//! capability validation ever asks of them is which kind of engine is
//! configured.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::{ChunkingRequest, ChunkingResponse, ConvertDocumentResponse, ConvertDocumentsRequest};

/// Identity of the configured execution backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// In-process execution
    Local,
    /// Kubeflow Pipelines execution
    Kfp,
}

impl EngineKind {
    /// Only the KFP backend can fetch request sources from object storage.
    pub fn supports_s3_sources(&self) -> bool {
        matches!(self, EngineKind::Kfp)
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::Local => write!(f, "local"),
            EngineKind::Kfp => write!(f, "KFP"),
        }
    }
}

/// Black-box contract for the document processing backend.
///
/// Implementations receive requests that already passed validation; errors
/// they return are surfaced to the client verbatim, never reinterpreted.
#[async_trait]
pub trait ExecutionEngine: Send + Sync {
    /// Which backend is configured; drives the S3 source rule.
    fn kind(&self) -> EngineKind;

    /// Convert the requested documents.
    async fn convert(&self, request: ConvertDocumentsRequest) -> Result<ConvertDocumentResponse>;

    /// Chunk the requested documents.
    async fn chunk(&self, request: ChunkingRequest) -> Result<ChunkingResponse>;

    /// Drop any results the engine still holds.
    async fn clear(&self) -> Result<()>;
}
