//! Chunk types for the chunking response.

use serde::{Deserialize, Serialize};

use super::ChunkingMethod;

/// Structural metadata for a single chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Starting line number in the source document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_line: Option<usize>,

    /// Ending line number in the source document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<usize>,

    /// Headings the chunk falls under, outermost first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,

    /// Captions of figures/tables the chunk spans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captions: Option<Vec<String>>,

    /// Number of tokens in the chunk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_count: Option<usize>,
}

/// A contiguous span of document content plus its structural metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChunk {
    /// The chunk text content
    pub text: String,

    #[serde(default)]
    pub metadata: ChunkMetadata,
}

/// Result of a chunking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingResponse {
    /// Chunks in document order
    pub chunks: Vec<DocumentChunk>,

    pub total_chunks: usize,

    /// Echo of the chunking method that produced the chunks
    pub method_used: String,
}

impl ChunkingResponse {
    /// Build a response from engine output, keeping `total_chunks` consistent.
    pub fn from_chunks(chunks: Vec<DocumentChunk>, method: ChunkingMethod) -> Self {
        Self {
            total_chunks: chunks.len(),
            chunks,
            method_used: method.to_string(),
        }
    }
}
