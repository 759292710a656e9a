//! Docgate Library
//!
//! Request validation and task-status modeling for a document conversion and
//! chunking API. Validates inbound requests (including the S3 source/target
//! consistency rules), and shapes engine results into stable wire responses.
//! The conversion and chunking engines themselves are external collaborators
//! reached through the [`engine::ExecutionEngine`] trait.

pub mod api;
pub mod engine;
pub mod protocol;
pub mod types;
pub mod validation;

pub use engine::{EngineKind, ExecutionEngine};
pub use protocol::{MessageKind, WebsocketMessage};
pub use types::{ChunkingRequest, ConvertDocumentsRequest, Source, Target};
pub use validation::{validate_chunking_request, validate_convert_request, ValidationErrors};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::engine::{EngineKind, ExecutionEngine};
    pub use crate::protocol::*;
    pub use crate::types::*;
    pub use crate::validation::*;
}

/// Default maximum tokens per chunk
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Default scale factor for images handed to the picture-description model
pub const DEFAULT_IMAGES_SCALE: u32 = 2;

/// Default model repository for picture description enrichment
pub const DEFAULT_PICTURE_REPO_ID: &str = "HuggingFaceTB/SmolVLM-256M-Instruct";

/// Default prompt for picture description enrichment
pub const DEFAULT_PICTURE_PROMPT: &str =
    "Describe this picture in three to five sentences. Be precise and concise.";
