//! Core wire types for the conversion and chunking API.

mod chunk;
mod request;
mod response;
mod source;

pub use chunk::{ChunkMetadata, ChunkingResponse, DocumentChunk};
pub use request::{
    ChunkingMethod, ChunkingRequest, ConvertDocumentsRequest, ConvertDocumentsRequestOptions,
    OcrOptions, OutputFormat, PictureDescriptionOptions,
};
pub use response::{
    ClearResponse, ConversionStatus, ConvertDocumentErrorResponse, ConvertDocumentResponse,
    DocumentResponse, ErrorItem, HealthCheckResponse, PresignedUrlConvertDocumentResponse,
    ProfilingItem, TaskProcessingMeta, TaskStatusResponse,
};
pub use source::{Base64FileSource, S3Coordinates, Source, Target};
