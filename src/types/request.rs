//! Inbound request types for conversion and chunking.

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_IMAGES_SCALE, DEFAULT_MAX_TOKENS, DEFAULT_PICTURE_PROMPT, DEFAULT_PICTURE_REPO_ID};

use super::{Base64FileSource, Source, Target};

/// Export formats the engine can render a converted document into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown
    Md,
    /// Structured document as JSON
    Json,
    /// HTML
    Html,
    /// Plain text
    Text,
    /// DocTags markup
    Doctags,
}

/// Engine-side conversion options.
///
/// Opaque to validation beyond being a defaultable bag; the engine interprets
/// every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertDocumentsRequestOptions {
    /// Formats to render the converted document into
    #[serde(default = "default_to_formats")]
    pub to_formats: Vec<OutputFormat>,

    /// Whether to run OCR on image-only content
    #[serde(default = "default_do_ocr")]
    pub do_ocr: bool,

    /// OCR languages, engine auto-detects when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr_lang: Option<Vec<String>>,

    /// Abort the whole request on the first document failure
    #[serde(default)]
    pub abort_on_error: bool,
}

impl Default for ConvertDocumentsRequestOptions {
    fn default() -> Self {
        Self {
            to_formats: default_to_formats(),
            do_ocr: default_do_ocr(),
            ocr_lang: None,
            abort_on_error: false,
        }
    }
}

fn default_to_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Md]
}

fn default_do_ocr() -> bool {
    true
}

/// Request to convert one or more documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertDocumentsRequest {
    /// Engine options, neutral defaults when omitted
    #[serde(default)]
    pub options: ConvertDocumentsRequestOptions,

    /// Where the content comes from, in request order
    pub sources: Vec<Source>,

    /// Where the result goes, inline response body when omitted
    #[serde(default)]
    pub target: Target,
}

/// The chunking method to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkingMethod {
    /// Token-aware chunking with structural merging
    Hybrid,
    /// Structure-only chunking along the document hierarchy
    Hierarchical,
}

impl Default for ChunkingMethod {
    fn default() -> Self {
        ChunkingMethod::Hybrid
    }
}

impl std::fmt::Display for ChunkingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChunkingMethod::Hybrid => write!(f, "hybrid"),
            ChunkingMethod::Hierarchical => write!(f, "hierarchical"),
        }
    }
}

/// Options for the picture description enrichment step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureDescriptionOptions {
    /// Whether to describe pictures at all
    #[serde(default)]
    pub enabled: bool,

    /// Model repository ID used for captioning
    #[serde(default = "default_picture_repo_id")]
    pub repo_id: String,

    /// Prompt handed to the captioning model
    #[serde(default = "default_picture_prompt")]
    pub prompt: String,

    /// Scale factor applied to images before captioning, at least 1
    #[serde(default = "default_images_scale")]
    pub images_scale: u32,
}

impl Default for PictureDescriptionOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            repo_id: default_picture_repo_id(),
            prompt: default_picture_prompt(),
            images_scale: default_images_scale(),
        }
    }
}

/// Options for OCR during chunking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrOptions {
    /// Whether to run OCR at all
    #[serde(default)]
    pub enabled: bool,

    /// Languages to OCR with, auto-detected when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr_languages: Option<Vec<String>>,

    /// Render DPI, at least 1; higher improves accuracy at a time cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpi: Option<u32>,
}

/// Request to chunk one or more inline documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkingRequest {
    /// Inline documents to chunk, in request order
    pub sources: Vec<Base64FileSource>,

    /// Chunking method
    #[serde(default)]
    pub method: ChunkingMethod,

    /// Merge list items into one chunk (hierarchical chunking)
    #[serde(default = "default_merge")]
    pub merge_list_items: Option<bool>,

    /// Merge undersized successive chunks sharing headings and captions
    /// (hybrid chunking)
    #[serde(default = "default_merge")]
    pub merge_peers: Option<bool>,

    /// Upper bound on tokens per chunk, enforced by the engine
    #[serde(default = "default_max_tokens")]
    pub max_tokens: Option<u32>,

    /// Picture description enrichment, off when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_description: Option<PictureDescriptionOptions>,

    /// OCR processing, off when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr: Option<OcrOptions>,
}

fn default_merge() -> Option<bool> {
    Some(true)
}

fn default_max_tokens() -> Option<u32> {
    Some(DEFAULT_MAX_TOKENS)
}

fn default_picture_repo_id() -> String {
    DEFAULT_PICTURE_REPO_ID.to_string()
}

fn default_picture_prompt() -> String {
    DEFAULT_PICTURE_PROMPT.to_string()
}

fn default_images_scale() -> u32 {
    DEFAULT_IMAGES_SCALE
}
