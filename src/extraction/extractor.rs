//! Document extractor: picks a format from the file name and returns plain text.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{docx, pdf};
use crate::error::{Result, SummarizerError};

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Detect the format from a file name's extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())?
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Extensions accepted for upload.
    pub fn supported_extensions() -> &'static [&'static str] {
        &["pdf", "docx", "txt"]
    }

    /// Get the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Self::Txt => "text/plain",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
            DocumentFormat::Txt => write!(f, "txt"),
        }
    }
}

/// Extracts plain text from uploaded documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentExtractor;

impl DocumentExtractor {
    /// Create a new document extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract text from file content, choosing the format by `file_name`.
    ///
    /// The result is trimmed. An unknown extension yields
    /// [`SummarizerError::UnsupportedFormat`] and no text.
    pub fn extract(&self, file_name: &str, content: &[u8]) -> Result<String> {
        let format = DocumentFormat::from_file_name(file_name)
            .ok_or_else(|| SummarizerError::UnsupportedFormat(file_name.to_string()))?;

        debug!(file = file_name, %format, bytes = content.len(), "Extracting text");

        let text = match format {
            DocumentFormat::Pdf => pdf::extract_text(content)?,
            DocumentFormat::Docx => docx::extract_text(content)?,
            DocumentFormat::Txt => decode_utf8(content)?,
        };

        let text = text.trim().to_string();
        info!(file = file_name, %format, chars = text.len(), "Extracted text");
        Ok(text)
    }

    /// Extract text from a file on disk.
    pub fn extract_file(&self, path: &Path) -> Result<String> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        // check the extension before touching the disk
        if DocumentFormat::from_file_name(file_name).is_none() {
            return Err(SummarizerError::UnsupportedFormat(file_name.to_string()));
        }

        let content = std::fs::read(path)?;
        self.extract(file_name, &content)
    }
}

/// Decode plain-text uploads as UTF-8.
fn decode_utf8(content: &[u8]) -> Result<String> {
    // tolerate a leading byte-order mark
    let content = content.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(content);
    String::from_utf8(content.to_vec())
        .map_err(|e| SummarizerError::Extraction(format!("Text file is not valid UTF-8: {}", e)))
}
