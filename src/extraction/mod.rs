//! Text extraction from uploaded documents.
//!
//! This module provides:
//! - Format detection from file extensions
//! - PDF extraction (per page)
//! - DOCX extraction (per paragraph)
//! - UTF-8 decoding for plain text

mod docx;
mod extractor;
mod pdf;

pub use extractor::{DocumentExtractor, DocumentFormat};
