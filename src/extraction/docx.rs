//! DOCX text extraction.
//!
//! A DOCX file is a ZIP archive; the body lives in `word/document.xml` as
//! WordprocessingML. Each `<w:p>` paragraph becomes one line of output.
//! Text boxes (`<w:txbxContent>`) nest paragraphs inside a paragraph and are
//! dropped before matching, so only body paragraphs are read.

use std::io::{Cursor, Read};

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, SummarizerError};

lazy_static! {
    static ref TEXT_BOX: Regex =
        Regex::new(r"(?s)<w:txbxContent(?:\s[^>]*)?>.*?</w:txbxContent>").unwrap();
    static ref PARAGRAPH: Regex =
        Regex::new(r"(?s)<w:p(?:\s[^>]*)?/>|<w:p(?:\s[^>]*)?>(.*?)</w:p>").unwrap();
    static ref RUN_CONTENT: Regex =
        Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:tab\s*/>|<w:br(?:\s[^>]*)?/>").unwrap();
}

const DOCUMENT_XML: &str = "word/document.xml";

/// Extract text from DOCX bytes, one paragraph per line.
pub fn extract_text(docx_bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(docx_bytes))
        .map_err(|e| SummarizerError::Extraction(format!("Failed to read DOCX as ZIP: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_XML)
        .map_err(|e| SummarizerError::Extraction(format!("Missing {}: {}", DOCUMENT_XML, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| SummarizerError::Extraction(format!("Failed to read {}: {}", DOCUMENT_XML, e)))?;

    Ok(paragraphs_from_xml(&xml))
}

/// Join the text of every paragraph in a WordprocessingML body.
fn paragraphs_from_xml(xml: &str) -> String {
    let mut text = String::new();
    let body = TEXT_BOX.replace_all(xml, "");

    for paragraph in PARAGRAPH.captures_iter(&body) {
        if let Some(body) = paragraph.get(1) {
            for run in RUN_CONTENT.captures_iter(body.as_str()) {
                match run.get(1) {
                    Some(t) => text.push_str(&decode_entities(t.as_str())),
                    None if run[0].starts_with("<w:tab") => text.push('\t'),
                    None => text.push('\n'),
                }
            }
        }
        text.push('\n');
    }

    text
}

/// Decode the predefined XML entities and numeric character references.
fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }

    lazy_static! {
        static ref ENTITY: Regex = Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|lt|gt|amp|apos|quot);").unwrap();
    }

    ENTITY
        .replace_all(value, |caps: &regex::Captures| {
            let name = &caps[1];
            let decoded = match name {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "amp" => Some('&'),
                "apos" => Some('\''),
                "quot" => Some('"'),
                _ if name.starts_with("#x") => {
                    u32::from_str_radix(&name[2..], 16).ok().and_then(char::from_u32)
                }
                _ => name[1..].parse().ok().and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    /// Build a minimal DOCX archive around the given body XML.
    pub(crate) fn build_docx(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        );
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_XML, zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_joined_with_newlines() {
        let docx = build_docx(
            r#"<w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>Quarterly</w:t></w:r><w:r><w:t xml:space="preserve"> report</w:t></w:r></w:p><w:p/><w:p w:rsidR="00A1"><w:r><w:t>Revenue grew.</w:t></w:r></w:p>"#,
        );
        let text = extract_text(&docx).unwrap();
        assert_eq!(text, "Quarterly report\n\nRevenue grew.\n");
    }

    #[test]
    fn test_tabs_breaks_and_entities() {
        let text = paragraphs_from_xml(
            r#"<w:p><w:r><w:t>A&amp;B</w:t><w:tab/><w:t>&lt;x&gt;</w:t><w:br/><w:t>&#233;t&#xE9;</w:t></w:r></w:p>"#,
        );
        assert_eq!(text, "A&B\t<x>\nété\n");
    }

    #[test]
    fn test_text_box_does_not_split_paragraph() {
        let text = paragraphs_from_xml(
            r#"<w:p><w:r><w:t>Before</w:t></w:r><w:r><mc:AlternateContent><mc:Choice><w:drawing><wps:txbx><w:txbxContent><w:p><w:r><w:t>Boxed</w:t></w:r></w:p></w:txbxContent></wps:txbx></w:drawing></mc:Choice><mc:Fallback><w:pict><v:textbox><w:txbxContent><w:p><w:r><w:t>Boxed</w:t></w:r></w:p></w:txbxContent></v:textbox></w:pict></mc:Fallback></mc:AlternateContent></w:r><w:r><w:t xml:space="preserve"> after</w:t></w:r></w:p><w:p><w:r><w:t>Next</w:t></w:r></w:p>"#,
        );
        assert_eq!(text, "Before after\nNext\n");
    }

    #[test]
    fn test_not_a_zip() {
        let err = extract_text(b"plain bytes").unwrap_err();
        assert!(matches!(err, SummarizerError::Extraction(_)));
    }

    #[test]
    fn test_zip_without_document_xml() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("other.xml", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_text(&bytes).unwrap_err();
        assert!(matches!(err, SummarizerError::Extraction(_)));
    }
}
