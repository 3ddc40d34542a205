use crate::error::RosterError;
use crate::extraction::{PageFragments, TextLayerProvider};
use crate::model::TextFragment;
use std::io::Write;
use std::process::Command;

/// Text-layer backend using pdftotext (from poppler-utils).
///
/// Runs `pdftotext -bbox-layout` and reads word-level bounding boxes,
/// so every word becomes one positioned fragment. The XML reports
/// coordinates from the top-left corner; y is flipped against the page
/// height to satisfy the upward-y contract of [`TextLayerProvider`].
pub struct PdftotextProvider;

impl PdftotextProvider {
    pub fn new() -> Self {
        PdftotextProvider
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayerProvider for PdftotextProvider {
    fn extract_fragments(&self, pdf_bytes: &[u8]) -> Result<Vec<PageFragments>, RosterError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| RosterError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| RosterError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RosterError::PdftotextNotFound
                } else {
                    RosterError::Extraction(format!("pdftotext -bbox-layout failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(RosterError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        Ok(parse_bbox_xml(&xml))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Parse the -bbox-layout XML into per-page word fragments.
fn parse_bbox_xml(xml: &str) -> Vec<PageFragments> {
    let mut pages: Vec<PageFragments> = Vec::new();
    let mut current_page: Option<usize> = None;
    let mut page_height: f32 = 0.0;

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page ") {
            let number = parse_attr_usize(line, "number").unwrap_or(pages.len() + 1);
            page_height = parse_attr_f32(line, "height").unwrap_or(0.0);
            current_page = Some(number);
            pages.push(PageFragments {
                page_number: number,
                fragments: Vec::new(),
            });
            continue;
        }

        if line.starts_with("<word ") {
            let (Some(page), Some(text)) = (current_page, parse_word_text(line)) else {
                continue;
            };
            let text = decode_xml_entities(&text).trim().to_string();
            if text.is_empty() {
                continue;
            }
            let x = parse_attr_f32(line, "xMin").unwrap_or(0.0);
            let y_top = parse_attr_f32(line, "yMin").unwrap_or(0.0);
            if let Some(entry) = pages.last_mut() {
                entry.fragments.push(TextFragment {
                    text,
                    x,
                    // flip to upward-y user space
                    y: page_height - y_top,
                    page,
                });
            }
        }
    }

    pages
}

fn parse_attr_usize(tag: &str, name: &str) -> Option<usize> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr_f32(tag: &str, name: &str) -> Option<f32> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

fn parse_word_text(word_tag: &str) -> Option<String> {
    let start = word_tag.find('>')? + 1;
    let end = word_tag.rfind("</word>")?;
    if start > end {
        return None;
    }
    Some(word_tag[start..end].to_string())
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
