pub mod audit;
pub mod diagnostics;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;

use chrono::NaiveDate;
use diagnostics::{ParseDiagnostics, ParseWarning};
use error::RosterError;
use extraction::TextLayerProvider;
use model::RosterCapture;
use serde::{Deserialize, Serialize};

/// A parsed roster capture plus the diagnostics gathered on the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedRoster {
    pub capture: RosterCapture,
    pub diagnostics: ParseDiagnostics,
}

/// Main API entry point: reconstruct duty days from a roster PDF.
///
/// One-shot over the whole document: all pages are extracted before
/// segmentation starts, because segmentation needs the fully ordered
/// cross-page line sequence. Provider failures abort the call;
/// everything downstream degrades into diagnostics instead.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    provider: &dyn TextLayerProvider,
    file_name: &str,
) -> Result<ParsedRoster, RosterError> {
    let pages = provider.extract_fragments(pdf_bytes)?;
    let (duties, diagnostics) = parsing::parse_duties(&pages);

    Ok(ParsedRoster {
        capture: RosterCapture {
            source: "pdf".to_string(),
            captured_at: chrono::Utc::now().to_rfc3339(),
            file_name: file_name.to_string(),
            duties,
        },
        diagnostics,
    })
}

/// Load a capture envelope from hand-authored or replayed JSON.
///
/// Malformed JSON, or JSON without a duties array, degrades to an empty
/// capture plus a warning - the audit path stays usable either way, and
/// treats replayed captures identically to PDF-parsed ones.
pub fn load_capture(json_bytes: &[u8]) -> (RosterCapture, Vec<ParseWarning>) {
    match serde_json::from_slice::<RosterCapture>(json_bytes) {
        Ok(capture) => {
            let mut warnings = Vec::new();
            if capture.duties.is_empty() {
                warnings.push(ParseWarning::info("capture contains no duty days"));
            }
            (capture, warnings)
        }
        Err(err) => (
            RosterCapture {
                source: "json".to_string(),
                captured_at: String::new(),
                file_name: String::new(),
                duties: Vec::new(),
            },
            vec![ParseWarning::important(format!(
                "malformed capture envelope, treating duty list as empty: {err}"
            ))],
        ),
    }
}

/// Parse a YYYY-MM-DD date argument.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, RosterError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| RosterError::InvalidDate(input.to_string()))
}
