pub mod pdftotext;

use crate::error::RosterError;
use crate::model::TextFragment;

/// Positioned text fragments extracted from a single page.
#[derive(Debug, Clone)]
pub struct PageFragments {
    pub page_number: usize,
    pub fragments: Vec<TextFragment>,
}

/// Trait for PDF text-layer backends.
///
/// Implementations must return pages complete and in document order,
/// with fragment coordinates in PDF user space (y grows upward).
/// Backends with a top-left origin are expected to flip y against the
/// page height before returning.
pub trait TextLayerProvider: Send + Sync {
    /// Extract positioned text fragments from PDF bytes, one
    /// PageFragments per page.
    fn extract_fragments(&self, pdf_bytes: &[u8]) -> Result<Vec<PageFragments>, RosterError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
