use crate::model::Line;

/// Horizontal bleed subtracted from a label's x so slightly left-shifted
/// column values still fall inside the learned range.
const COLUMN_BLEED: f32 = 6.0;

/// Width used for the sector column when the next column label (STD)
/// is missing from the header row.
const SECTOR_COLUMN_FALLBACK_WIDTH: f32 = 90.0;

/// Learned horizontal pixel range of the sector column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorBounds {
    pub left: f32,
    pub right: f32,
}

impl SectorBounds {
    pub fn contains(&self, x: f32) -> bool {
        x >= self.left && x < self.right
    }
}

/// Scan reconstructed lines for the column-header row and learn the
/// sector column's x-bounds from it.
///
/// The header row is the first line carrying both a "Flight Number"
/// label and a "Sector" label. Bounds are learned once and apply to the
/// whole document. Returns None when no header row exists; the caller
/// degrades to generic sector pairing and reports a warning.
pub fn locate_sector_column(lines: &[Line]) -> Option<SectorBounds> {
    let header = lines
        .iter()
        .find(|line| is_column_header(&line.text))?;

    let sector_x = header
        .spans
        .iter()
        .find(|span| span.text.eq_ignore_ascii_case("Sector"))
        .map(|span| span.x)?;

    let left = sector_x - COLUMN_BLEED;
    let right = header
        .spans
        .iter()
        .filter(|span| span.text.eq_ignore_ascii_case("STD") && span.x > sector_x)
        .map(|span| span.x - COLUMN_BLEED)
        .fold(None::<f32>, |acc, x| {
            Some(acc.map_or(x, |a| a.min(x)))
        })
        .unwrap_or(left + SECTOR_COLUMN_FALLBACK_WIDTH);

    Some(SectorBounds { left, right })
}

/// True for the roster's column-header row.
pub fn is_column_header(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("flight number") && lower.contains("sector")
}
