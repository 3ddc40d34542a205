pub mod columns;
pub mod fields;
pub mod lines;
pub mod segment;

use crate::diagnostics::{ParseDiagnostics, ParseWarning};
use crate::extraction::PageFragments;
use crate::model::DutyDay;
use columns::locate_sector_column;
use lines::reconstruct_lines;
use segment::{finish, is_skippable, step, SegmentState};

/// Parse extracted page fragments into ordered duty-day records.
///
/// Wires the pipeline: line reconstruction, one global sector-column
/// learn, then the sequential duty-day reducer. Field-level problems
/// never fail the parse; they degrade into the diagnostics payload.
pub fn parse_duties(pages: &[PageFragments]) -> (Vec<DutyDay>, ParseDiagnostics) {
    let lines = reconstruct_lines(pages);

    let mut diagnostics = ParseDiagnostics {
        page_count: pages.len(),
        line_count: lines.len(),
        ..Default::default()
    };

    let bounds = locate_sector_column(&lines);
    match bounds {
        Some(b) => diagnostics.sector_column = Some((b.left, b.right)),
        None => diagnostics.warnings.push(ParseWarning::important(
            "column header row (Flight Number/Sector) not found; \
             sectors derived from generic pairing only",
        )),
    }

    let mut duties = Vec::new();
    let mut state = SegmentState::NoActiveDay;
    for line in &lines {
        if is_skippable(&line.text) {
            diagnostics.skipped_lines.push(line.text.clone());
            continue;
        }
        let (next, emitted) = step(state, line, bounds);
        state = next;
        if let Some(day) = emitted {
            duties.push(day);
        }
    }
    if let Some(day) = finish(state) {
        duties.push(day);
    }

    (duties, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DutyCode, TextFragment};

    fn page(number: usize, rows: &[(&str, f32)]) -> PageFragments {
        // one fragment per whitespace-separated token, 30 units apart
        let mut fragments = Vec::new();
        for (text, y) in rows {
            for (i, token) in text.split_whitespace().enumerate() {
                fragments.push(TextFragment {
                    text: token.to_string(),
                    x: 10.0 + 30.0 * i as f32,
                    y: *y,
                    page: number,
                });
            }
        }
        PageFragments {
            page_number: number,
            fragments,
        }
    }

    #[test]
    fn test_parse_duties_two_days() {
        let pages = vec![page(
            1,
            &[
                ("Roster Report from 01DEC25 to 14DEC25", 800.0),
                ("07DEC25 SUN FLY VA0916 SYD BNE 0610 0815", 760.0),
                ("BNEO", 740.0),
                ("08DEC25 MON RDO", 720.0),
            ],
        )];
        let (duties, diagnostics) = parse_duties(&pages);
        assert_eq!(duties.len(), 2);
        assert_eq!(duties[0].start_date, "07DEC25");
        assert_eq!(duties[0].hotels, vec!["BNEO"]);
        assert_eq!(duties[1].start_date, "08DEC25");
        assert_eq!(duties[1].duty_codes, vec![DutyCode::Rdo]);
        assert_eq!(diagnostics.skipped_lines.len(), 1);
        // no header row in this fixture
        assert!(diagnostics.sector_column.is_none());
        assert_eq!(diagnostics.warnings.len(), 1);
    }

    #[test]
    fn test_parse_duties_learns_column_once() {
        let pages = vec![page(
            1,
            &[
                ("Duty Flight Number Sector STD STA", 800.0),
                ("07DEC25 SUN FLY VA0916 SYD BNE 0610 0815", 760.0),
            ],
        )];
        let (duties, diagnostics) = parse_duties(&pages);
        assert_eq!(duties.len(), 1);
        assert!(diagnostics.sector_column.is_some());
        assert!(diagnostics.warnings.is_empty());
        // header row itself is skipped, not segmented
        assert_eq!(diagnostics.skipped_lines.len(), 1);
    }

    #[test]
    fn test_parse_duties_empty_input() {
        let (duties, diagnostics) = parse_duties(&[]);
        assert!(duties.is_empty());
        assert_eq!(diagnostics.line_count, 0);
    }
}
