use crate::model::{parse_roster_date, DutyDay, Line};
use crate::parsing::columns::{is_column_header, SectorBounds};
use crate::parsing::fields::extract_line_into;
use regex::Regex;
use std::sync::LazyLock;

/// A date token may start a new day only when it appears at or before
/// this character offset.
const DATE_OFFSET_LIMIT: usize = 6;

/// The weekday token of a day-boundary line appears before this offset.
const WEEKDAY_OFFSET_LIMIT: usize = 25;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{2}[A-Z]{3}\d{2}\b").unwrap());
static WEEKDAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(SUN|MON|TUE|WED|THU|FRI|SAT)\b").unwrap());
static REPORT_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Roster Report from").unwrap());
static LEGEND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Hotel Codes|Training Codes|Duty Codes").unwrap());
static STD_STA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bSTD\b.*\bSTA\b").unwrap());
static CREW_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\s*(CA|FO|SO|CSM|FA)\s*/").unwrap());

/// Segmentation state: either between days or accumulating into one.
#[derive(Debug, Clone)]
pub enum SegmentState {
    NoActiveDay,
    Accumulating(DutyDay),
}

/// True for known non-data lines: the report title, legend headers, the
/// column header row, the STD/STA header fragment, and the crew
/// identity line. Skipped lines are never boundary candidates and never
/// feed field extraction.
pub fn is_skippable(text: &str) -> bool {
    REPORT_TITLE_RE.is_match(text)
        || LEGEND_RE.is_match(text)
        || is_column_header(text)
        || STD_STA_RE.is_match(text)
        || CREW_LINE_RE.is_match(text)
}

/// The new-day predicate: a real date token at or before offset 6 AND a
/// weekday token before offset 25. Both are required together, so a
/// date embedded later in a remark cannot start a day.
pub fn new_day_start(text: &str) -> Option<&str> {
    let m = DATE_RE.find(text)?;
    if m.start() > DATE_OFFSET_LIMIT {
        return None;
    }
    parse_roster_date(m.as_str())?;
    let weekday = WEEKDAY_RE.find(text)?;
    if weekday.start() >= WEEKDAY_OFFSET_LIMIT {
        return None;
    }
    Some(m.as_str())
}

/// Pure reducer: feed one line, get the next state plus the finished
/// day a boundary just closed, if any.
pub fn step(
    state: SegmentState,
    line: &Line,
    bounds: Option<SectorBounds>,
) -> (SegmentState, Option<DutyDay>) {
    match new_day_start(&line.text) {
        Some(date) => {
            let emitted = match state {
                SegmentState::Accumulating(day) => Some(finalize(day)),
                SegmentState::NoActiveDay => None,
            };
            let mut day = DutyDay {
                start_date: date.to_string(),
                ..Default::default()
            };
            attach(&mut day, line, bounds);
            (SegmentState::Accumulating(day), emitted)
        }
        None => match state {
            SegmentState::Accumulating(mut day) => {
                attach(&mut day, line, bounds);
                (SegmentState::Accumulating(day), None)
            }
            // lines before the first boundary have no day to attach to
            SegmentState::NoActiveDay => (SegmentState::NoActiveDay, None),
        },
    }
}

/// Flush the in-flight day at end of input.
pub fn finish(state: SegmentState) -> Option<DutyDay> {
    match state {
        SegmentState::Accumulating(day) => Some(finalize(day)),
        SegmentState::NoActiveDay => None,
    }
}

fn attach(day: &mut DutyDay, line: &Line, bounds: Option<SectorBounds>) {
    day.raw_lines.push(line.text.clone());
    extract_line_into(day, line, bounds);
}

fn finalize(mut day: DutyDay) -> DutyDay {
    day.dedup_fields();
    day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DutyCode;

    fn line(text: &str) -> Line {
        Line {
            page: 1,
            y: 0.0,
            text: text.to_string(),
            spans: Vec::new(),
        }
    }

    #[test]
    fn test_new_day_requires_date_near_start() {
        assert_eq!(
            new_day_start("07DEC25 SUN FLY VA0916"),
            Some("07DEC25")
        );
        // date at offset > 6 must not start a day
        assert_eq!(new_day_start("TRN NOTE REF 07DEC25 EXTRA SUN"), None);
    }

    #[test]
    fn test_new_day_requires_weekday_before_offset_25() {
        assert_eq!(new_day_start("07DEC25 FLY VA0916 SYD BNE"), None);
        assert_eq!(
            new_day_start("07DEC25 RDO AT HOME BASE UNTIL SUN"),
            None
        );
    }

    #[test]
    fn test_new_day_rejects_impossible_date() {
        assert_eq!(new_day_start("31FEB25 SUN FLY"), None);
    }

    #[test]
    fn test_skippable_lines() {
        assert!(is_skippable("Roster Report from 01DEC25 to 14DEC25"));
        assert!(is_skippable("Hotel Codes: BNEO MEL1"));
        assert!(is_skippable("Duty Flight Number Sector STD STA"));
        assert!(is_skippable("STD local STA local"));
        assert!(is_skippable("SMITH J 29563 / FO / B737"));
        assert!(!is_skippable("07DEC25 SUN FLY VA0916 SYD BNE"));
    }

    #[test]
    fn test_reducer_boundary_flushes_previous_day() {
        let s = SegmentState::NoActiveDay;
        let (s, emitted) = step(s, &line("07DEC25 SUN FLY VA0916 SYD BNE 0610 0815"), None);
        assert!(emitted.is_none());
        let (s, emitted) = step(s, &line("BNEO"), None);
        assert!(emitted.is_none());
        let (_, emitted) = step(s, &line("08DEC25 MON RDO"), None);
        let day = emitted.unwrap();
        assert_eq!(day.start_date, "07DEC25");
        assert_eq!(day.raw_lines.len(), 2);
        assert_eq!(day.hotels, vec!["BNEO"]);
    }

    #[test]
    fn test_reducer_discards_lines_before_first_boundary() {
        let s = SegmentState::NoActiveDay;
        let (s, emitted) = step(s, &line("some preamble text"), None);
        assert!(emitted.is_none());
        assert!(matches!(s, SegmentState::NoActiveDay));
    }

    #[test]
    fn test_finish_flushes_in_flight_day() {
        let s = SegmentState::NoActiveDay;
        let (s, _) = step(s, &line("07DEC25 SUN FLY VA0916 SYD BNE 0610 0815"), None);
        let day = finish(s).unwrap();
        assert_eq!(day.start_date, "07DEC25");
        assert_eq!(day.duty_codes, vec![DutyCode::Fly]);
        assert_eq!(day.sectors, vec!["SYD-BNE"]);
        assert_eq!(day.times, vec!["0610", "0815"]);
    }

    #[test]
    fn test_finish_with_no_active_day() {
        assert!(finish(SegmentState::NoActiveDay).is_none());
    }

    #[test]
    fn test_finalized_day_is_deduplicated() {
        let s = SegmentState::NoActiveDay;
        let (s, _) = step(s, &line("07DEC25 SUN FLY VA0916 SYD BNE"), None);
        // wrapped continuation repeats the flight and sector
        let (s, _) = step(s, &line("VA0916 SYD BNE"), None);
        let day = finish(s).unwrap();
        assert_eq!(day.flights, vec!["VA0916"]);
        assert_eq!(day.sectors, vec!["SYD-BNE"]);
    }
}
