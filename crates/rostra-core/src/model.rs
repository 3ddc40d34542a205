use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One positioned text run from a PDF page's text layer.
///
/// Coordinates are in PDF user space: `y` grows upward, so a larger `y`
/// is higher on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub page: usize,
}

/// A visual row reconstructed from one y-cluster of fragments.
///
/// `text` is the cluster's fragments joined in ascending-x order with
/// whitespace collapsed; `spans` keeps the positioned fragments (same
/// order) for column-aware extraction.
#[derive(Debug, Clone)]
pub struct Line {
    pub page: usize,
    pub y: f32,
    pub text: String,
    pub spans: Vec<TextFragment>,
}

/// Duty codes used by the roster report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DutyCode {
    #[serde(rename = "FLY")]
    Fly,
    #[serde(rename = "TVL")]
    Tvl,
    #[serde(rename = "LO")]
    Lo,
    #[serde(rename = "RDO")]
    Rdo,
}

impl DutyCode {
    pub fn token(&self) -> &'static str {
        match self {
            DutyCode::Fly => "FLY",
            DutyCode::Tvl => "TVL",
            DutyCode::Lo => "LO",
            DutyCode::Rdo => "RDO",
        }
    }
}

impl fmt::Display for DutyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// One calendar day's worth of roster entries.
///
/// List fields have set semantics: sorted and deduplicated when the day
/// is finalized. `raw_lines` keeps every attributed line in reading
/// order for transparency/debugging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyDay {
    /// Roster-native start date token, e.g. "07DEC25".
    pub start_date: String,
    #[serde(default)]
    pub raw_lines: Vec<String>,
    #[serde(default)]
    pub duty_codes: Vec<DutyCode>,
    #[serde(default)]
    pub flights: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub times: Vec<String>,
    #[serde(default)]
    pub hotels: Vec<String>,
    #[serde(default)]
    pub remarks: Vec<String>,
}

/// JSON envelope shared by the PDF path and hand-authored replay input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterCapture {
    pub source: String,
    pub captured_at: String,
    pub file_name: String,
    #[serde(default)]
    pub duties: Vec<DutyDay>,
}

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Parse a roster date token like "07DEC25" into a calendar date.
///
/// Two-digit years map to 2000-2099. Returns None for anything that is
/// not a real date (bad month token, day out of range for the month).
pub fn parse_roster_date(token: &str) -> Option<NaiveDate> {
    let token = token.trim();
    if token.len() != 7 || !token.is_ascii() {
        return None;
    }
    let day: u32 = token[..2].parse().ok()?;
    let month = MONTHS.iter().position(|m| *m == &token[2..5])? as u32 + 1;
    let year: i32 = token[5..7].parse().ok()?;
    NaiveDate::from_ymd_opt(2000 + year, month, day)
}

/// Format a calendar date back into the roster's DDMMMYY token.
pub fn format_roster_date(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!(
        "{:02}{}{:02}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year() % 100
    )
}

/// Sort and deduplicate a set-semantics field in place. Idempotent.
pub fn dedup_sorted<T: Ord>(values: &mut Vec<T>) {
    values.sort();
    values.dedup();
}

impl DutyDay {
    /// Re-apply set semantics to all six set fields. A no-op on an
    /// already-finalized day.
    pub fn dedup_fields(&mut self) {
        dedup_sorted(&mut self.duty_codes);
        dedup_sorted(&mut self.flights);
        dedup_sorted(&mut self.sectors);
        dedup_sorted(&mut self.times);
        dedup_sorted(&mut self.hotels);
        dedup_sorted(&mut self.remarks);
    }

    /// The start date as a calendar date, if the token parses.
    pub fn date(&self) -> Option<NaiveDate> {
        parse_roster_date(&self.start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roster_date() {
        let d = parse_roster_date("07DEC25").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 12, 7).unwrap());
    }

    #[test]
    fn test_parse_roster_date_rejects_bad_month() {
        assert!(parse_roster_date("07XYZ25").is_none());
    }

    #[test]
    fn test_parse_roster_date_rejects_impossible_day() {
        assert!(parse_roster_date("31FEB25").is_none());
        assert!(parse_roster_date("00JAN25").is_none());
    }

    #[test]
    fn test_format_roster_date_round_trip() {
        let d = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(format_roster_date(d), "31JAN26");
        assert_eq!(parse_roster_date("31JAN26"), Some(d));
    }

    #[test]
    fn test_dedup_sorted_idempotent() {
        let mut v = vec!["SYD-BNE", "BNE-SYD", "SYD-BNE"];
        dedup_sorted(&mut v);
        let once = v.clone();
        dedup_sorted(&mut v);
        assert_eq!(v, once);
        assert_eq!(v, vec!["BNE-SYD", "SYD-BNE"]);
    }

    #[test]
    fn test_dedup_fields_idempotent() {
        let mut day = DutyDay {
            start_date: "07DEC25".into(),
            times: vec!["0815".into(), "0610".into(), "0815".into()],
            duty_codes: vec![DutyCode::Fly, DutyCode::Fly],
            ..Default::default()
        };
        day.dedup_fields();
        let once = day.clone();
        day.dedup_fields();
        assert_eq!(day.times, once.times);
        assert_eq!(day.duty_codes, vec![DutyCode::Fly]);
        assert_eq!(day.times, vec!["0610", "0815"]);
    }

    #[test]
    fn test_duty_day_serializes_camel_case() {
        let day = DutyDay {
            start_date: "07DEC25".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"startDate\":\"07DEC25\""));
        assert!(json.contains("\"dutyCodes\""));
        assert!(json.contains("\"rawLines\""));
    }

    #[test]
    fn test_duty_day_deserializes_with_missing_lists() {
        let day: DutyDay = serde_json::from_str(r#"{"startDate":"07DEC25"}"#).unwrap();
        assert_eq!(day.start_date, "07DEC25");
        assert!(day.flights.is_empty());
    }
}
