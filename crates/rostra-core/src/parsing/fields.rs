use crate::model::{DutyCode, DutyDay, Line};
use crate::parsing::columns::SectorBounds;
use regex::Regex;
use std::sync::LazyLock;

pub const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// 3-letter tokens that look like airport codes but never are.
const NON_AIRPORT_TOKENS: [&str; 5] = ["STD", "STA", "FLY", "TVL", "RDO"];

static DUTY_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(FLY|TVL|LO|RDO)\b").unwrap());
static FLIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2} ?\d{3,4}\b").unwrap());
static SECTOR_PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{3})\s*[-\u{2013}]\s*([A-Z]{3})\b").unwrap());
static ADJACENT_CODES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{3})\s+([A-Z]{3})\b").unwrap());
static SECTOR_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}-[A-Z]{3}$").unwrap());
static FOUR_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").unwrap());
static HOTEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{3}\d\b|\b[A-Z]{4}\b").unwrap());
static TRAINING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bRTP\d[\w-]*\b").unwrap());
static OWN_ACCOM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bOA\s+\d{1,2}/\d{1,2}\s+[A-Z]{3}\b").unwrap());
static IATA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());

/// Extract every field the line carries into the accumulating day.
/// Duplicate matches collapse when the day is finalized.
pub fn extract_line_into(day: &mut DutyDay, line: &Line, bounds: Option<SectorBounds>) {
    day.duty_codes.extend(extract_duty_codes(&line.text));
    day.flights.extend(extract_flights(&line.text));

    // Two sector strategies, unioned, then filtered to the strict
    // AAA-BBB shape. Column-aware extraction is preferred where bounds
    // are known; generic pairing covers documents without a header row.
    let mut sectors = extract_sectors_generic(&line.text);
    if let Some(bounds) = bounds {
        sectors.extend(extract_sectors_by_column(line, bounds));
    }
    sectors.retain(|s| SECTOR_SHAPE_RE.is_match(s));
    day.sectors.extend(sectors);

    day.times.extend(extract_times(&line.text));
    day.hotels.extend(extract_hotels(&line.text));
    day.remarks.extend(extract_remarks(&line.text));
}

pub fn extract_duty_codes(text: &str) -> Vec<DutyCode> {
    DUTY_CODE_RE
        .find_iter(text)
        .filter_map(|m| match m.as_str() {
            "FLY" => Some(DutyCode::Fly),
            "TVL" => Some(DutyCode::Tvl),
            "LO" => Some(DutyCode::Lo),
            "RDO" => Some(DutyCode::Rdo),
            _ => None,
        })
        .collect()
}

/// Flight designators: 2-letter carrier prefix, optional space, 3-4
/// digits. Normalized by removing internal whitespace. A spaced "LO"
/// prefix is refused - that is the layover duty code sitting next to a
/// 4-digit time, not a carrier.
pub fn extract_flights(text: &str) -> Vec<String> {
    FLIGHT_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|m| !m.starts_with("LO "))
        .map(|m| m.split_whitespace().collect::<String>())
        .collect()
}

/// Generic sector pairing: hyphenated pairs anywhere, plus adjacent
/// 3-letter uppercase tokens where neither side is a weekday or a known
/// non-airport token. Prone to false positives on dense lines; the
/// column-aware strategy compensates when a header row was found.
pub fn extract_sectors_generic(text: &str) -> Vec<String> {
    let mut out = Vec::new();

    for caps in SECTOR_PAIR_RE.captures_iter(text) {
        out.push(format!("{}-{}", &caps[1], &caps[2]));
    }

    for caps in ADJACENT_CODES_RE.captures_iter(text) {
        let (a, b) = (&caps[1], &caps[2]);
        if is_airport_candidate(a) && is_airport_candidate(b) {
            out.push(format!("{}-{}", a, b));
        }
    }

    out
}

/// Column-aware sector extraction: collect the 3-letter uppercase spans
/// whose x falls inside the learned sector column and pair them
/// sequentially. Only applies to lines that carry a flight designator;
/// an odd leftover token is dropped.
pub fn extract_sectors_by_column(line: &Line, bounds: SectorBounds) -> Vec<String> {
    if extract_flights(&line.text).is_empty() {
        return Vec::new();
    }

    let codes: Vec<&str> = line
        .spans
        .iter()
        .filter(|span| bounds.contains(span.x) && IATA_RE.is_match(&span.text))
        .map(|span| span.text.as_str())
        .collect();

    codes
        .chunks_exact(2)
        .map(|pair| format!("{}-{}", pair[0], pair[1]))
        .collect()
}

/// Standalone 4-digit tokens accepted as HHMM times. Hour and minute
/// validation keeps flight-number digits and other 4-digit noise out.
pub fn extract_times(text: &str) -> Vec<String> {
    FOUR_DIGIT_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|t| is_valid_hhmm(t))
        .map(|t| t.to_string())
        .collect()
}

pub fn is_valid_hhmm(token: &str) -> bool {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let hour: u32 = token[..2].parse().unwrap_or(99);
    let minute: u32 = token[2..].parse().unwrap_or(99);
    hour <= 23 && minute <= 59
}

/// Hotel/accommodation codes: AAA9 or AAAA shapes, minus weekday
/// abbreviations and RTP training shapes.
pub fn extract_hotels(text: &str) -> Vec<String> {
    HOTEL_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|h| !h.starts_with("RTP") && !WEEKDAYS.contains(h))
        .map(|h| h.to_string())
        .collect()
}

/// Training codes (RTP4-Day1, RTP4-25_A) and own-accommodation notices
/// (OA 12/13 BNE).
pub fn extract_remarks(text: &str) -> Vec<String> {
    let mut out: Vec<String> = TRAINING_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    out.extend(OWN_ACCOM_RE.find_iter(text).map(|m| m.as_str().to_string()));
    out
}

fn is_airport_candidate(token: &str) -> bool {
    !WEEKDAYS.contains(&token) && !NON_AIRPORT_TOKENS.contains(&token)
}
