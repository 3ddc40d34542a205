use crate::audit::AuditOptions;
use crate::model::{DutyCode, DutyDay};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

static OWN_ACCOM_DAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bOA\s+(\d{1,2})/\d{1,2}\s+[A-Z]{3}\b").unwrap());

/// Audit flags, in their fixed display order. Evaluated independently,
/// not mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "FLY")]
    Fly,
    #[serde(rename = "LO")]
    Lo,
    #[serde(rename = "TVL")]
    Tvl,
    #[serde(rename = "RDO")]
    Rdo,
    #[serde(rename = "TRN")]
    Trn,
    #[serde(rename = "OA")]
    Oa,
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Flag::Fly => "FLY",
            Flag::Lo => "LO",
            Flag::Tvl => "TVL",
            Flag::Rdo => "RDO",
            Flag::Trn => "TRN",
            Flag::Oa => "OA",
        };
        write!(f, "{s}")
    }
}

/// Collect the dates on which the crew member used their own
/// accommodation. Union of two derivations:
/// 1. every "OA d1/d2 AAA" remark contributes the date formed by
///    substituting d1 into the remark's duty day;
/// 2. every layover day resting at the designated own-accommodation
///    hotel code contributes its own start date.
pub fn own_accommodation_dates(duties: &[DutyDay], options: &AuditOptions) -> BTreeSet<NaiveDate> {
    let mut dates = BTreeSet::new();

    for duty in duties {
        let Some(base) = duty.date() else { continue };

        for remark in &duty.remarks {
            if let Some(caps) = OWN_ACCOM_DAYS_RE.captures(remark) {
                if let Some(date) = caps[1]
                    .parse::<u32>()
                    .ok()
                    .and_then(|day| substitute_day(base, day))
                {
                    dates.insert(date);
                }
            }
        }

        if duty.duty_codes.contains(&DutyCode::Lo)
            && duty.hotels.iter().any(|h| h == &options.own_accom_hotel)
        {
            dates.insert(base);
        }
    }

    dates
}

/// Substitute a day-of-month into the base date's month, rolling to the
/// adjacent month when that lands closer to the base date. Handles OA
/// notices that straddle a month boundary (base 31JAN26, d1=1 means
/// 01FEB26, not 01JAN26). Ties prefer the base month.
fn substitute_day(base: NaiveDate, day: u32) -> Option<NaiveDate> {
    let candidates = [0i32, -1, 1].into_iter().filter_map(|offset| {
        let month0 = base.month0() as i32 + offset;
        let (year, month0) = match month0 {
            -1 => (base.year() - 1, 11),
            12 => (base.year() + 1, 0),
            m => (base.year(), m),
        };
        NaiveDate::from_ymd_opt(year, month0 as u32 + 1, day)
    });

    candidates.min_by_key(|candidate| {
        let distance = (*candidate - base).num_days().abs();
        // same-month candidate wins ties via the second key
        (distance, candidate.month() != base.month())
    })
}

/// Derive the audit flags for one duty day, in display order.
pub fn derive_flags(duty: &DutyDay, own_accom_dates: &BTreeSet<NaiveDate>) -> Vec<Flag> {
    let mut flags = Vec::new();

    if !duty.flights.is_empty() || duty.duty_codes.contains(&DutyCode::Fly) {
        flags.push(Flag::Fly);
    }
    if duty.duty_codes.contains(&DutyCode::Lo) {
        flags.push(Flag::Lo);
    }
    if duty.duty_codes.contains(&DutyCode::Tvl) {
        flags.push(Flag::Tvl);
    }
    if duty.duty_codes.contains(&DutyCode::Rdo) {
        flags.push(Flag::Rdo);
    }
    if duty.remarks.iter().any(|r| r.starts_with("RTP")) {
        flags.push(Flag::Trn);
    }
    if duty.date().is_some_and(|d| own_accom_dates.contains(&d)) {
        flags.push(Flag::Oa);
    }

    flags
}
