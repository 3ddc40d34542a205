pub mod flags;
pub mod outcome;
pub mod windows;

pub use outcome::{AuditResult, DutyRow};
pub use windows::{compute_windows, suggest_fortnight_start, Bucket, PayPeriods, PayWindow};

use crate::model::DutyDay;
use flags::{derive_flags, own_accommodation_dates};

/// Knobs for flag derivation.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Hotel code treated as "own accommodation" on layover days.
    pub own_accom_hotel: String,
}

impl Default for AuditOptions {
    fn default() -> Self {
        AuditOptions {
            own_accom_hotel: "BNEO".to_string(),
        }
    }
}

/// Bucket each duty day into the pay-period windows and derive its
/// audit flags. Duty days whose start date does not parse bucket as
/// Outside; nothing here is fatal.
pub fn audit(duties: &[DutyDay], periods: &PayPeriods, options: &AuditOptions) -> AuditResult {
    let own_accom = own_accommodation_dates(duties, options);

    let rows = duties
        .iter()
        .map(|duty| DutyRow {
            start_date: duty.start_date.clone(),
            bucket: duty
                .date()
                .map_or(Bucket::Outside, |date| periods.bucket(date)),
            duty_codes: duty.duty_codes.clone(),
            flights: duty.flights.clone(),
            sectors: duty.sectors.clone(),
            times: duty.times.clone(),
            hotels: duty.hotels.clone(),
            remarks: duty.remarks.clone(),
            flags: derive_flags(duty, &own_accom),
        })
        .collect();

    AuditResult {
        current: periods.current,
        prev: periods.prev,
        inferred_pay_date: periods.inferred_pay_date,
        pay_delta_days: periods.pay_delta_days,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::flags::Flag;
    use crate::model::DutyCode;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_audit_buckets_and_flags() {
        let duties = vec![
            DutyDay {
                start_date: "07DEC25".into(),
                duty_codes: vec![DutyCode::Fly],
                flights: vec!["VA0916".into()],
                ..Default::default()
            },
            DutyDay {
                start_date: "01DEC25".into(),
                duty_codes: vec![DutyCode::Rdo],
                ..Default::default()
            },
            DutyDay {
                start_date: "01JAN26".into(),
                ..Default::default()
            },
        ];
        let periods = compute_windows(d(2025, 12, 7), None);
        let result = audit(&duties, &periods, &AuditOptions::default());

        assert_eq!(result.rows.len(), 3);
        assert_eq!(result.rows[0].bucket, Bucket::Current);
        assert_eq!(result.rows[0].flags, vec![Flag::Fly]);
        assert_eq!(result.rows[1].bucket, Bucket::Prev);
        assert_eq!(result.rows[1].flags, vec![Flag::Rdo]);
        assert_eq!(result.rows[2].bucket, Bucket::Outside);
    }

    #[test]
    fn test_audit_unparseable_date_is_outside() {
        let duties = vec![DutyDay {
            start_date: "XXJAN26".into(),
            ..Default::default()
        }];
        let periods = compute_windows(d(2025, 12, 7), None);
        let result = audit(&duties, &periods, &AuditOptions::default());
        assert_eq!(result.rows[0].bucket, Bucket::Outside);
    }
}
