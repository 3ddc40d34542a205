use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One 14-day pay window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PayWindow {
    pub fn starting(start: NaiveDate) -> Self {
        PayWindow {
            start,
            end: start + Days::new(13),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl fmt::Display for PayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// The computed posting windows plus the inferred pay run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PayPeriods {
    pub current: PayWindow,
    pub prev: PayWindow,
    /// current.end + 4 days, the observed organizational pay-run offset.
    pub inferred_pay_date: NaiveDate,
    /// Signed day difference between an explicitly supplied pay date and
    /// the inferred one. Informational only; never alters the windows.
    pub pay_delta_days: Option<i64>,
}

/// Compute CURRENT/PREVIOUS fortnight windows from a fortnight start.
pub fn compute_windows(fortnight_start: NaiveDate, pay_date: Option<NaiveDate>) -> PayPeriods {
    let current = PayWindow::starting(fortnight_start);
    let prev = PayWindow::starting(fortnight_start - Days::new(14));
    let inferred_pay_date = current.end + Days::new(4);
    let pay_delta_days = pay_date.map(|d| (d - inferred_pay_date).num_days());
    PayPeriods {
        current,
        prev,
        inferred_pay_date,
        pay_delta_days,
    }
}

/// Reverse inference: from a pay date alone, suggest the fortnight
/// start that would have produced it (pay date - 4 - 13 days). Used to
/// pre-fill an empty input, never to overwrite one.
pub fn suggest_fortnight_start(pay_date: NaiveDate) -> NaiveDate {
    pay_date - Days::new(17)
}

/// Which posting window a duty day falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bucket {
    #[serde(rename = "CURRENT")]
    Current,
    #[serde(rename = "PREV")]
    Prev,
    #[serde(rename = "")]
    Outside,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Current => write!(f, "CURRENT"),
            Bucket::Prev => write!(f, "PREV"),
            Bucket::Outside => Ok(()),
        }
    }
}

impl PayPeriods {
    pub fn bucket(&self, date: NaiveDate) -> Bucket {
        if self.current.contains(date) {
            Bucket::Current
        } else if self.prev.contains(date) {
            Bucket::Prev
        } else {
            Bucket::Outside
        }
    }
}
