use crate::audit::flags::Flag;
use crate::audit::windows::{Bucket, PayWindow};
use crate::model::DutyCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display-oriented projection of one duty day: the extracted fields
/// plus its posting-window bucket and derived audit flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyRow {
    pub start_date: String,
    pub bucket: Bucket,
    pub duty_codes: Vec<DutyCode>,
    pub flights: Vec<String>,
    pub sectors: Vec<String>,
    pub times: Vec<String>,
    pub hotels: Vec<String>,
    pub remarks: Vec<String>,
    pub flags: Vec<Flag>,
}

/// Result of auditing one capture against a pay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub current: PayWindow,
    pub prev: PayWindow,
    pub inferred_pay_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_delta_days: Option<i64>,
    pub rows: Vec<DutyRow>,
}
