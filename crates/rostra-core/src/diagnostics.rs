use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnSeverity {
    Important,
    Info,
}

/// A non-fatal condition surfaced to the caller instead of thrown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseWarning {
    pub reason: String,
    pub severity: WarnSeverity,
}

impl ParseWarning {
    pub fn important(reason: impl Into<String>) -> Self {
        ParseWarning {
            reason: reason.into(),
            severity: WarnSeverity::Important,
        }
    }

    pub fn info(reason: impl Into<String>) -> Self {
        ParseWarning {
            reason: reason.into(),
            severity: WarnSeverity::Info,
        }
    }
}

/// Debug payload accompanying a parse: how much was read, what was
/// learned, what degraded, and which lines were dropped as non-data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseDiagnostics {
    pub page_count: usize,
    pub line_count: usize,
    /// Learned sector column (left, right), when a header row was found.
    pub sector_column: Option<(f32, f32)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParseWarning>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_lines: Vec<String>,
}
