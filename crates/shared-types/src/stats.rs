use serde::{Deserialize, Serialize};

use crate::motion::string_or_null;

/// One bucket of a grouped count. The backend names the label after the
/// grouping dimension (`court`, `judge`, `motion_type`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LabeledCount {
    #[serde(
        default,
        alias = "court",
        alias = "judge",
        alias = "motion_type",
        deserialize_with = "string_or_null"
    )]
    pub label: String,
    #[serde(default)]
    pub count: u64,
}

/// Motions per order date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TrendPoint {
    #[serde(default, deserialize_with = "string_or_null")]
    pub date: String,
    #[serde(default)]
    pub count: u64,
}

/// Aggregate statistics returned by `GET /stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Stats {
    #[serde(default)]
    pub total_motions: u64,
    #[serde(default)]
    pub by_court: Vec<LabeledCount>,
    #[serde(default)]
    pub by_judge: Vec<LabeledCount>,
    #[serde(default)]
    pub by_motion_type: Vec<LabeledCount>,
    #[serde(default)]
    pub recent_trend: Vec<TrendPoint>,
}

/// How many judges the analytics bar chart shows.
pub const TOP_JUDGES: usize = 10;

impl Stats {
    pub fn court_count(&self) -> usize {
        self.by_court.len()
    }

    pub fn judge_count(&self) -> usize {
        self.by_judge.len()
    }

    pub fn motion_type_count(&self) -> usize {
        self.by_motion_type.len()
    }

    /// Judges in server order, cut to the first `TOP_JUDGES`.
    pub fn top_judges(&self) -> &[LabeledCount] {
        let end = self.by_judge.len().min(TOP_JUDGES);
        &self.by_judge[..end]
    }
}

/// One row of the law-firm ranking, pre-sorted by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LawFirmCount {
    #[serde(default, deserialize_with = "string_or_null")]
    pub law_firm: String,
    #[serde(default)]
    pub count: u64,
}
