use serde::{Deserialize, Serialize};

/// Motion types offered by the list filter, as stored by the backend.
pub const MOTION_TYPE_OPTIONS: &[&str] = &[
    "motion to dismiss denied",
    "motion for summary judgment denied",
];

/// One editable filter on the motion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Court,
    Judge,
    MotionType,
    StartDate,
    EndDate,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Court,
        FilterField::Judge,
        FilterField::MotionType,
        FilterField::StartDate,
        FilterField::EndDate,
    ];

    /// Name used by the filter form.
    pub fn form_name(self) -> &'static str {
        match self {
            FilterField::Court => "court",
            FilterField::Judge => "judge",
            FilterField::MotionType => "motionType",
            FilterField::StartDate => "startDate",
            FilterField::EndDate => "endDate",
        }
    }

    /// Query parameter name expected by `GET /motions/filter`.
    pub fn param_name(self) -> &'static str {
        match self {
            FilterField::Court => "court",
            FilterField::Judge => "judge",
            FilterField::MotionType => "motion_type",
            FilterField::StartDate => "start_date",
            FilterField::EndDate => "end_date",
        }
    }
}

/// Current values of the motion list filters. Empty means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub court: String,
    pub judge: String,
    pub motion_type: String,
    pub start_date: String,
    pub end_date: String,
}

impl FilterState {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Court => &self.court,
            FilterField::Judge => &self.judge,
            FilterField::MotionType => &self.motion_type,
            FilterField::StartDate => &self.start_date,
            FilterField::EndDate => &self.end_date,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::Court => &mut self.court,
            FilterField::Judge => &mut self.judge,
            FilterField::MotionType => &mut self.motion_type,
            FilterField::StartDate => &mut self.start_date,
            FilterField::EndDate => &mut self.end_date,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Non-empty filters as `(server name, value)` pairs. Values are passed
    /// through untouched; whitespace is not trimmed.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        FilterField::ALL
            .iter()
            .filter(|f| !self.get(**f).is_empty())
            .map(|f| (f.param_name(), self.get(*f).to_string()))
            .collect()
    }
}
