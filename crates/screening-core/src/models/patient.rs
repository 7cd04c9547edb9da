use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Demographic details collected in the first intake step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientDetails {
    pub name: String,
    /// Whole years, 0–120.
    pub age: u32,
    pub gender: Gender,
    pub alcoholic_status: YesNo,
    pub smoking_status: YesNo,
    #[serde(default)]
    pub medical_history: String,
    #[serde(default)]
    pub family_history: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn label(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}
