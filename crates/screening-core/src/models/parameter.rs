use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The closed set of parameters an intake collects.
///
/// Serialized under the display label (e.g. `"LDL-C"`), which is also the
/// key used by the measurement record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Parameter {
    #[serde(rename = "Age")]
    Age,
    #[serde(rename = "Gender")]
    Gender,
    #[serde(rename = "BMI")]
    Bmi,
    #[serde(rename = "Smoking Status")]
    SmokingStatus,
    #[serde(rename = "Alcohol Consumption")]
    AlcoholConsumption,
    #[serde(rename = "Blood Pressure")]
    BloodPressure,
    #[serde(rename = "Fasting Blood Sugar")]
    FastingBloodSugar,
    #[serde(rename = "LDL-C")]
    LdlC,
    #[serde(rename = "hs-CRP")]
    HsCrp,
    #[serde(rename = "eGFR")]
    Egfr,
    #[serde(rename = "ALT")]
    Alt,
    #[serde(rename = "AST")]
    Ast,
}

impl Parameter {
    /// Every parameter, in intake order.
    pub const ALL: [Parameter; 12] = [
        Parameter::Age,
        Parameter::Gender,
        Parameter::Bmi,
        Parameter::SmokingStatus,
        Parameter::AlcoholConsumption,
        Parameter::BloodPressure,
        Parameter::FastingBloodSugar,
        Parameter::LdlC,
        Parameter::HsCrp,
        Parameter::Egfr,
        Parameter::Alt,
        Parameter::Ast,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Age => "Age",
            Parameter::Gender => "Gender",
            Parameter::Bmi => "BMI",
            Parameter::SmokingStatus => "Smoking Status",
            Parameter::AlcoholConsumption => "Alcohol Consumption",
            Parameter::BloodPressure => "Blood Pressure",
            Parameter::FastingBloodSugar => "Fasting Blood Sugar",
            Parameter::LdlC => "LDL-C",
            Parameter::HsCrp => "hs-CRP",
            Parameter::Egfr => "eGFR",
            Parameter::Alt => "ALT",
            Parameter::Ast => "AST",
        }
    }

    /// Whether the parameter carries a categorical answer rather than a number.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Parameter::Gender | Parameter::SmokingStatus)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Parameter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| CoreError::UnknownParameter(s.to_string()))
    }
}
