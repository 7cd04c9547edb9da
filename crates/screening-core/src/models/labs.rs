use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lab values entered at the report step.
///
/// Units: BMI kg/m², blood pressure mmHg (systolic), fasting blood sugar
/// mg/dL, LDL-C mg/dL, hs-CRP mg/L, eGFR mL/min/1.73m², ALT and AST U/L,
/// alcohol consumption drinks/day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabMeasurements {
    pub bmi: f64,
    pub blood_pressure: f64,
    pub fasting_blood_sugar: f64,
    pub ldl_c: f64,
    pub hs_crp: f64,
    pub egfr: f64,
    pub alt: f64,
    pub ast: f64,
    pub alcohol_consumption: f64,
}
