use screening_core::models::measurement::{MeasurementRecord, MeasurementValue};
use screening_core::models::parameter::Parameter;

use crate::error::RuleError;

/// Parameters the rules compare against, in the order they are read.
pub const REQUIRED_PARAMETERS: [Parameter; 9] = [
    Parameter::BloodPressure,
    Parameter::LdlC,
    Parameter::HsCrp,
    Parameter::Egfr,
    Parameter::FastingBloodSugar,
    Parameter::Alt,
    Parameter::Ast,
    Parameter::Bmi,
    Parameter::AlcoholConsumption,
];

/// The numeric values the rules read, pulled out of a record once so that
/// each predicate is a plain comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabPanel {
    pub blood_pressure: f64,
    pub ldl_c: f64,
    pub hs_crp: f64,
    pub egfr: f64,
    pub fasting_blood_sugar: f64,
    pub alt: f64,
    pub ast: f64,
    pub bmi: f64,
    pub alcohol_consumption: f64,
}

impl LabPanel {
    /// Extract every required value. The first absent or non-numeric field
    /// (in [`REQUIRED_PARAMETERS`] order) is reported.
    pub fn from_record(record: &MeasurementRecord) -> Result<Self, RuleError> {
        let get = |parameter| numeric(record, parameter);
        Ok(Self {
            blood_pressure: get(Parameter::BloodPressure)?,
            ldl_c: get(Parameter::LdlC)?,
            hs_crp: get(Parameter::HsCrp)?,
            egfr: get(Parameter::Egfr)?,
            fasting_blood_sugar: get(Parameter::FastingBloodSugar)?,
            alt: get(Parameter::Alt)?,
            ast: get(Parameter::Ast)?,
            bmi: get(Parameter::Bmi)?,
            alcohol_consumption: get(Parameter::AlcoholConsumption)?,
        })
    }
}

fn numeric(record: &MeasurementRecord, parameter: Parameter) -> Result<f64, RuleError> {
    match record.get(parameter) {
        None => Err(RuleError::MissingField(parameter)),
        Some(MeasurementValue::Numeric(n)) if n.is_finite() => Ok(*n),
        Some(other) => Err(RuleError::MalformedField {
            parameter,
            value: other.to_string(),
        }),
    }
}
