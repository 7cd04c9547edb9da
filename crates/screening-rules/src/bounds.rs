//! Numeric bounds the intake layer enforces before evaluation.
//!
//! The evaluator never consults these; they guard the values a caller may
//! put into a record in the first place.

use screening_core::models::measurement::{MeasurementRecord, MeasurementValue};
use screening_core::models::parameter::Parameter;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Inclusive range with an optional step (1.0 for whole-number inputs).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ParameterRange {
    pub const fn whole(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: Some(1.0),
        }
    }

    pub const fn continuous(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if !(self.min..=self.max).contains(&value) {
            return false;
        }
        if let Some(step) = self.step {
            let remainder = (value - self.min) % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntakeBound {
    pub parameter: Parameter,
    pub range: ParameterRange,
    pub unit: &'static str,
}

const INTAKE_BOUNDS: [IntakeBound; 10] = [
    bound(Parameter::Age, ParameterRange::whole(0.0, 120.0), "years"),
    bound(Parameter::Bmi, ParameterRange::continuous(0.0, 100.0), "kg/m²"),
    bound(Parameter::BloodPressure, ParameterRange::whole(0.0, 300.0), "mmHg"),
    bound(Parameter::FastingBloodSugar, ParameterRange::whole(0.0, 500.0), "mg/dL"),
    bound(Parameter::LdlC, ParameterRange::whole(0.0, 300.0), "mg/dL"),
    bound(Parameter::HsCrp, ParameterRange::continuous(0.0, 20.0), "mg/L"),
    bound(Parameter::Egfr, ParameterRange::whole(0.0, 200.0), "mL/min/1.73m²"),
    bound(Parameter::Alt, ParameterRange::whole(0.0, 500.0), "U/L"),
    bound(Parameter::Ast, ParameterRange::whole(0.0, 500.0), "U/L"),
    bound(Parameter::AlcoholConsumption, ParameterRange::continuous(0.0, 50.0), "drinks/day"),
];

const fn bound(parameter: Parameter, range: ParameterRange, unit: &'static str) -> IntakeBound {
    IntakeBound {
        parameter,
        range,
        unit,
    }
}

pub fn intake_bounds() -> &'static [IntakeBound] {
    &INTAKE_BOUNDS
}

pub fn bound_for(parameter: Parameter) -> Option<&'static IntakeBound> {
    INTAKE_BOUNDS.iter().find(|b| b.parameter == parameter)
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub parameter: Parameter,
    pub value: f64,
    pub expected_range: ParameterRange,
    pub message: String,
}

/// Check every numeric value in `record` against its intake bound.
///
/// Absent parameters and categorical values are skipped; those are the
/// evaluator's concern.
pub fn validate_record(record: &MeasurementRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for bound in intake_bounds() {
        if let Some(MeasurementValue::Numeric(value)) = record.get(bound.parameter)
            && !bound.range.contains(*value)
        {
            errors.push(ValidationError {
                parameter: bound.parameter,
                value: *value,
                expected_range: bound.range,
                message: out_of_range_message(bound, *value),
            });
        }
    }
    errors
}

fn out_of_range_message(bound: &IntakeBound, value: f64) -> String {
    let range = bound.range;
    if range.step.is_some() && (range.min..=range.max).contains(&value) {
        format!(
            "{} value {} must be a whole number of {}",
            bound.parameter, value, bound.unit,
        )
    } else {
        format!(
            "{} value {} is outside range [{}, {}] {}",
            bound.parameter, value, range.min, range.max, bound.unit,
        )
    }
}
