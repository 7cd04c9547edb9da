use screening_core::models::parameter::Parameter;
use serde::Serialize;

/// Human-readable normal range for a parameter. Constant reference data,
/// printed beneath the diagnosis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceRange {
    pub parameter: Parameter,
    pub normal_range: &'static str,
}

const NORMAL_RANGES: [ReferenceRange; 9] = [
    range(Parameter::BloodPressure, "< 120/80 mmHg"),
    range(Parameter::FastingBloodSugar, "70–99 mg/dL"),
    range(Parameter::LdlC, "< 100 mg/dL"),
    range(Parameter::HsCrp, "< 1 mg/L"),
    range(Parameter::Egfr, "≥ 90 mL/min/1.73m²"),
    range(Parameter::Alt, "7–56 U/L"),
    range(Parameter::Ast, "10–40 U/L"),
    range(Parameter::Bmi, "18.5–24.9 kg/m²"),
    range(Parameter::AlcoholConsumption, "≤ 2 drinks/day"),
];

const fn range(parameter: Parameter, normal_range: &'static str) -> ReferenceRange {
    ReferenceRange {
        parameter,
        normal_range,
    }
}

/// The reference table in display order.
pub fn normal_ranges() -> &'static [ReferenceRange] {
    &NORMAL_RANGES
}

pub fn normal_range_for(parameter: Parameter) -> Option<&'static str> {
    NORMAL_RANGES
        .iter()
        .find(|r| r.parameter == parameter)
        .map(|r| r.normal_range)
}
