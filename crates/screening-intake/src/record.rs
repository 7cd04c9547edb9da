use screening_core::models::labs::LabMeasurements;
use screening_core::models::measurement::MeasurementRecord;
use screening_core::models::parameter::Parameter;
use screening_core::models::patient::PatientDetails;

/// Assemble the full 12-parameter record from the two intake steps.
///
/// Alcohol consumption is the numeric drinks/day from the lab step; the
/// yes/no alcoholic status stays on the patient details.
pub fn build_record(details: &PatientDetails, labs: &LabMeasurements) -> MeasurementRecord {
    MeasurementRecord::new()
        .with(Parameter::Age, details.age)
        .with(Parameter::Gender, details.gender.label())
        .with(Parameter::Bmi, labs.bmi)
        .with(Parameter::SmokingStatus, details.smoking_status.label())
        .with(Parameter::AlcoholConsumption, labs.alcohol_consumption)
        .with(Parameter::BloodPressure, labs.blood_pressure)
        .with(Parameter::FastingBloodSugar, labs.fasting_blood_sugar)
        .with(Parameter::LdlC, labs.ldl_c)
        .with(Parameter::HsCrp, labs.hs_crp)
        .with(Parameter::Egfr, labs.egfr)
        .with(Parameter::Alt, labs.alt)
        .with(Parameter::Ast, labs.ast)
}
