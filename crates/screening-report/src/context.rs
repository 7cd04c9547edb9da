use screening_core::models::diagnosis::Diagnosis;
use screening_core::models::parameter::Parameter;
use screening_intake::workflow::CompletedIntake;
use screening_rules::reference::{ReferenceRange, normal_ranges};
use serde::Serialize;

pub const IMAGE_QUALITY_NOTE: &str = "Image quality is high and perfect for evaluation.";

pub const DISCLAIMER: &str = "This is a demo app, purely for demonstration purposes, \
not for any type of medical, clinical, or research use.";

/// Template-facing view of a finished intake. Every field is addressable
/// by name in a report template.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub session_id: String,
    pub generated_at: String,
    pub patient: PatientView,
    pub right_image: String,
    pub left_image: String,
    pub image_quality_note: &'static str,
    pub measurements: Vec<MeasurementView>,
    pub diagnoses: Vec<Diagnosis>,
    pub normal_ranges: &'static [ReferenceRange],
    pub disclaimer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientView {
    pub name: String,
    pub age: u32,
    pub gender: &'static str,
    pub alcoholic_status: &'static str,
    pub smoking_status: &'static str,
    pub medical_history: String,
    pub family_history: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeasurementView {
    pub label: &'static str,
    pub value: String,
}

impl ReportContext {
    pub fn from_intake(intake: &CompletedIntake) -> Self {
        let details = &intake.details;

        // Demographics are already listed under patient details.
        let measurements = intake
            .record
            .iter()
            .filter(|(p, _)| {
                !matches!(
                    p,
                    Parameter::Age | Parameter::Gender | Parameter::SmokingStatus
                )
            })
            .map(|(p, v)| MeasurementView {
                label: p.label(),
                value: v.to_string(),
            })
            .collect();

        Self {
            session_id: intake.session.id.to_string(),
            generated_at: intake.generated_at.to_string(),
            patient: PatientView {
                name: details.name.clone(),
                age: details.age,
                gender: details.gender.label(),
                alcoholic_status: details.alcoholic_status.label(),
                smoking_status: details.smoking_status.label(),
                medical_history: details.medical_history.clone(),
                family_history: details.family_history.clone(),
            },
            right_image: intake.right_image.file_name.clone(),
            left_image: intake.left_image.file_name.clone(),
            image_quality_note: IMAGE_QUALITY_NOTE,
            measurements,
            diagnoses: intake.diagnoses.as_slice().to_vec(),
            normal_ranges: normal_ranges(),
            disclaimer: DISCLAIMER,
        }
    }
}
