use std::fmt;

use screening_core::models::diagnosis::DiagnosisResult;
use screening_core::models::fundus::{EyeSide, FundusImage, has_accepted_extension};
use screening_core::models::labs::LabMeasurements;
use screening_core::models::measurement::MeasurementRecord;
use screening_core::models::parameter::Parameter;
use screening_core::models::patient::PatientDetails;
use screening_core::models::session::Session;
use screening_rules::bounds::validate_record;
use screening_rules::evaluate_conditions;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::IntakeError;
use crate::record::build_record;

/// Which step the intake is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IntakeStep {
    CollectingDetails,
    UploadingImages,
    ReportReady,
}

impl fmt::Display for IntakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeStep::CollectingDetails => f.write_str("collecting details"),
            IntakeStep::UploadingImages => f.write_str("uploading images"),
            IntakeStep::ReportReady => f.write_str("report is ready"),
        }
    }
}

/// Everything gathered by a finished intake, plus its evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompletedIntake {
    pub session: Session,
    pub details: PatientDetails,
    pub right_image: FundusImage,
    pub left_image: FundusImage,
    pub record: MeasurementRecord,
    pub diagnoses: DiagnosisResult,
    pub generated_at: jiff::Timestamp,
}

#[derive(Debug, Clone)]
enum IntakeState {
    CollectingDetails,
    UploadingImages { details: PatientDetails },
    ReportReady(Box<CompletedIntake>),
}

/// One patient intake. Every step either advances the state or leaves it
/// untouched and returns an error.
#[derive(Debug, Clone)]
pub struct IntakeWorkflow {
    session: Session,
    state: IntakeState,
}

impl Default for IntakeWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeWorkflow {
    /// Start a new record with a fresh session identifier.
    pub fn new() -> Self {
        let session = Session::start();
        tracing::info!(session = %session.id, "intake started");
        Self {
            session,
            state: IntakeState::CollectingDetails,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn step(&self) -> IntakeStep {
        match self.state {
            IntakeState::CollectingDetails => IntakeStep::CollectingDetails,
            IntakeState::UploadingImages { .. } => IntakeStep::UploadingImages,
            IntakeState::ReportReady(_) => IntakeStep::ReportReady,
        }
    }

    /// Details submitted so far, if past the first step.
    pub fn details(&self) -> Option<&PatientDetails> {
        match &self.state {
            IntakeState::CollectingDetails => None,
            IntakeState::UploadingImages { details } => Some(details),
            IntakeState::ReportReady(completed) => Some(&completed.details),
        }
    }

    pub fn report(&self) -> Option<&CompletedIntake> {
        match &self.state {
            IntakeState::ReportReady(completed) => Some(completed),
            _ => None,
        }
    }

    /// Step 1: accept the patient's details and move on to the uploads.
    pub fn submit_details(&mut self, details: PatientDetails) -> Result<(), IntakeError> {
        self.expect_step(IntakeStep::CollectingDetails, "submit details")?;

        let age = MeasurementRecord::new().with(Parameter::Age, details.age);
        let errors = validate_record(&age);
        if !errors.is_empty() {
            tracing::warn!(
                session = %self.session.id,
                age = details.age,
                "patient details rejected"
            );
            return Err(IntakeError::OutOfRange(errors));
        }

        tracing::info!(session = %self.session.id, "patient details submitted");
        self.state = IntakeState::UploadingImages { details };
        Ok(())
    }

    /// Step 2: check both uploads, evaluate the lab values and finish. The
    /// result is available from [`IntakeWorkflow::report`] afterwards.
    ///
    /// The images are only checked for presence, side and file extension;
    /// their contents are never read.
    pub fn generate_report(
        &mut self,
        right_image: Option<FundusImage>,
        left_image: Option<FundusImage>,
        labs: LabMeasurements,
    ) -> Result<(), IntakeError> {
        let IntakeState::UploadingImages { details } = &self.state else {
            return Err(IntakeError::InvalidTransition {
                step: self.step(),
                action: "generate a report",
            });
        };

        let right_image = require_image(right_image, EyeSide::Right)?;
        let left_image = require_image(left_image, EyeSide::Left)?;

        let record = build_record(details, &labs);
        let errors = validate_record(&record);
        if !errors.is_empty() {
            tracing::warn!(
                session = %self.session.id,
                violations = errors.len(),
                "lab values rejected"
            );
            return Err(IntakeError::OutOfRange(errors));
        }

        let diagnoses = evaluate_conditions(&record)?;
        tracing::info!(
            session = %self.session.id,
            conditions = diagnoses.len(),
            "report generated"
        );

        let completed = CompletedIntake {
            session: self.session.clone(),
            details: details.clone(),
            right_image,
            left_image,
            record,
            diagnoses,
            generated_at: jiff::Timestamp::now(),
        };
        self.state = IntakeState::ReportReady(Box::new(completed));
        Ok(())
    }

    /// Discard whatever has been entered and start a new record.
    pub fn restart(&mut self) {
        tracing::info!(previous = %self.session.id, "intake restarted");
        *self = Self::new();
    }

    fn expect_step(&self, expected: IntakeStep, action: &'static str) -> Result<(), IntakeError> {
        let step = self.step();
        if step == expected {
            Ok(())
        } else {
            Err(IntakeError::InvalidTransition { step, action })
        }
    }
}

fn require_image(image: Option<FundusImage>, side: EyeSide) -> Result<FundusImage, IntakeError> {
    let image = image.ok_or(IntakeError::MissingImage(side))?;
    if image.side != side {
        return Err(IntakeError::ImageSideMismatch {
            expected: side,
            found: image.side,
        });
    }
    // Fields are public, so an image may not have come through FundusImage::new.
    if !has_accepted_extension(&image.file_name) {
        tracing::warn!(%side, file_name = %image.file_name, "fundus image rejected");
        return Err(IntakeError::UnsupportedImage {
            side,
            file_name: image.file_name,
        });
    }
    Ok(image)
}
