use screening_core::models::fundus::EyeSide;
use screening_rules::bounds::ValidationError;
use screening_rules::error::RuleError;
use thiserror::Error;

use crate::workflow::IntakeStep;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("cannot {action} while {step}")]
    InvalidTransition {
        step: IntakeStep,
        action: &'static str,
    },

    #[error("{0} fundus image was not uploaded")]
    MissingImage(EyeSide),

    #[error("{side} fundus image '{file_name}' is not a png, jpg or jpeg")]
    UnsupportedImage { side: EyeSide, file_name: String },

    #[error("expected the {expected} fundus image, got the {found} one")]
    ImageSideMismatch { expected: EyeSide, found: EyeSide },

    #[error("intake values out of range: {}", join_messages(.0))]
    OutOfRange(Vec<ValidationError>),

    #[error("evaluation failed: {0}")]
    Evaluation(#[from] RuleError),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
