use screening_core::models::parameter::Parameter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("missing required field: {0}")]
    MissingField(Parameter),

    #[error("field '{parameter}' must be numeric, got '{value}'")]
    MalformedField { parameter: Parameter, value: String },
}
