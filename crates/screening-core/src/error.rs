use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("unsupported image type for '{file_name}' (expected png, jpg or jpeg)")]
    UnsupportedImageType { file_name: String },

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
