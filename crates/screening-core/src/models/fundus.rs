use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// File extensions accepted for fundus uploads, compared case-insensitively.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EyeSide {
    Right,
    Left,
}

impl fmt::Display for EyeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EyeSide::Right => f.write_str("right"),
            EyeSide::Left => f.write_str("left"),
        }
    }
}

/// An uploaded fundus photograph. Only the name and size are kept; the
/// image contents are never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FundusImage {
    pub side: EyeSide,
    pub file_name: String,
    pub size_bytes: u64,
}

impl FundusImage {
    pub fn new(
        side: EyeSide,
        file_name: impl Into<String>,
        size_bytes: u64,
    ) -> Result<Self, CoreError> {
        let file_name = file_name.into();
        if !has_accepted_extension(&file_name) {
            return Err(CoreError::UnsupportedImageType { file_name });
        }
        Ok(Self {
            side,
            file_name,
            size_bytes,
        })
    }
}

pub fn has_accepted_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}
