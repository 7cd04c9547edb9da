use std::path::{Path, PathBuf};

use screening_core::models::fundus::{EyeSide, FundusImage};
use screening_core::models::labs::LabMeasurements;
use screening_core::models::patient::PatientDetails;
use serde::Deserialize;

/// On-disk description of one intake: what a user would have entered
/// across the wizard steps. Image paths resolve relative to the file.
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeFile {
    pub details: PatientDetails,
    #[serde(default)]
    pub right_image: Option<PathBuf>,
    #[serde(default)]
    pub left_image: Option<PathBuf>,
    pub labs: LabMeasurements,
}

pub fn load_intake(path: &Path) -> eyre::Result<IntakeFile> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read intake file {}: {e}", path.display()))?;
    let intake: IntakeFile = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid intake file {}: {e}", path.display()))?;
    Ok(intake)
}

/// Turn an image path into an upload.
///
/// A path that is unset or does not exist yields `None`, which the workflow
/// reports as a missing upload. Only the name and size are read.
pub fn upload(
    side: EyeSide,
    path: Option<&Path>,
    base_dir: &Path,
) -> eyre::Result<Option<FundusImage>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let resolved = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    };

    let metadata = match std::fs::metadata(&resolved) {
        Ok(m) if m.is_file() => m,
        _ => {
            tracing::warn!(%side, path = %resolved.display(), "fundus image not found");
            return Ok(None);
        }
    };

    let file_name = resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Some(FundusImage::new(side, file_name, metadata.len())?))
}
