use std::path::Path;

use screening_core::models::fundus::EyeSide;
use screening_intake::workflow::IntakeWorkflow;
use screening_report::render::{render_json, render_report, render_template};
use screening_rules::all_rules;
use screening_rules::reference::normal_ranges;

use crate::config::{self, ScreeningConfig};
use crate::intake_file::{load_intake, upload};

/// Drive an intake file through every workflow step and render the result.
///
/// `template` wins over the configured template; with neither, the built-in
/// layout is used.
pub fn evaluate(
    intake_path: &Path,
    template: Option<&Path>,
    json: bool,
    config: &ScreeningConfig,
) -> eyre::Result<String> {
    let intake = load_intake(intake_path)?;
    let base_dir = intake_path.parent().unwrap_or_else(|| Path::new("."));

    let right = upload(EyeSide::Right, intake.right_image.as_deref(), base_dir)?;
    let left = upload(EyeSide::Left, intake.left_image.as_deref(), base_dir)?;

    let mut workflow = IntakeWorkflow::new();
    workflow.submit_details(intake.details)?;
    workflow.generate_report(right, left, intake.labs)?;
    let completed = workflow
        .report()
        .ok_or_else(|| eyre::eyre!("intake finished without a report"))?;

    if json {
        return Ok(render_json(completed)?);
    }

    match template.or(config.report_template.as_deref()) {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| eyre::eyre!("failed to read template {}: {e}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom".to_string());
            Ok(render_template(&name, &content, completed)?)
        }
        None => Ok(render_report(completed)?),
    }
}

pub fn ranges() -> String {
    let mut out = String::from("Normal Ranges for Parameters\n");
    for range in normal_ranges() {
        out.push_str(&format!("  {}: {}\n", range.parameter, range.normal_range));
    }
    out
}

pub fn rules() -> String {
    let mut out = String::new();
    for (i, rule) in all_rules().iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. [{:?}] {} ({})\n",
            i + 1,
            rule.group(),
            rule.condition(),
            rule.id()
        ));
    }
    out
}

pub fn show_config(config: &ScreeningConfig) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Create a default config at `path` unless one is already there.
pub fn init_config(path: &Path) -> eyre::Result<String> {
    if path.exists() {
        return Ok(format!("config already exists at {}", path.display()));
    }
    config::save_config(path, &ScreeningConfig::default())?;
    Ok(format!("wrote default config to {}", path.display()))
}
