use screening_intake::workflow::CompletedIntake;
use tera::{Context, Tera};

use crate::context::ReportContext;
use crate::error::ReportError;

/// The built-in report layout (Markdown-ish plain text).
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

const DEFAULT_TEMPLATE_NAME: &str = "report.md";

/// Render a finished intake with the built-in template.
pub fn render_report(intake: &CompletedIntake) -> Result<String, ReportError> {
    render_template(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, intake)
}

/// Render a finished intake with a caller-supplied Tera template.
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// fields of [`ReportContext`] become the template variables. Names ending
/// in `.html` get Tera's HTML autoescaping.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    intake: &CompletedIntake,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let context = Context::from_serialize(ReportContext::from_intake(intake))
        .map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(
        template = template_name,
        session = %intake.session.id,
        bytes = rendered.len(),
        "report rendered"
    );
    Ok(rendered)
}

/// The diagnoses alone, as pretty-printed JSON.
pub fn render_json(intake: &CompletedIntake) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&intake.diagnoses)?)
}
