//! screening-rules
//!
//! The condition evaluator: a fixed, ordered set of threshold rules over a
//! measurement record. Pure data and pure functions, no I/O. Also holds the
//! normal-range reference table and the intake bounds.

pub mod bounds;
pub mod error;
pub mod panel;
pub mod reference;
pub mod rules;

use screening_core::models::diagnosis::{Diagnosis, DiagnosisResult};
use screening_core::models::measurement::MeasurementRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use error::RuleError;
use panel::LabPanel;

/// Organ system a rule belongs to. Evaluation order comes from
/// [`all_rules`], which lists heart, then kidney, then liver rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OrganGroup {
    Heart,
    Kidney,
    Liver,
}

/// Trait implemented by each threshold rule.
pub trait ConditionRule: Send + Sync {
    /// Unique identifier (e.g., "hypertension", "ckd_stage_2").
    fn id(&self) -> &str;

    fn group(&self) -> OrganGroup;

    /// Condition label reported when the rule fires.
    fn condition(&self) -> &str;

    /// Fixed explanation reported alongside the label.
    fn explanation(&self) -> &str;

    /// Whether the rule's predicate holds for the given values.
    fn matches(&self, panel: &LabPanel) -> bool;

    fn diagnosis(&self) -> Diagnosis {
        Diagnosis::new(self.condition(), self.explanation())
    }
}

/// Return all rules in evaluation order.
pub fn all_rules() -> Vec<Box<dyn ConditionRule>> {
    vec![
        Box::new(rules::heart::Hypertension),
        Box::new(rules::heart::Hyperlipidemia),
        Box::new(rules::heart::CoronaryArteryDisease),
        Box::new(rules::kidney::MildCkd),
        Box::new(rules::kidney::ModerateCkd),
        Box::new(rules::kidney::SevereCkd),
        Box::new(rules::kidney::EndStageRenalDisease),
        Box::new(rules::kidney::DiabeticNephropathy),
        Box::new(rules::liver::Nafld),
        Box::new(rules::liver::AlcoholicLiverDisease),
        Box::new(rules::liver::LiverFibrosis),
    ]
}

/// Look up a rule by ID.
pub fn get_rule(id: &str) -> Option<Box<dyn ConditionRule>> {
    all_rules().into_iter().find(|r| r.id() == id)
}

/// Evaluate every rule against `record`.
///
/// Fails if any field a rule reads is absent or not numeric. The record is
/// never modified; the same record always yields the same result.
pub fn evaluate_conditions(record: &MeasurementRecord) -> Result<DiagnosisResult, RuleError> {
    let panel = LabPanel::from_record(record)?;
    Ok(evaluate_panel(&panel))
}

/// Evaluate every rule against already-extracted lab values.
pub fn evaluate_panel(panel: &LabPanel) -> DiagnosisResult {
    let mut result = DiagnosisResult::new();
    for rule in all_rules() {
        if rule.matches(panel) {
            tracing::debug!(rule = rule.id(), condition = rule.condition(), "rule matched");
            result.push(rule.diagnosis());
        }
    }
    result
}
