use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A matched condition and its fixed explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Diagnosis {
    pub condition: String,
    pub explanation: String,
}

impl Diagnosis {
    pub fn new(condition: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            explanation: explanation.into(),
        }
    }
}

/// Diagnoses in rule-evaluation order (heart, kidney, liver).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct DiagnosisResult(Vec<Diagnosis>);

impl DiagnosisResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnosis: Diagnosis) {
        self.0.push(diagnosis);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnosis> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Diagnosis] {
        &self.0
    }

    pub fn conditions(&self) -> Vec<&str> {
        self.0.iter().map(|d| d.condition.as_str()).collect()
    }

    pub fn contains(&self, condition: &str) -> bool {
        self.0.iter().any(|d| d.condition == condition)
    }
}

impl From<Vec<Diagnosis>> for DiagnosisResult {
    fn from(diagnoses: Vec<Diagnosis>) -> Self {
        Self(diagnoses)
    }
}

impl IntoIterator for DiagnosisResult {
    type Item = Diagnosis;
    type IntoIter = std::vec::IntoIter<Diagnosis>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiagnosisResult {
    type Item = &'a Diagnosis;
    type IntoIter = std::slice::Iter<'a, Diagnosis>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
