use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::parameter::Parameter;

/// A single value entered for a parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum MeasurementValue {
    Numeric(f64),
    Categorical(String),
}

impl MeasurementValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MeasurementValue::Numeric(n) => Some(*n),
            MeasurementValue::Categorical(_) => None,
        }
    }
}

impl fmt::Display for MeasurementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementValue::Numeric(n) => write!(f, "{n}"),
            MeasurementValue::Categorical(s) => f.write_str(s),
        }
    }
}

impl From<f64> for MeasurementValue {
    fn from(value: f64) -> Self {
        MeasurementValue::Numeric(value)
    }
}

impl From<u32> for MeasurementValue {
    fn from(value: u32) -> Self {
        MeasurementValue::Numeric(f64::from(value))
    }
}

impl From<&str> for MeasurementValue {
    fn from(value: &str) -> Self {
        MeasurementValue::Categorical(value.to_string())
    }
}

impl From<String> for MeasurementValue {
    fn from(value: String) -> Self {
        MeasurementValue::Categorical(value)
    }
}

/// Parameter → value mapping handed to the condition evaluator.
///
/// Built fresh for each evaluation and never persisted. Serializes as a JSON
/// object keyed by parameter label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct MeasurementRecord(BTreeMap<Parameter, MeasurementValue>);

impl MeasurementRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, parameter: Parameter, value: impl Into<MeasurementValue>) -> Self {
        self.0.insert(parameter, value.into());
        self
    }

    pub fn insert(
        &mut self,
        parameter: Parameter,
        value: impl Into<MeasurementValue>,
    ) -> Option<MeasurementValue> {
        self.0.insert(parameter, value.into())
    }

    pub fn remove(&mut self, parameter: Parameter) -> Option<MeasurementValue> {
        self.0.remove(&parameter)
    }

    pub fn get(&self, parameter: Parameter) -> Option<&MeasurementValue> {
        self.0.get(&parameter)
    }

    pub fn contains(&self, parameter: Parameter) -> bool {
        self.0.contains_key(&parameter)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in parameter order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &MeasurementValue)> {
        self.0.iter().map(|(p, v)| (*p, v))
    }

    /// Parameters from [`Parameter::ALL`] that have no value.
    pub fn missing(&self) -> Vec<Parameter> {
        Parameter::ALL
            .into_iter()
            .filter(|p| !self.0.contains_key(p))
            .collect()
    }
}

impl FromIterator<(Parameter, MeasurementValue)> for MeasurementRecord {
    fn from_iter<I: IntoIterator<Item = (Parameter, MeasurementValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
