use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::input::InputError;
use crate::model::strategy::Strategy;

#[derive(Debug, Clone)]
pub struct MetricsDocument {
    source: PathBuf,
    datasets: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScoreRecord {
    pub f: (f64, f64),
}

impl ScoreRecord {
    pub fn avg(&self) -> f64 {
        self.f.0
    }

    pub fn std(&self) -> f64 {
        self.f.1
    }
}

impl MetricsDocument {
    pub fn from_value(source: &Path, value: Value) -> Result<Self, InputError> {
        match value {
            Value::Object(datasets) if datasets.is_empty() => {
                Err(InputError::schema(source, "document lists no datasets"))
            }
            Value::Object(datasets) => Ok(MetricsDocument {
                source: source.to_path_buf(),
                datasets,
            }),
            other => Err(InputError::schema(
                source,
                format!(
                    "expected an object keyed by dataset name, found {}",
                    value_kind(&other)
                ),
            )),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn dataset_names(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    pub fn score(&self, dataset: &str, strategy: Strategy) -> Result<ScoreRecord, InputError> {
        let entry = self
            .datasets
            .get(dataset)
            .ok_or_else(|| InputError::schema(&self.source, format!("no dataset `{dataset}`")))?;
        let strategies = entry.as_object().ok_or_else(|| {
            InputError::schema(
                &self.source,
                format!(
                    "dataset `{dataset}` should map strategy names to scores, found {}",
                    value_kind(entry)
                ),
            )
        })?;
        let record = strategies.get(strategy.key()).ok_or_else(|| {
            InputError::schema(
                &self.source,
                format!("dataset `{dataset}` has no `{}` entry", strategy.key()),
            )
        })?;
        ScoreRecord::deserialize(record).map_err(|e| {
            InputError::schema(
                &self.source,
                format!("dataset `{dataset}`, strategy `{}`: {e}", strategy.key()),
            )
        })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
