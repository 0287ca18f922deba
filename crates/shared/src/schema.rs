use serde::{Deserialize, Serialize};

use crate::error::FitError;

/// Declared, ordered list of statistic labels an extractor produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSchema {
    labels: Vec<String>,
}

impl StatSchema {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Column position of `label`, or `UnknownStatistic`.
    pub fn column(&self, label: &str) -> Result<usize, FitError> {
        self.index_of(label).ok_or_else(|| FitError::UnknownStatistic {
            label: label.to_string(),
        })
    }

    /// Labels `values` with this schema's labels.
    pub fn vector(&self, values: Vec<f64>) -> StatVector {
        StatVector {
            labels: self.labels.clone(),
            values,
        }
    }

    /// True when `vector` carries exactly this schema's labels, in order,
    /// with one value per label.
    pub fn conforms(&self, vector: &StatVector) -> bool {
        vector.labels == self.labels && vector.values.len() == self.labels.len()
    }
}

/// Labelled output of one extractor call. `NaN` marks an undefined value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatVector {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl StatVector {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .and_then(|idx| self.values.get(idx).copied())
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
