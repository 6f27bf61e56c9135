use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::age::{average_age, map_age};
use crate::error::ReadabilityError;
use crate::formulas::{Metric, ReadabilityScores};

/// Which part of the report a caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricSelector {
    Single(Metric),
    All,
}

impl MetricSelector {
    pub fn metrics(self) -> Vec<Metric> {
        match self {
            MetricSelector::Single(metric) => vec![metric],
            MetricSelector::All => Metric::ALL.to_vec(),
        }
    }
}

impl FromStr for MetricSelector {
    type Err = ReadabilityError;

    /// Accepts `ARI`, `FK`, `SMOG`, `CL` or `all`, ignoring ASCII case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("all") {
            return Ok(MetricSelector::All);
        }
        Metric::ALL
            .into_iter()
            .find(|m| token.eq_ignore_ascii_case(m.code()))
            .map(MetricSelector::Single)
            .ok_or_else(|| ReadabilityError::UnknownSelector(token.to_string()))
    }
}

impl fmt::Display for MetricSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricSelector::Single(metric) => write!(f, "{}", metric),
            MetricSelector::All => f.write_str("all"),
        }
    }
}

/// A score together with the reader age it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricEstimate {
    pub metric: Metric,
    pub score: f64,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub metrics: Vec<MetricEstimate>,
    pub average_age: f64,
}

/// Builds the report for `selector` out of already computed scores.
pub fn select(selector: MetricSelector, scores: &ReadabilityScores) -> ReadabilityReport {
    let metrics: Vec<MetricEstimate> = selector
        .metrics()
        .into_iter()
        .map(|metric| {
            let score = scores.get(metric);
            MetricEstimate { metric, score, age: map_age(score) }
        })
        .collect();
    let ages: Vec<u32> = metrics.iter().map(|m| m.age).collect();
    // `metrics()` never yields an empty list.
    let average_age = average_age(&ages).unwrap_or_default();
    ReadabilityReport { metrics, average_age }
}
