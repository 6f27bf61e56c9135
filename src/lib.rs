//! Readability metrics for plain text.
//!
//! The pipeline is pure: [`compute_statistics`] counts characters, words,
//! sentences and estimated syllables, [`compute_scores`] applies the ARI,
//! Flesch–Kincaid, SMOG and Coleman–Liau formulas, and [`select`] maps the
//! requested scores to reader ages.

use log::debug;
use serde::{Deserialize, Serialize};

pub mod age;
pub mod config;
pub mod error;
pub mod formulas;
pub mod report;
pub mod selector;
pub mod stats;
pub mod syllables;
pub mod tokenizer;

pub use age::{average_age, map_age, AGE_TABLE};
pub use config::ReadabilityConfig;
pub use error::{ReadabilityError, Result};
pub use formulas::{compute_scores, Metric, ReadabilityScores};
pub use report::OutputFormat;
pub use selector::{select, MetricEstimate, MetricSelector, ReadabilityReport};
pub use stats::{compute_statistics, TextStatistics};

/// Statistics and scores of one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub statistics: TextStatistics,
    pub scores: ReadabilityScores,
}

impl Analysis {
    pub fn report(&self, selector: MetricSelector) -> ReadabilityReport {
        select(selector, &self.scores)
    }
}

pub fn analyze(text: &str) -> Result<Analysis> {
    let statistics = compute_statistics(text)?;
    let scores = compute_scores(&statistics)?;
    debug!("Analysed {} words in {} sentences", statistics.word_count, statistics.sentence_count);
    Ok(Analysis { statistics, scores })
}
