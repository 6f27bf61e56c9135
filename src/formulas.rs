use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ReadabilityError, Result};
use crate::stats::TextStatistics;

/// One of the four readability formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "ARI")]
    AutomatedReadabilityIndex,
    #[serde(rename = "FK")]
    FleschKincaid,
    #[serde(rename = "SMOG")]
    Smog,
    #[serde(rename = "CL")]
    ColemanLiau,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::AutomatedReadabilityIndex,
        Metric::FleschKincaid,
        Metric::Smog,
        Metric::ColemanLiau,
    ];

    /// Short selector code, as typed by users.
    pub fn code(self) -> &'static str {
        match self {
            Metric::AutomatedReadabilityIndex => "ARI",
            Metric::FleschKincaid => "FK",
            Metric::Smog => "SMOG",
            Metric::ColemanLiau => "CL",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Metric::AutomatedReadabilityIndex => "Automated Readability Index",
            Metric::FleschKincaid => "Flesch–Kincaid readability tests",
            Metric::Smog => "Simple Measure of Gobbledygook",
            Metric::ColemanLiau => "Coleman–Liau index",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Raw, unrounded scores of the four formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub ari: f64,
    pub flesch_kincaid: f64,
    pub smog: f64,
    pub coleman_liau: f64,
}

impl ReadabilityScores {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::AutomatedReadabilityIndex => self.ari,
            Metric::FleschKincaid => self.flesch_kincaid,
            Metric::Smog => self.smog,
            Metric::ColemanLiau => self.coleman_liau,
        }
    }
}

pub fn automated_readability_index(stats: &TextStatistics) -> f64 {
    4.71 * (stats.characters() / stats.words()) + 0.5 * (stats.words() / stats.sentences()) - 21.43
}

pub fn flesch_kincaid(stats: &TextStatistics) -> f64 {
    0.39 * stats.words() / stats.sentences() + 11.8 * stats.syllables() / stats.words() - 15.59
}

pub fn smog(stats: &TextStatistics) -> f64 {
    1.043 * (stats.polysyllables() * 30.0 / stats.sentences()).sqrt() + 3.1291
}

pub fn coleman_liau(stats: &TextStatistics) -> f64 {
    // Letters and sentences per 100 words.
    let l = stats.characters() / (stats.words() / 100.0);
    let s = stats.sentences() / (stats.words() / 100.0);
    0.0588 * l - 0.296 * s - 15.8
}

/// Applies the four formulas to `stats`.
///
/// Statistics with zero words or zero sentences are rejected instead of
/// producing non-finite scores.
pub fn compute_scores(stats: &TextStatistics) -> Result<ReadabilityScores> {
    if stats.word_count == 0 || stats.sentence_count == 0 {
        return Err(ReadabilityError::InvalidInput(
            "text must contain at least one word and one sentence".to_string(),
        ));
    }

    let scores = ReadabilityScores {
        ari: automated_readability_index(stats),
        flesch_kincaid: flesch_kincaid(stats),
        smog: smog(stats),
        coleman_liau: coleman_liau(stats),
    };

    if let Some(metric) = Metric::ALL.into_iter().find(|&m| !scores.get(m).is_finite()) {
        return Err(ReadabilityError::InvalidInput(format!(
            "{} score is not a finite number",
            metric.full_name()
        )));
    }

    debug!("Computed readability scores: {:?}", scores);
    Ok(scores)
}
