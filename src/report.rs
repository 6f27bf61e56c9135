//! Text and JSON rendering of statistics and readability reports.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::selector::{MetricEstimate, ReadabilityReport};
use crate::stats::TextStatistics;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The base counts block shown before a metric is chosen.
pub fn render_statistics(stats: &TextStatistics) -> String {
    format!(
        "Words: {}\nSentences: {}\nCharacters: {}\nSyllables: {:.2}\nPolysyllables: {}\n",
        stats.word_count,
        stats.sentence_count,
        stats.character_count,
        stats.syllables(),
        stats.polysyllable_count,
    )
}

pub fn render_estimate(estimate: &MetricEstimate) -> String {
    format!(
        "{}: {:.2} (about {} year olds).",
        estimate.metric.full_name(),
        estimate.score,
        estimate.age
    )
}

pub fn render_report(report: &ReadabilityReport) -> String {
    let mut out = String::new();
    for estimate in &report.metrics {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", render_estimate(estimate));
    }
    let _ = write!(
        out,
        "\nThis text should be understood in average by {:.2} year olds.\n",
        report.average_age
    );
    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    statistics: &'a TextStatistics,
    metrics: &'a [MetricEstimate],
    average_age: f64,
}

pub fn render_json(stats: &TextStatistics, report: &ReadabilityReport) -> Result<String> {
    let json = JsonReport {
        statistics: stats,
        metrics: &report.metrics,
        average_age: report.average_age,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
