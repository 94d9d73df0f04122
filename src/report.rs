use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::model::{Dataset, Gender, GenderCodes};
use crate::data::score::group_average;

// ---------------------------------------------------------------------------
// Per-group averages
// ---------------------------------------------------------------------------

/// Averages of one group, in the order they are printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub label: String,
    pub records: usize,
    pub skipped: usize,
    pub male: f64,
    pub female: f64,
    pub combined: f64,
}

impl GroupSummary {
    pub fn new(dataset: &Dataset, scores: &[f64], codes: &GenderCodes) -> Self {
        let avg = |gender: Gender| group_average(&dataset.records, scores, Some(codes.code(gender)));
        Self {
            label: dataset.label.clone(),
            records: dataset.len(),
            skipped: dataset.skipped,
            male: avg(Gender::Male),
            female: avg(Gender::Female),
            combined: group_average(&dataset.records, scores, None),
        }
    }
}

impl fmt::Display for GroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} group averages", capitalize(&self.label))?;
        writeln!(f, "Male: {}", self.male)?;
        writeln!(f, "Female: {}", self.female)?;
        write!(f, "Combined: {}", self.combined)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Text block for stdout: one summary per group, separated by a blank line.
pub fn render_text(summaries: &[GroupSummary]) -> String {
    summaries
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_json(summaries: &[GroupSummary]) -> Result<String> {
    serde_json::to_string_pretty(summaries).context("serialising summaries")
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ScoreRow<'a> {
    gender: &'a str,
    weight_t1: f64,
    weight_t2: f64,
    score: f64,
}

/// Write `<dir>/<label>_scores.csv` with one row per record.
pub fn export_scores(dir: &Path, dataset: &Dataset, scores: &[f64]) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(format!("{}_scores.csv", dataset.label));

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("opening {}", path.display()))?;
    for (rec, &score) in dataset.records.iter().zip(scores) {
        writer
            .serialize(ScoreRow {
                gender: &rec.gender,
                weight_t1: rec.weight_t1,
                weight_t2: rec.weight_t2,
                score,
            })
            .with_context(|| format!("writing {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;

    log::info!("Wrote {} scores to {}", dataset.len(), path.display());
    Ok(path)
}
