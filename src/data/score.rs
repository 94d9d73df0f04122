use thiserror::Error;

use super::model::Record;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    /// The score divides by the first weight, so it must be strictly positive.
    #[error("record {index}: weight at T1 must be a positive number, got {value}")]
    NonPositiveBaseline { index: usize, value: f64 },

    #[error("record {index}: score for weights {weight_t1} / {weight_t2} is not finite")]
    NonFinite {
        index: usize,
        weight_t1: f64,
        weight_t2: f64,
    },
}

impl ScoreError {
    fn at(self, index: usize) -> Self {
        match self {
            ScoreError::NonPositiveBaseline { value, .. } => {
                ScoreError::NonPositiveBaseline { index, value }
            }
            ScoreError::NonFinite {
                weight_t1,
                weight_t2,
                ..
            } => ScoreError::NonFinite {
                index,
                weight_t1,
                weight_t2,
            },
        }
    }
}

/// `sqrt(t2² / t1) * 100`, evaluated as `|t2| / sqrt(t1) * 100` so that
/// squaring cannot overflow. Rejects a `t1` that is not finite and positive,
/// and any result that is not finite.
pub fn score(weight_t1: f64, weight_t2: f64) -> Result<f64, ScoreError> {
    if !(weight_t1.is_finite() && weight_t1 > 0.0) {
        return Err(ScoreError::NonPositiveBaseline {
            index: 0,
            value: weight_t1,
        });
    }
    let value = weight_t2.abs() / weight_t1.sqrt() * 100.0;
    if !value.is_finite() {
        return Err(ScoreError::NonFinite {
            index: 0,
            weight_t1,
            weight_t2,
        });
    }
    Ok(value)
}

/// One score per record, index-aligned with `records`.
pub fn compute_scores(records: &[Record]) -> Result<Vec<f64>, ScoreError> {
    records
        .iter()
        .enumerate()
        .map(|(index, rec)| score(rec.weight_t1, rec.weight_t2).map_err(|e| e.at(index)))
        .collect()
}

/// Mean score of the records whose gender code equals `target`, or of all
/// records when `target` is `None`.
///
/// An empty selection averages to `0.0`; callers that need to tell "no data"
/// apart should check the group size themselves.
pub fn group_average(records: &[Record], scores: &[f64], target: Option<&str>) -> f64 {
    debug_assert_eq!(records.len(), scores.len());

    let (sum, count) = records
        .iter()
        .zip(scores)
        .filter(|(rec, _)| target.map_or(true, |t| rec.gender == t))
        .fold((0.0, 0usize), |(sum, count), (_, &s)| (sum + s, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
