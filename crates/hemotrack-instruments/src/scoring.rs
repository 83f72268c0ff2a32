//! Scoring primitives shared by every instrument.
//!
//! All functions here are pure: they read a borrowed
//! [`AnswerSet`](hemotrack_core::models::AnswerSet) against a question-id
//! list from the registry and return fresh values. Malformed input never
//! errors — unparseable answers are excluded from aggregation, and a group
//! with no valid answers degrades to a zero result (or no score, for
//! special groups) rather than NaN.

use hemotrack_core::models::AnswerSet;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A validated HAL answer.
///
/// HAL items are rated 1–6 (1 = impossible, 6 = never difficult) with 8 as
/// the "not applicable / don't know" sentinel. Anything else in the raw
/// answer map is invalid and treated the same as unanswered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalAnswer {
    Rating(u8),
    NotApplicable,
}

impl HalAnswer {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().parse::<u8>() {
            Ok(v @ 1..=6) => Some(HalAnswer::Rating(v)),
            Ok(8) => Some(HalAnswer::NotApplicable),
            _ => None,
        }
    }
}

/// Uniform per-domain / per-part score output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    /// Normalized score, one decimal.
    pub score: f64,
    /// Maximum attainable points over the answered questions.
    pub total: f64,
    /// `score` relative to the group maximum, one decimal, in [0, 100].
    pub percentage: f64,
}

impl ScoreResult {
    /// The graceful-degradation result for a group with no valid answers.
    pub fn zero() -> Self {
        Self {
            score: 0.0,
            total: 0.0,
            percentage: 0.0,
        }
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Sum of valid HAL ratings and their count. Sentinel `8`, absent, and
/// unparseable answers count toward neither.
fn tally<'a>(questions: impl IntoIterator<Item = &'a str>, answers: &AnswerSet) -> (u32, u32) {
    let mut sum = 0u32;
    let mut valid = 0u32;
    for qid in questions {
        if let Some(HalAnswer::Rating(r)) = answers.get(qid).and_then(HalAnswer::parse) {
            sum += u32::from(r);
            valid += 1;
        }
    }
    (sum, valid)
}

/// Score one HAL functional domain on the 0–100 ability scale.
///
/// Each valid answer contributes on the 1–6 scale; subtracting `valid` and
/// dividing by `5 * valid` rescales the attainable range onto [0, 100].
/// Skipped items shrink the denominator instead of counting as failure, so
/// a partially answered domain is scored only on what was answered. This
/// follows the instrument's scoring manual exactly.
pub fn domain_score<'a>(
    questions: impl IntoIterator<Item = &'a str>,
    answers: &AnswerSet,
) -> ScoreResult {
    let (sum, valid) = tally(questions, answers);
    if valid == 0 {
        return ScoreResult::zero();
    }
    let raw = 100.0 * f64::from(sum - valid) / (5.0 * f64::from(valid));
    let score = round1(raw.clamp(0.0, 100.0));
    ScoreResult {
        score,
        total: f64::from(valid * 5),
        percentage: score,
    }
}

/// Score one HAL special group through the manual's inverted encoding.
///
/// Ratings are remapped `1↔6, 2↔5, 3↔4` before aggregation, then the score
/// is taken as distance from 100. The result points the same direction as
/// [`domain_score`] (higher = more able) but the published formula is
/// different, and the two must stay distinct — collapsing them changes
/// clinical output on rounding.
///
/// Returns `None` when the group has no valid answers; callers display
/// that as 0.
pub fn special_group_score<'a>(
    questions: impl IntoIterator<Item = &'a str>,
    answers: &AnswerSet,
) -> Option<f64> {
    let mut sum = 0u32;
    let mut valid = 0u32;
    for qid in questions {
        if let Some(HalAnswer::Rating(r)) = answers.get(qid).and_then(HalAnswer::parse) {
            sum += u32::from(7 - r);
            valid += 1;
        }
    }
    if valid == 0 {
        return None;
    }
    let raw = 100.0 - f64::from(sum - valid) * (100.0 / (5.0 * f64::from(valid)));
    Some(round1(raw.clamp(0.0, 100.0)))
}

/// Score one HAEMO-QoL-A part.
///
/// Raw values (expected 0–4 per item) are summed over answered questions
/// only; there is no sentinel code and no inversion. `total` is the
/// maximum attainable over the answered count.
pub fn part_score<'a>(
    questions: impl IntoIterator<Item = &'a str>,
    answers: &AnswerSet,
) -> ScoreResult {
    let mut sum = 0.0;
    let mut answered = 0u32;
    for qid in questions {
        let Some(raw) = answers.get(qid) else {
            continue;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Ok(value) = trimmed.parse::<f64>() else {
            continue;
        };
        sum += value;
        answered += 1;
    }
    let total = f64::from(answered * 4);
    let percentage = if total > 0.0 {
        round1(100.0 * sum / total)
    } else {
        0.0
    };
    ScoreResult {
        score: round1(sum),
        total,
        percentage,
    }
}
