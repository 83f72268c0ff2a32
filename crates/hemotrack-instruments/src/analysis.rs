//! Analysis facade: the single entry point the UI and export layers call.
//!
//! [`analyze`] dispatches on the instrument kind and packages the
//! per-group scores with their registry names into one uniform result.
//! The individual scorers in [`crate::scoring`] are internal
//! collaborators, not application surface.

use hemotrack_core::models::{AnswerSet, InstrumentKind};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::instruments::{QuestionGroup, haemqol, hal};
use crate::scoring::{self, ScoreResult};

/// One HAL functional domain with its normalized score.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScore {
    pub key: String,
    pub name: String,
    pub result: ScoreResult,
}

/// One HAL special group. `score` is `None` when the group had no valid
/// answers; displays treat that as 0.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpecialGroupScore {
    pub key: String,
    pub name: String,
    pub score: Option<f64>,
}

/// One HAEMO-QoL-A part with its score.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PartScore {
    pub key: String,
    pub name: String,
    pub result: ScoreResult,
}

/// Full analysis of one questionnaire response, tagged by instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "instrument", rename_all = "snake_case")]
#[ts(export)]
pub enum AnalysisResult {
    Hal {
        /// National standard total, pooled across all 42 items.
        total_score: f64,
        max_score: f64,
        domains: Vec<DomainScore>,
        special_groups: Vec<SpecialGroupScore>,
    },
    #[serde(rename = "haemqol")]
    HaemQolA {
        /// Sum of the four part scores.
        total_score: f64,
        /// Sum of the four part totals (answered count × 4 per part).
        max_score: f64,
        parts: Vec<PartScore>,
    },
}

impl AnalysisResult {
    pub fn instrument(&self) -> InstrumentKind {
        match self {
            AnalysisResult::Hal { .. } => InstrumentKind::Hal,
            AnalysisResult::HaemQolA { .. } => InstrumentKind::HaemQolA,
        }
    }

    pub fn total_score(&self) -> f64 {
        match self {
            AnalysisResult::Hal { total_score, .. }
            | AnalysisResult::HaemQolA { total_score, .. } => *total_score,
        }
    }

    pub fn max_score(&self) -> f64 {
        match self {
            AnalysisResult::Hal { max_score, .. } | AnalysisResult::HaemQolA { max_score, .. } => {
                *max_score
            }
        }
    }
}

/// Analyze one response for the given instrument.
pub fn analyze(kind: InstrumentKind, answers: &AnswerSet) -> AnalysisResult {
    match kind {
        InstrumentKind::Hal => analyze_hal(answers),
        InstrumentKind::HaemQolA => analyze_haemqol(answers),
    }
}

fn analyze_hal(answers: &AnswerSet) -> AnalysisResult {
    let domains = hal::DOMAINS
        .iter()
        .map(|group: &QuestionGroup| DomainScore {
            key: group.key.to_string(),
            name: group.name.to_string(),
            result: scoring::domain_score(group.questions.iter().copied(), answers),
        })
        .collect();

    let special_groups = hal::SPECIAL_GROUPS
        .iter()
        .map(|group| SpecialGroupScore {
            key: group.key.to_string(),
            name: group.name.to_string(),
            score: scoring::special_group_score(group.questions.iter().copied(), answers),
        })
        .collect();

    // The national standard total pools raw sums across all 42 items and
    // applies the domain formula once. Averaging the already-rounded domain
    // scores would compound rounding error.
    let pooled = scoring::domain_score(hal::all_questions(), answers);

    AnalysisResult::Hal {
        total_score: pooled.score,
        max_score: 100.0,
        domains,
        special_groups,
    }
}

fn analyze_haemqol(answers: &AnswerSet) -> AnalysisResult {
    let parts: Vec<PartScore> = haemqol::PARTS
        .iter()
        .map(|group| PartScore {
            key: group.key.to_string(),
            name: group.name.to_string(),
            result: scoring::part_score(group.questions.iter().copied(), answers),
        })
        .collect();

    let total_score = scoring::round1(parts.iter().map(|p| p.result.score).sum());
    let max_score = parts.iter().map(|p| p.result.total).sum();

    AnalysisResult::HaemQolA {
        total_score,
        max_score,
        parts,
    }
}
