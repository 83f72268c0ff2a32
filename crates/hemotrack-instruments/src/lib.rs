//! hemotrack-instruments
//!
//! Clinical instrument definitions and the scoring engine. Pure data and
//! pure functions — no storage, no I/O. Defines the question groupings for
//! each supported instrument (HAL and HAEMO-QoL-A) and turns a raw
//! [`AnswerSet`](hemotrack_core::models::AnswerSet) into normalized
//! sub-scores, composite totals, and a uniform analysis result.

pub mod analysis;
pub mod instruments;
pub mod scoring;

pub use analysis::{AnalysisResult, analyze};
