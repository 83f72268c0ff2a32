//! Question-group registry for each instrument.
//!
//! Pure data. Any change to a clinical instrument definition (adding a
//! question, renaming a domain) is an edit here only — the scoring
//! functions iterate whatever question sets they are handed and are blind
//! to the specific identifiers.

pub mod haemqol;
pub mod hal;

use hemotrack_core::models::InstrumentKind;

/// A named, ordered set of question ids scored together.
///
/// HAL domains, HAL special groups, and HAEMO-QoL-A parts are all just
/// question groups; what differs is the formula applied to them.
#[derive(Debug, Clone, Copy)]
pub struct QuestionGroup {
    /// Stable short key used in exports and lookups (e.g. `"LSKS"`).
    pub key: &'static str,
    /// Human-readable name for display.
    pub name: &'static str,
    pub questions: &'static [&'static str],
}

/// Total number of questions an instrument carries.
pub fn question_count(kind: InstrumentKind) -> usize {
    match kind {
        InstrumentKind::Hal => hal::DOMAINS.iter().map(|d| d.questions.len()).sum(),
        InstrumentKind::HaemQolA => haemqol::PARTS.iter().map(|p| p.questions.len()).sum(),
    }
}
