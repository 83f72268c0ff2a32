//! HAL: Haemophilia Activities List.
//!
//! 42 items keyed `"q1"`–`"q42"`, answered on a 1–6 difficulty scale
//! (1 = impossible, 6 = never difficult; 8 = not applicable). Seven
//! functional domains partition the items; three special groups re-slice
//! the same pool into cross-cutting upper/lower-extremity views and are
//! scored through the manual's inverted intermediate encoding.

use super::QuestionGroup;

/// The seven functional domains. Disjoint; together they cover q1–q42.
pub const DOMAINS: [QuestionGroup; 7] = [
    QuestionGroup {
        key: "LSKS",
        name: "Lying, sitting, kneeling, standing",
        questions: &["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8"],
    },
    QuestionGroup {
        key: "LEGS",
        name: "Functions of the legs",
        questions: &["q9", "q10", "q11", "q12", "q13", "q14", "q15", "q16", "q17"],
    },
    QuestionGroup {
        key: "ARMS",
        name: "Functions of the arms",
        questions: &["q18", "q19", "q20", "q21"],
    },
    QuestionGroup {
        key: "TRANS",
        name: "Use of transportation",
        questions: &["q22", "q23", "q24"],
    },
    QuestionGroup {
        key: "SELFC",
        name: "Self-care",
        questions: &["q25", "q26", "q27", "q28", "q29"],
    },
    QuestionGroup {
        key: "HOUSEH",
        name: "Household tasks",
        questions: &["q30", "q31", "q32", "q33", "q34", "q35"],
    },
    QuestionGroup {
        key: "LEISPO",
        name: "Leisure activities and sports",
        questions: &["q36", "q37", "q38", "q39", "q40", "q41", "q42"],
    },
];

/// The three cross-cutting special groups. These deliberately overlap the
/// domains above — they are alternate views over the same answer pool.
pub const SPECIAL_GROUPS: [QuestionGroup; 3] = [
    QuestionGroup {
        key: "UPPER",
        name: "Upper extremity activities",
        questions: &["q18", "q19", "q20", "q21", "q25", "q26", "q27", "q28", "q29"],
    },
    QuestionGroup {
        key: "LOWBAS",
        name: "Basic lower extremity activities",
        questions: &["q1", "q2", "q3", "q4", "q5", "q6", "q9", "q10", "q11"],
    },
    QuestionGroup {
        key: "LOWCOM",
        name: "Complex lower extremity activities",
        questions: &["q7", "q8", "q12", "q13", "q14", "q15", "q16", "q17", "q36"],
    },
];

/// Every HAL question id, in domain order. Used for the pooled national
/// standard total.
pub fn all_questions() -> impl Iterator<Item = &'static str> {
    DOMAINS.iter().flat_map(|d| d.questions.iter().copied())
}
