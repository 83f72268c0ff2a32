//! HAEMO-QoL-A: quality-of-life questionnaire for adult hemophilia patients.
//!
//! 41 items keyed `"hq1"`–`"hq41"`, answered on a linear 0–4 scale. Four
//! parts partition the items; there is no sentinel code and no inversion.

use super::QuestionGroup;

/// The four parts. Disjoint; together they cover hq1–hq41.
pub const PARTS: [QuestionGroup; 4] = [
    QuestionGroup {
        key: "PART1",
        name: "Physical functioning",
        questions: &[
            "hq1", "hq2", "hq3", "hq4", "hq5", "hq6", "hq7", "hq8", "hq9",
        ],
    },
    QuestionGroup {
        key: "PART2",
        name: "Emotional impact",
        questions: &[
            "hq10", "hq11", "hq12", "hq13", "hq14", "hq15", "hq16", "hq17", "hq18", "hq19", "hq20",
        ],
    },
    QuestionGroup {
        key: "PART3",
        name: "Role and social functioning",
        questions: &[
            "hq21", "hq22", "hq23", "hq24", "hq25", "hq26", "hq27", "hq28", "hq29", "hq30", "hq31",
        ],
    },
    QuestionGroup {
        key: "PART4",
        name: "Treatment concerns and worry",
        questions: &[
            "hq32", "hq33", "hq34", "hq35", "hq36", "hq37", "hq38", "hq39", "hq40", "hq41",
        ],
    },
];
