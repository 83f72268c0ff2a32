//! The export header contract.
//!
//! Column order is a wire contract with downstream spreadsheet consumers:
//! rows are positional, so any reorder here must ship together with the
//! consumer-side change.

/// Number of columns in every export row.
pub const COLUMN_COUNT: usize = 26;

/// Header labels, in row order.
pub const EXPORT_HEADER: [&str; COLUMN_COUNT] = [
    "Patient Name",
    "Age Group",
    "Age",
    "Weight (kg)",
    "Height (cm)",
    "Treatment Plan",
    "Treatment Dose",
    "HAEMO-QoL-A Part 1",
    "HAEMO-QoL-A Part 2",
    "HAEMO-QoL-A Part 3",
    "HAEMO-QoL-A Part 4",
    "HAEMO-QoL-A Total",
    "HAL Lying/Sitting/Kneeling/Standing",
    "HAL Leg Functions",
    "HAL Arm Functions",
    "HAL Transportation",
    "HAL Self-care",
    "HAL Household Tasks",
    "HAL Leisure & Sports",
    "HAL Upper Extremity",
    "HAL Basic Lower Extremity",
    "HAL Complex Lower Extremity",
    "HAL National Total",
    "Evaluation Date",
    "Next Follow-up Date",
    "Notes",
];
