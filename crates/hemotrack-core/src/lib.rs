//! hemotrack-core
//!
//! Pure domain types shared across the Hemotrack system: patients,
//! questionnaire responses, medical records, and the raw answer map the
//! scoring engine consumes. No storage or network dependency — this is
//! the shared vocabulary of the system.

pub mod error;
pub mod models;
