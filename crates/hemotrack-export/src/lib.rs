//! hemotrack-export
//!
//! Flattens a patient, their latest responses, and medical-record fields
//! into the fixed 26-column row consumed by the spreadsheet export. Pure
//! row building only — serializing rows to CSV/XLSX belongs to the caller.

pub mod header;
pub mod row;

pub use header::EXPORT_HEADER;
pub use row::{ExportRow, PatientExport, build_export_row, build_export_rows};
