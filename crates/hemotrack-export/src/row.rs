use hemotrack_core::models::{InstrumentKind, MedicalRecord, Patient, QuestionnaireResponse};
use hemotrack_instruments::AnalysisResult;
use hemotrack_instruments::analysis::{DomainScore, PartScore, SpecialGroupScore};
use hemotrack_instruments::instruments::{haemqol, hal};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::header::COLUMN_COUNT;

/// One positional export row. Cell order matches
/// [`EXPORT_HEADER`](crate::header::EXPORT_HEADER); missing values are
/// empty strings, never "null" or "NaN".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExportRow(Vec<String>);

impl ExportRow {
    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn into_cells(self) -> Vec<String> {
        self.0
    }
}

/// Everything the builder needs for one patient's row. The caller owns
/// fetching these from storage; the builder only reads.
#[derive(Debug, Clone, Copy)]
pub struct PatientExport<'a> {
    pub patient: &'a Patient,
    /// All stored responses for the patient, any order.
    pub responses: &'a [QuestionnaireResponse],
    pub record: Option<&'a MedicalRecord>,
}

/// Build the export row for one patient.
///
/// The most recent response per instrument (by `completed_at`, first one
/// winning ties) is analyzed and its scores placed into fixed positions;
/// an instrument with no response at all leaves its columns empty.
pub fn build_export_row(export: &PatientExport<'_>) -> ExportRow {
    let mut cells = Vec::with_capacity(COLUMN_COUNT);
    let patient = export.patient;

    cells.push(patient.name.clone());
    cells.push(opt_str(patient.age_group().map(|g| g.label().to_string())));
    cells.push(opt_str(patient.age.map(|a| a.to_string())));
    // Demographic values are copied verbatim, not rounded like scores.
    cells.push(opt_str(patient.weight_kg.map(|w| w.to_string())));
    cells.push(opt_str(patient.height_cm.map(|h| h.to_string())));

    let record = export.record;
    cells.push(opt_str(record.and_then(|r| r.dosing_plan.clone())));
    cells.push(opt_str(record.and_then(|r| r.dose.clone())));

    push_haemqol_cells(
        &mut cells,
        latest_response(export.responses, InstrumentKind::HaemQolA),
    );
    push_hal_cells(
        &mut cells,
        latest_response(export.responses, InstrumentKind::Hal),
    );

    cells.push(opt_str(
        record.and_then(|r| r.evaluation_date).map(|d| d.to_string()),
    ));
    cells.push(opt_str(
        record.and_then(|r| r.follow_up_date).map(|d| d.to_string()),
    ));
    cells.push(opt_str(record.and_then(|r| r.notes.clone())));

    debug_assert_eq!(cells.len(), COLUMN_COUNT);
    tracing::debug!(patient = %patient.id, "built export row");
    ExportRow(cells)
}

/// Build rows for a batch of patients. Each row is an independent pure
/// computation; callers are free to parallelize instead.
pub fn build_export_rows(exports: &[PatientExport<'_>]) -> Vec<ExportRow> {
    exports.iter().map(build_export_row).collect()
}

/// Most recent response of one instrument. Strictly-greater comparison, so
/// the first entry wins when the input is already sorted descending.
fn latest_response(
    responses: &[QuestionnaireResponse],
    kind: InstrumentKind,
) -> Option<&QuestionnaireResponse> {
    let mut latest: Option<&QuestionnaireResponse> = None;
    for response in responses.iter().filter(|r| r.instrument == kind) {
        match latest {
            Some(best) if response.completed_at <= best.completed_at => {}
            _ => latest = Some(response),
        }
    }
    latest
}

/// Part 1–4 scores + grand total, or five empty cells.
fn push_haemqol_cells(cells: &mut Vec<String>, response: Option<&QuestionnaireResponse>) {
    let Some(response) = response else {
        cells.extend(std::iter::repeat_n(String::new(), 5));
        return;
    };
    let analysis = hemotrack_instruments::analyze(InstrumentKind::HaemQolA, &response.answers);
    let AnalysisResult::HaemQolA {
        total_score, parts, ..
    } = analysis
    else {
        unreachable!("haemqol analysis returned a different instrument");
    };
    for group in &haemqol::PARTS {
        cells.push(part_cell(&parts, group.key));
    }
    cells.push(fmt_num(total_score));
}

/// 7 domain scores + 3 special-group scores + national total, or eleven
/// empty cells.
fn push_hal_cells(cells: &mut Vec<String>, response: Option<&QuestionnaireResponse>) {
    let Some(response) = response else {
        cells.extend(std::iter::repeat_n(String::new(), 11));
        return;
    };
    let analysis = hemotrack_instruments::analyze(InstrumentKind::Hal, &response.answers);
    let AnalysisResult::Hal {
        total_score,
        domains,
        special_groups,
        ..
    } = analysis
    else {
        unreachable!("hal analysis returned a different instrument");
    };
    for group in &hal::DOMAINS {
        cells.push(domain_cell(&domains, group.key));
    }
    for group in &hal::SPECIAL_GROUPS {
        cells.push(special_cell(&special_groups, group.key));
    }
    cells.push(fmt_num(total_score));
}

fn domain_cell(domains: &[DomainScore], key: &str) -> String {
    domains
        .iter()
        .find(|d| d.key == key)
        .map(|d| fmt_num(d.result.score))
        .unwrap_or_default()
}

fn part_cell(parts: &[PartScore], key: &str) -> String {
    parts
        .iter()
        .find(|p| p.key == key)
        .map(|p| fmt_num(p.result.score))
        .unwrap_or_default()
}

/// A special group with no valid answers renders as 0 (the instrument was
/// administered, so the row stays fully numeric).
fn special_cell(groups: &[SpecialGroupScore], key: &str) -> String {
    groups
        .iter()
        .find(|g| g.key == key)
        .map(|g| fmt_num(g.score.unwrap_or(0.0)))
        .unwrap_or_default()
}

fn opt_str(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Plain decimal formatting: whole numbers without a trailing ".0", one
/// decimal otherwise (scores are already rounded to one decimal).
fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}
