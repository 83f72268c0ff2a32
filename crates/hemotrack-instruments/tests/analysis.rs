use hemotrack_core::models::{AnswerSet, InstrumentKind};
use hemotrack_instruments::analysis::AnalysisResult;
use hemotrack_instruments::analyze;
use hemotrack_instruments::instruments::{haemqol, hal, question_count};

fn all_hal(value: &str) -> AnswerSet {
    (1..=42).map(|i| (format!("q{i}"), value)).collect()
}

fn all_haemqol(value: &str) -> AnswerSet {
    (1..=41).map(|i| (format!("hq{i}"), value)).collect()
}

#[test]
fn registry_partitions_are_complete() {
    assert_eq!(question_count(InstrumentKind::Hal), 42);
    assert_eq!(question_count(InstrumentKind::HaemQolA), 41);

    // The seven domains are disjoint.
    let mut seen = std::collections::BTreeSet::new();
    for domain in &hal::DOMAINS {
        for q in domain.questions {
            assert!(seen.insert(*q), "{q} appears in two domains");
        }
    }

    // Special groups draw from the same pool.
    for group in &hal::SPECIAL_GROUPS {
        for q in group.questions {
            assert!(seen.contains(q), "{q} is not a HAL question");
        }
    }

    let mut hq_seen = std::collections::BTreeSet::new();
    for part in &haemqol::PARTS {
        for q in part.questions {
            assert!(hq_seen.insert(*q), "{q} appears in two parts");
        }
    }
}

#[test]
fn hal_analysis_at_the_extremes() {
    let AnalysisResult::Hal {
        total_score,
        max_score,
        domains,
        special_groups,
    } = analyze(InstrumentKind::Hal, &all_hal("6"))
    else {
        panic!("expected a HAL result");
    };

    assert_eq!(total_score, 100.0);
    assert_eq!(max_score, 100.0);
    assert_eq!(domains.len(), 7);
    assert_eq!(special_groups.len(), 3);
    assert!(domains.iter().all(|d| d.result.score == 100.0));
    assert!(special_groups.iter().all(|g| g.score == Some(100.0)));

    let AnalysisResult::Hal {
        total_score,
        domains,
        special_groups,
        ..
    } = analyze(InstrumentKind::Hal, &all_hal("1"))
    else {
        panic!("expected a HAL result");
    };
    assert_eq!(total_score, 0.0);
    assert!(domains.iter().all(|d| d.result.score == 0.0));
    assert!(special_groups.iter().all(|g| g.score == Some(0.0)));
}

#[test]
fn hal_domains_carry_registry_keys_and_names() {
    let AnalysisResult::Hal { domains, .. } = analyze(InstrumentKind::Hal, &all_hal("6")) else {
        panic!("expected a HAL result");
    };
    let keys: Vec<&str> = domains.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(
        keys,
        ["LSKS", "LEGS", "ARMS", "TRANS", "SELFC", "HOUSEH", "LEISPO"]
    );
    assert_eq!(domains[0].name, "Lying, sitting, kneeling, standing");
}

#[test]
fn unknown_answer_keys_are_ignored() {
    let mut answers = all_hal("6");
    answers.insert("q99", "1");
    answers.insert("hq1", "1");
    answers.insert("anything", "1");

    let result = analyze(InstrumentKind::Hal, &answers);
    assert_eq!(result.total_score(), 100.0);
}

#[test]
fn national_total_pools_raw_sums_instead_of_averaging_rounded_domains() {
    // One "2" and the rest "3" per domain. Per-domain scores round to one
    // decimal (e.g. LEGS 37.777... -> 37.8); the pooled total must come
    // from the raw sums (119 - 42) / 210 -> 36.666... -> 36.7, not from
    // the mean of the rounded domain scores (36.2).
    let mut answers = AnswerSet::new();
    for domain in &hal::DOMAINS {
        for (i, q) in domain.questions.iter().enumerate() {
            answers.insert(*q, if i == 0 { "2" } else { "3" });
        }
    }

    let AnalysisResult::Hal {
        total_score,
        domains,
        ..
    } = analyze(InstrumentKind::Hal, &answers)
    else {
        panic!("expected a HAL result");
    };

    assert_eq!(total_score, 36.7);

    let mean_of_rounded: f64 =
        domains.iter().map(|d| d.result.score).sum::<f64>() / domains.len() as f64;
    assert!(
        (total_score - mean_of_rounded).abs() > 0.4,
        "pooled total {total_score} should not equal the domain mean {mean_of_rounded}"
    );
}

#[test]
fn haemqol_analysis_sums_parts() {
    let AnalysisResult::HaemQolA {
        total_score,
        max_score,
        parts,
    } = analyze(InstrumentKind::HaemQolA, &all_haemqol("2"))
    else {
        panic!("expected a HAEMO-QoL-A result");
    };

    assert_eq!(parts.len(), 4);
    let scores: Vec<f64> = parts.iter().map(|p| p.result.score).collect();
    assert_eq!(scores, [18.0, 22.0, 22.0, 20.0]);
    assert_eq!(total_score, 82.0);
    assert_eq!(max_score, 164.0);
    assert!(parts.iter().all(|p| p.result.percentage == 50.0));
}

#[test]
fn empty_answer_set_yields_all_zero_results() {
    let empty = AnswerSet::new();

    let hal = analyze(InstrumentKind::Hal, &empty);
    assert_eq!(hal.instrument(), InstrumentKind::Hal);
    assert_eq!(hal.total_score(), 0.0);
    assert_eq!(hal.max_score(), 100.0);

    let AnalysisResult::HaemQolA {
        total_score,
        max_score,
        parts,
    } = analyze(InstrumentKind::HaemQolA, &empty)
    else {
        panic!("expected a HAEMO-QoL-A result");
    };
    assert_eq!(total_score, 0.0);
    assert_eq!(max_score, 0.0);
    assert!(parts.iter().all(|p| p.result.total == 0.0));
}

#[test]
fn analysis_result_serde_shape() {
    let value = serde_json::to_value(analyze(InstrumentKind::Hal, &all_hal("6"))).unwrap();
    assert_eq!(value["instrument"], "hal");
    assert_eq!(value["total_score"], 100.0);
    assert_eq!(value["domains"][0]["key"], "LSKS");

    let value = serde_json::to_value(analyze(InstrumentKind::HaemQolA, &all_haemqol("0"))).unwrap();
    assert_eq!(value["instrument"], "haemqol");
    assert_eq!(value["parts"][3]["key"], "PART4");
}
