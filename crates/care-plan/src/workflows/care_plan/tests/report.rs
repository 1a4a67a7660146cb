use super::common::*;
use crate::workflows::care_plan::domain::AssessmentRecord;
use crate::workflows::care_plan::report::EvaluationLedger;

#[test]
fn empty_ledger_summarizes_to_zero() {
    let ledger = EvaluationLedger::new();
    let summary = ledger.summary();

    assert!(ledger.is_empty());
    assert_eq!(summary.evaluated, 0);
    assert_eq!(summary.passed, 0);
    assert_close(summary.mean_score, 0.0);
}

#[test]
fn ledger_tracks_pass_and_failure_modes() {
    let evaluator = evaluator();
    let mut ledger = EvaluationLedger::new();

    let good = evaluator.evaluate(&fall_risk_assessment(), &caregiver_plan(&[21, 23], Some(120)));
    let unsafe_plan =
        evaluator.evaluate(&bedridden_assessment(), &caregiver_plan(&[21, 23], Some(120)));
    let unqualified = evaluator.evaluate(
        &AssessmentRecord::new("nurse"),
        &caregiver_plan(&[35], Some(120)),
    );

    ledger.record("good", &good);
    ledger.record("unsafe", &unsafe_plan);
    ledger.record("unqualified", &unqualified);

    let summary = ledger.summary();
    assert_eq!(ledger.len(), 3);
    assert_eq!(summary.evaluated, 3);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.safety_failures, 1);
    assert_eq!(summary.qualification_failures, 1);
    assert_close(summary.mean_score, 0.917);
    assert_eq!(ledger.entries()[1].label, "unsafe");
}

#[test]
fn ledger_exports_one_csv_row_per_evaluation() {
    let evaluator = evaluator();
    let mut ledger = EvaluationLedger::new();
    let result =
        evaluator.evaluate(&bedridden_assessment(), &caregiver_plan(&[21, 23], Some(120)));
    ledger.record("bedridden", &result);

    let mut buffer = Vec::new();
    ledger.write_csv(&mut buffer).expect("csv written");
    let csv = String::from_utf8(buffer).expect("utf8 output");
    let mut lines = csv.lines();

    let header = lines.next().expect("header row");
    assert!(header.starts_with("label,overall_score,passed"));
    let row = lines.next().expect("data row");
    assert!(row.starts_with("bedridden,0.8,false"));
    assert!(row.contains(",21,"));
    assert!(lines.next().is_none());
}
