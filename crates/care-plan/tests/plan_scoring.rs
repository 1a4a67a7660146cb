use care_plan::workflows::care_plan::{
    ground_truth, AssessmentRecord, DailyPlan, EvaluationLedger, EvaluatorConfig, FieldValue,
    PlanEvaluator, RuleBook, ScoreResult,
};
use serde_json::json;

fn load_assessment(value: serde_json::Value) -> AssessmentRecord {
    serde_json::from_value(value).expect("assessment deserializes")
}

fn load_plan(value: serde_json::Value) -> DailyPlan {
    serde_json::from_value(value).expect("plan deserializes")
}

fn walking_plan(total_duration: u32) -> serde_json::Value {
    json!({
        "date": "2026-01-16",
        "tasks": [
            {
                "task_id": 21,
                "name": "Walking and stair climbing",
                "min_duration": 20,
                "qualification": "Any",
                "assigned_to": "Caregiver"
            },
            {
                "task_id": 23,
                "name": "Cognitive function support and companionship",
                "min_duration": 20,
                "qualification": "Any",
                "assigned_to": "Caregiver"
            }
        ],
        "total_duration": total_duration
    })
}

#[test]
fn intake_form_json_is_accepted() {
    let assessment = load_assessment(json!({
        "assessment_id": "ASSESS_001",
        "patient_info": { "name": "Mr. Zhang", "age": 75 },
        "assessment_data": {
            "Fall risk": true,
            "Clothing neatness": 2,
            "Diet": "Low salt",
            "Notes": null
        },
        "clothing_neatness": 2,
        "fall_risk": true
    }));

    assert_eq!(assessment.id, "ASSESS_001");
    assert_eq!(
        assessment.get_field_value("Fall risk"),
        Some(FieldValue::Boolean(true))
    );
    assert_eq!(
        assessment.get_field_value("Clothing neatness"),
        Some(FieldValue::Number(2.0))
    );
    assert_eq!(assessment.get_field_value("Notes"), None);
    assert_eq!(
        assessment.get_field_value("clothing_neatness"),
        Some(FieldValue::Number(2.0))
    );
    assert_eq!(assessment.patient_metadata["age"], json!(75));
}

#[test]
fn fall_risk_scenario_passes_end_to_end() {
    let evaluator = PlanEvaluator::new(EvaluatorConfig::default()).expect("valid weights");
    let assessment = load_assessment(json!({
        "assessment_id": "A",
        "assessment_data": { "Fall risk": true }
    }));

    let result = evaluator.evaluate(&assessment, &load_plan(walking_plan(120)));

    assert_eq!(result.overall_score, 1.0);
    assert!(result.passed);
}

#[test]
fn bedridden_scenario_fails_on_safety() {
    let evaluator = PlanEvaluator::default();
    let assessment = load_assessment(json!({
        "assessment_id": "C",
        "assessment_data": { "Mobility: Completely unable": true }
    }));

    let result = evaluator.evaluate(&assessment, &load_plan(walking_plan(120)));

    assert_eq!(result.breakdown.safety.score, 0.0);
    assert_eq!(result.breakdown.safety.violations, vec![21]);
    assert!(!result.passed);
}

#[test]
fn score_result_round_trips_through_json() {
    let evaluator = PlanEvaluator::default();
    let assessment = load_assessment(json!({ "assessment_id": "B", "assessment_data": { "Fall risk": true } }));
    let result = evaluator.evaluate(&assessment, &load_plan(walking_plan(40)));

    let encoded = serde_json::to_value(&result).expect("result serializes");
    assert_eq!(encoded["breakdown"]["duration"]["score"], json!(0.4));
    assert_eq!(encoded["breakdown"]["duration"]["minutes"], json!(40));

    let decoded: ScoreResult = serde_json::from_value(encoded).expect("result deserializes");
    assert_eq!(decoded, result);
}

#[test]
fn ledger_and_ground_truth_compose_with_the_evaluator() {
    let evaluator = PlanEvaluator::default();
    let assessment = load_assessment(json!({
        "assessment_id": "batch",
        "assessment_data": { "Fall risk": true, "Need oxygen": true }
    }));
    let mut ledger = EvaluationLedger::new();

    for minutes in [40, 120, 200] {
        let result = evaluator.evaluate(&assessment, &load_plan(walking_plan(minutes)));
        ledger.record(format!("{minutes}-minutes"), &result);
    }

    let summary = ledger.summary();
    assert_eq!(summary.evaluated, 3);
    assert_eq!(summary.passed, 2);

    let triggered = ground_truth(&RuleBook::standard(), &assessment);
    let fields: Vec<&str> = triggered.iter().map(|rule| rule.field.as_str()).collect();
    assert_eq!(fields, vec!["Fall risk", "Need oxygen"]);
}
