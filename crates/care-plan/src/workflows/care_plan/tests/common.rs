use chrono::NaiveDate;

use crate::workflows::care_plan::domain::{
    AssessmentRecord, DailyPlan, PlanTask, TaskId, CAREGIVER_ROLE,
};
use crate::workflows::care_plan::evaluation::{EvaluatorConfig, PlanEvaluator};
use crate::workflows::care_plan::TaskCatalog;

pub(super) const EPSILON: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn plan_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 16).expect("valid date")
}

pub(super) fn evaluator() -> PlanEvaluator {
    PlanEvaluator::new(EvaluatorConfig::default()).expect("default weights are valid")
}

pub(super) fn plan_task(task_id: TaskId, role: &str) -> PlanTask {
    let definition = TaskCatalog::standard()
        .lookup(task_id)
        .expect("task present in catalog");
    PlanTask::from_definition(definition, role)
}

pub(super) fn plan(assignments: &[(TaskId, &str)], total_duration: Option<u32>) -> DailyPlan {
    DailyPlan {
        date: plan_date(),
        tasks: assignments
            .iter()
            .map(|(task_id, role)| plan_task(*task_id, role))
            .collect(),
        total_duration,
    }
}

pub(super) fn caregiver_plan(task_ids: &[TaskId], total_duration: Option<u32>) -> DailyPlan {
    let assignments: Vec<(TaskId, &str)> =
        task_ids.iter().map(|id| (*id, CAREGIVER_ROLE)).collect();
    plan(&assignments, total_duration)
}

pub(super) fn fall_risk_assessment() -> AssessmentRecord {
    AssessmentRecord::new("ASSESS_FALL").with_field("Fall risk", true)
}

pub(super) fn bedridden_assessment() -> AssessmentRecord {
    AssessmentRecord::new("ASSESS_BED").with_field("Mobility: Completely unable", true)
}

pub(super) fn sample_assessment() -> AssessmentRecord {
    let mut assessment = AssessmentRecord::new("ASSESS_001")
        .with_field("Dietary habit: Low sugar or sugar-free", true)
        .with_field("Clothing cleanliness: Poor", true)
        .with_field("Allergy: Food allergy", true)
        .with_field("Fall risk", true)
        .with_field("Mobility: Partially unable", true)
        .with_field("Toileting ability: Partially unable", true)
        .with_field("Bathing ability: Completely unable", true)
        .with_field("Indwelling catheter: No", false)
        .with_field("Need blood glucose monitoring", true);
    assessment.eating_habits = Some("Low sugar or sugar-free".to_string());
    assessment.clothing_neatness = Some(2);
    assessment.allergy_info = Some("Food allergy".to_string());
    assessment.fall_risk = Some(true);
    assessment
}
