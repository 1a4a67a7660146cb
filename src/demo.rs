use crate::render;
use care_plan::error::AppError;
use care_plan::workflows::care_plan::{
    AdversarialGenerator, AssessmentRecord, BaselineGenerator, PlanEvaluator, RuleBook,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use serde_json::json;
use tracing::warn;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Plan date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Skip the adversarial plan portion of the demo
    #[arg(long)]
    pub(crate) skip_adversarial: bool,
}

pub(crate) fn sample_assessment() -> AssessmentRecord {
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

    assessment
        .patient_metadata
        .insert("name".to_string(), json!("Mr. Zhang"));
    assessment.patient_metadata.insert("age".to_string(), json!(75));
    assessment
        .patient_metadata
        .insert("gender".to_string(), json!("Male"));

    assessment.eating_habits = Some("Low sugar or sugar-free".to_string());
    assessment.clothing_neatness = Some(2);
    assessment.allergy_info = Some("Food allergy".to_string());
    assessment.fall_risk = Some(true);
    assessment
}

pub(crate) fn run_demo(evaluator: &PlanEvaluator, args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        date,
        skip_adversarial,
    } = args;
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let assessment = sample_assessment();

    println!("Care plan benchmark demo");
    render::print_assessment_items(&assessment);

    let generator = BaselineGenerator::new(evaluator.config().duration_target);
    let plan = generator.generate_plan(&assessment, date);
    let result = evaluator.evaluate(&assessment, &plan);

    render::print_ground_truth(&RuleBook::standard(), &assessment);
    render::print_result(&result, "Evaluation result: baseline plan");

    if skip_adversarial {
        return Ok(());
    }

    let adversarial = AdversarialGenerator::new().generate_plan(&assessment, date);
    let adversarial_result = evaluator.evaluate(&assessment, &adversarial);
    if adversarial_result.passed {
        warn!("adversarial plan passed evaluation");
    }
    render::print_result(&adversarial_result, "Evaluation result: adversarial plan");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_assessment_baseline_passes_and_adversarial_fails() {
        let evaluator = PlanEvaluator::default();
        let assessment = sample_assessment();
        let date = NaiveDate::from_ymd_opt(2026, 1, 16).expect("valid date");

        let baseline = BaselineGenerator::default().generate_plan(&assessment, date);
        let adversarial = AdversarialGenerator::new().generate_plan(&assessment, date);

        assert!(evaluator.evaluate(&assessment, &baseline).passed);
        assert!(!evaluator.evaluate(&assessment, &adversarial).passed);
    }
}
