use care_plan::workflows::care_plan::{
    ground_truth, AssessmentRecord, EvaluationLedger, FieldValue, RuleBook, ScoreResult,
    TaskCatalog,
};

pub(crate) fn print_assessment_items(assessment: &AssessmentRecord) {
    println!("\nAssessment {}", assessment.id);

    if !assessment.patient_metadata.is_empty() {
        let describe = |key: &str| {
            assessment
                .patient_metadata
                .get(key)
                .map(|value| match value {
                    serde_json::Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .unwrap_or_else(|| "N/A".to_string())
        };
        println!(
            "Patient: {}, age {}, gender {}",
            describe("name"),
            describe("age"),
            describe("gender")
        );
    }

    println!("Selected items");
    for (label, value) in &assessment.fields {
        let selected = match value {
            FieldValue::Boolean(flag) => *flag,
            FieldValue::Number(number) => *number != 0.0,
            FieldValue::Text(text) => !text.is_empty(),
        };
        if selected {
            println!("- {label}: {value}");
        }
    }
}

pub(crate) fn print_ground_truth(rules: &RuleBook, assessment: &AssessmentRecord) {
    let catalog = TaskCatalog::standard();
    let triggered = ground_truth(rules, assessment);

    println!("\nGround truth");
    if triggered.is_empty() {
        println!("No rules triggered from assessment data");
        return;
    }

    for rule in &triggered {
        let tasks: Vec<String> = rule
            .task_ids
            .iter()
            .map(|id| {
                let name = catalog.lookup(*id).map(|task| task.name).unwrap_or("Unknown");
                format!("[{id}] {name}")
            })
            .collect();
        println!("- {}: {} -> {}", rule.field, rule.value, tasks.join(", "));
    }
}

pub(crate) fn print_result(result: &ScoreResult, title: &str) {
    let breakdown = &result.breakdown;

    println!("\n{title}");
    println!(
        "Overall score: {:.3} ({})",
        result.overall_score,
        if result.passed { "PASSED" } else { "FAILED" }
    );
    println!(
        "Coverage {:.0}% | Safety {:.3} | Qualification {:.3} | Duration {:.3} ({} minutes)",
        breakdown.mandatory.coverage * 100.0,
        breakdown.safety.score,
        breakdown.qualification.score,
        breakdown.duration.score,
        breakdown.duration.minutes
    );

    if !breakdown.mandatory.missing.is_empty() {
        println!("Missing mandatory tasks: {:?}", breakdown.mandatory.missing);
    }
    if !breakdown.safety.violations.is_empty() {
        println!("Safety violations: {:?}", breakdown.safety.violations);
    }
    for issue in &breakdown.qualification.issues {
        println!(
            "- task {} ({}) requires {}, assigned to {}",
            issue.task_id, issue.task_name, issue.required, issue.assigned
        );
    }
    for warning in &result.warnings {
        println!("[warning] {warning}");
    }
    for error in &result.errors {
        println!("[error] {error}");
    }
}

pub(crate) fn print_ledger(ledger: &EvaluationLedger) {
    let summary = ledger.summary();

    println!("\nBatch summary");
    for entry in ledger.entries() {
        println!(
            "- {}: {:.3} ({})",
            entry.label,
            entry.result.overall_score,
            if entry.result.passed { "passed" } else { "failed" }
        );
    }
    println!(
        "{} evaluated, {} passed, {} failed, mean score {:.3}",
        summary.evaluated, summary.passed, summary.failed, summary.mean_score
    );
    println!(
        "{} with safety violations, {} with qualification issues",
        summary.safety_failures, summary.qualification_failures
    );
}
