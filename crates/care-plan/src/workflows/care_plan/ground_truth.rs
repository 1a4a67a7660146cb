//! Human-readable "which rule fired" explanations.
//!
//! Matching here is loose substring containment in both directions. It exists for reports
//! only and must never feed a [`ScoreResult`](super::ScoreResult).

use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::{AssessmentRecord, FieldValue, TaskId};
use super::rules::RuleBook;

/// Assessment field that maps onto one or more requirement rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggeredRule {
    pub field: String,
    pub value: FieldValue,
    pub task_ids: Vec<TaskId>,
}

/// Union of tasks from every requirement rule whose key contains `phrase` or is contained by it.
pub fn required_tasks_for_phrase(rules: &RuleBook, phrase: &str) -> Vec<TaskId> {
    let mut tasks = BTreeSet::new();
    for rule in rules.requirements {
        if phrase.contains(rule.condition) || rule.condition.contains(phrase) {
            tasks.extend(rule.tasks.ids().iter().copied());
        }
    }
    tasks.into_iter().collect()
}

/// Walk the assessment fields and report the requirement rules each one appears to trigger.
///
/// Each field is tried as `"<label>: <value>"` first; ticked boxes fall back to the bare label.
pub fn ground_truth(rules: &RuleBook, assessment: &AssessmentRecord) -> Vec<TriggeredRule> {
    assessment
        .fields
        .iter()
        .filter_map(|(label, value)| {
            let mut task_ids = required_tasks_for_phrase(rules, &format!("{label}: {value}"));
            if task_ids.is_empty() && value.as_bool() == Some(true) {
                task_ids = required_tasks_for_phrase(rules, label);
            }

            (!task_ids.is_empty()).then(|| TriggeredRule {
                field: label.clone(),
                value: value.clone(),
                task_ids,
            })
        })
        .collect()
}
