use std::collections::BTreeSet;

use super::super::catalog::TaskCatalog;
use super::super::domain::{
    AssessmentRecord, DailyPlan, Qualification, TaskId, NURSE_ROLE, NURSE_ROLE_LOCALIZED,
};
use super::super::rules::{ContraindicationRule, RequirementRule};
use super::config::EvaluatorConfig;
use super::matcher::condition_matches;
use super::{DurationScore, MandatoryScore, QualificationIssue, QualificationScore, SafetyScore};
use tracing::debug;

/// Minutes past `duration_max` at which the duration score reaches zero.
const OVERRUN_WINDOW_MINUTES: f64 = 60.0;

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

// Every triggered rule is checked as an AND-group, `AnyOf` included.
pub(crate) fn score_mandatory(
    assessment: &AssessmentRecord,
    plan_task_ids: &BTreeSet<TaskId>,
    rules: &[RequirementRule],
) -> MandatoryScore {
    let triggered: Vec<&RequirementRule> = rules
        .iter()
        .filter(|rule| condition_matches(assessment, rule.condition))
        .collect();

    let required: BTreeSet<TaskId> = triggered
        .iter()
        .flat_map(|rule| rule.tasks.ids().iter().copied())
        .collect();

    if required.is_empty() {
        return MandatoryScore {
            score: 1.0,
            coverage: 1.0,
            missing: Vec::new(),
        };
    }

    let mut missing = BTreeSet::new();
    for rule in &triggered {
        debug!(condition = rule.condition, "requirement rule triggered");
        for task_id in rule.tasks.ids() {
            if !plan_task_ids.contains(task_id) {
                missing.insert(*task_id);
            }
        }
    }

    let covered = required.len() - missing.len();
    let coverage = round3((covered as f64 / required.len() as f64).clamp(0.0, 1.0));

    MandatoryScore {
        score: coverage,
        coverage,
        missing: missing.into_iter().collect(),
    }
}

pub(crate) fn score_safety(
    assessment: &AssessmentRecord,
    plan_task_ids: &BTreeSet<TaskId>,
    rules: &[ContraindicationRule],
) -> SafetyScore {
    let mut violations = Vec::new();

    for rule in rules {
        if !condition_matches(assessment, rule.condition) {
            continue;
        }
        debug!(condition = rule.condition, "contraindication rule triggered");
        violations.extend(
            rule.tasks
                .iter()
                .copied()
                .filter(|task_id| plan_task_ids.contains(task_id)),
        );
    }

    let score = if violations.is_empty() { 1.0 } else { 0.0 };
    SafetyScore { score, violations }
}

pub(crate) fn score_duration(plan: &DailyPlan, config: &EvaluatorConfig) -> DurationScore {
    let minutes = plan.minutes();
    let min = u64::from(config.duration_min);
    let max = u64::from(config.duration_max);

    let score = if minutes < min {
        minutes as f64 / min as f64
    } else if minutes > max {
        let excess = (minutes - max) as f64;
        1.0 - excess / OVERRUN_WINDOW_MINUTES
    } else {
        1.0
    };

    DurationScore {
        score: round3(score.clamp(0.0, 1.0)),
        minutes,
        target: config.duration_target,
    }
}

pub(crate) fn score_qualification(plan: &DailyPlan, catalog: &TaskCatalog) -> QualificationScore {
    let mut issues = Vec::new();

    for task in &plan.tasks {
        let Some(definition) = catalog.lookup(task.task_id) else {
            continue;
        };
        if definition.qualification != Qualification::NurseOnly {
            continue;
        }

        // unassigned tasks are left to the scheduler
        let Some(role) = task.assigned_role.as_deref().filter(|role| !role.is_empty()) else {
            continue;
        };

        if !is_nurse(role) {
            issues.push(QualificationIssue {
                task_id: task.task_id,
                task_name: task.name.clone(),
                required: definition.qualification.label().to_string(),
                assigned: role.to_string(),
            });
        }
    }

    let score = if issues.is_empty() { 1.0 } else { 0.0 };
    QualificationScore { score, issues }
}

fn is_nurse(role: &str) -> bool {
    role.eq_ignore_ascii_case(NURSE_ROLE) || role == NURSE_ROLE_LOCALIZED
}
