//! Elder-care daily plan scoring: task catalog, rule tables, the condition matcher and the
//! plan evaluator, plus the generators and batch ledger built around them.

pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod generator;
pub mod ground_truth;
pub mod report;
pub mod rules;

#[cfg(test)]
mod tests;

pub use catalog::TaskCatalog;
pub use domain::{
    AssessmentRecord, DailyPlan, FieldValue, PlanTask, Qualification, TaskDefinition, TaskId,
    CAREGIVER_ROLE, NURSE_ROLE, NURSE_ROLE_LOCALIZED,
};
pub use evaluation::{
    condition_matches, DurationScore, EvaluatorConfig, EvaluatorConfigError, MandatoryScore,
    PlanEvaluator, QualificationIssue, QualificationScore, SafetyScore, ScoreBreakdown,
    ScoreResult,
};
pub use generator::{AdversarialGenerator, BaselineGenerator};
pub use ground_truth::{ground_truth, required_tasks_for_phrase, TriggeredRule};
pub use report::{EvaluationLedger, LedgerEntry, LedgerSummary};
pub use rules::{ContraindicationRule, RequirementRule, RuleBook, TaskGroup};
