//! Rule matching and scoring engine for elder-care daily task plans.
//!
//! The core lives in [`workflows::care_plan::evaluation`]: a condition matcher that decides
//! whether an assessment triggers a policy rule, and a [`PlanEvaluator`] that folds the
//! triggered rules into a weighted, penalized score.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

pub use workflows::care_plan::{
    AssessmentRecord, DailyPlan, PlanEvaluator, PlanTask, ScoreResult, TaskCatalog,
};
