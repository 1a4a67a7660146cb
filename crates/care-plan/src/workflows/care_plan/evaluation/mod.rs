mod config;
pub mod matcher;
mod policy;
mod rules;

pub use config::{EvaluatorConfig, EvaluatorConfigError};
pub use matcher::condition_matches;

use super::catalog::TaskCatalog;
use super::domain::{AssessmentRecord, DailyPlan, TaskId};
use super::rules::RuleBook;
use policy::decide_outcome;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Stateless evaluator that scores a daily plan against an assessment.
#[derive(Debug, Clone)]
pub struct PlanEvaluator {
    config: EvaluatorConfig,
    rules: RuleBook,
    catalog: TaskCatalog,
}

impl PlanEvaluator {
    pub fn new(config: EvaluatorConfig) -> Result<Self, EvaluatorConfigError> {
        Self::with_tables(config, RuleBook::standard(), TaskCatalog::standard())
    }

    pub fn with_tables(
        config: EvaluatorConfig,
        rules: RuleBook,
        catalog: TaskCatalog,
    ) -> Result<Self, EvaluatorConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rules,
            catalog,
        })
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn evaluate(&self, assessment: &AssessmentRecord, plan: &DailyPlan) -> ScoreResult {
        let plan_task_ids = plan.task_ids();

        let mandatory = rules::score_mandatory(assessment, &plan_task_ids, self.rules.requirements);
        let safety =
            rules::score_safety(assessment, &plan_task_ids, self.rules.contraindications);
        let duration = rules::score_duration(plan, &self.config);
        let qualification = rules::score_qualification(plan, &self.catalog);

        debug!(
            assessment = %assessment.id,
            mandatory = mandatory.score,
            safety = safety.score,
            duration = duration.score,
            qualification = qualification.score,
            "sub-scores computed"
        );

        let breakdown = ScoreBreakdown {
            mandatory,
            safety,
            duration,
            qualification,
        };
        let verdict = decide_outcome(&breakdown, &self.config);

        if verdict.passed {
            info!(
                assessment = %assessment.id,
                overall = verdict.overall_score,
                "care plan evaluated"
            );
        } else {
            warn!(
                assessment = %assessment.id,
                overall = verdict.overall_score,
                errors = verdict.errors.len(),
                "care plan failed evaluation"
            );
        }

        ScoreResult {
            overall_score: verdict.overall_score,
            breakdown,
            passed: verdict.passed,
            warnings: verdict.warnings,
            errors: verdict.errors,
        }
    }
}

impl Default for PlanEvaluator {
    fn default() -> Self {
        Self {
            config: EvaluatorConfig::default(),
            rules: RuleBook::standard(),
            catalog: TaskCatalog::standard(),
        }
    }
}

/// Share of triggered mandatory tasks present in the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandatoryScore {
    pub score: f64,
    pub coverage: f64,
    pub missing: Vec<TaskId>,
}

/// Binary safety score plus the contraindicated tasks found in the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyScore {
    pub score: f64,
    pub violations: Vec<TaskId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationScore {
    pub score: f64,
    pub minutes: u64,
    pub target: u32,
}

/// Nurse-only task handed to a non-nurse role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationIssue {
    pub task_id: TaskId,
    pub task_name: String,
    pub required: String,
    pub assigned: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationScore {
    pub score: f64,
    pub issues: Vec<QualificationIssue>,
}

/// Per-dimension scores with the evidence behind each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub mandatory: MandatoryScore,
    pub safety: SafetyScore,
    pub duration: DurationScore,
    pub qualification: QualificationScore,
}

/// Evaluation output; recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall_score: f64,
    pub breakdown: ScoreBreakdown,
    pub passed: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}
