//! Candidate plan producers used for demos and negative testing.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::catalog::TaskCatalog;
use super::domain::{AssessmentRecord, DailyPlan, PlanTask, TaskId, CAREGIVER_ROLE};
use super::evaluation::condition_matches;
use super::rules::{RuleBook, TaskGroup};

/// Hygiene and feeding tasks every baseline plan carries.
const BASIC_TASKS: [TaskId; 4] = [1, 3, 4, 7];
/// Filler tasks, in preference order, used to reach the target duration.
const OPTIONAL_TASKS: [TaskId; 6] = [2, 5, 6, 10, 11, 40];
/// How far past the target the filler may push the plan.
const FILL_HEADROOM_MINUTES: u32 = 20;

/// Rule-following generator that produces a plan the evaluator should accept.
#[derive(Debug, Clone)]
pub struct BaselineGenerator {
    target_duration: u32,
    rules: RuleBook,
    catalog: TaskCatalog,
}

impl BaselineGenerator {
    pub fn new(target_duration: u32) -> Self {
        Self {
            target_duration,
            rules: RuleBook::standard(),
            catalog: TaskCatalog::standard(),
        }
    }

    pub fn generate_plan(&self, assessment: &AssessmentRecord, date: NaiveDate) -> DailyPlan {
        let mut selected = BTreeSet::new();

        for rule in self.rules.requirements {
            if !condition_matches(assessment, rule.condition) {
                continue;
            }
            match rule.tasks {
                TaskGroup::AllOf(ids) => selected.extend(ids.iter().copied()),
                TaskGroup::AnyOf(ids) => selected.extend(ids.first().copied()),
            }
        }
        selected.extend(BASIC_TASKS);

        let mut plan = DailyPlan::new(date);
        let mut total: u32 = 0;

        for definition in selected.iter().filter_map(|id| self.catalog.lookup(*id)) {
            plan.tasks.push(PlanTask::from_definition(
                definition,
                definition.qualification.default_role(),
            ));
            total += definition.min_duration;
        }

        if total < self.target_duration {
            let ceiling = self.target_duration + FILL_HEADROOM_MINUTES;
            for definition in OPTIONAL_TASKS
                .iter()
                .filter(|id| !selected.contains(*id))
                .filter_map(|id| self.catalog.lookup(*id))
            {
                if total + definition.min_duration <= ceiling {
                    plan.tasks.push(PlanTask::from_definition(
                        definition,
                        definition.qualification.default_role(),
                    ));
                    total += definition.min_duration;
                }
            }
        }

        plan.total_duration = Some(total);
        plan
    }
}

impl Default for BaselineGenerator {
    fn default() -> Self {
        Self::new(120)
    }
}

/// Tasks whose duration the adversarial plan under-reports.
const SHORTENED_TASKS: [TaskId; 3] = [14, 26, 35];
/// Walking; contraindicated for bedridden patients.
const WALKING_TASK: TaskId = 21;
/// Head and face cleaning; deliberately dropped.
const OMITTED_TASK: TaskId = 1;
const UNDER_REPORTED_MINUTES: u32 = 50;

/// Generator that seeds plans with known policy errors so the evaluator can be shown to catch them.
///
/// The plan carries every requirement-rule task whether triggered or not, all nurse-only
/// tasks handed to caregivers, the walking task regardless of mobility, no head and face
/// cleaning, and an under-reported total duration.
#[derive(Debug, Clone, Default)]
pub struct AdversarialGenerator {
    rules: RuleBook,
    catalog: TaskCatalog,
}

impl AdversarialGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_plan(&self, _assessment: &AssessmentRecord, date: NaiveDate) -> DailyPlan {
        let mut selected: BTreeSet<TaskId> = self
            .rules
            .requirements
            .iter()
            .flat_map(|rule| rule.tasks.ids().iter().copied())
            .collect();
        selected.extend(self.catalog.nurse_only_ids());
        selected.insert(WALKING_TASK);
        selected.remove(&OMITTED_TASK);

        let mut plan = DailyPlan::new(date);
        let mut total: u32 = 0;

        for definition in selected.iter().filter_map(|id| self.catalog.lookup(*id)) {
            plan.tasks
                .push(PlanTask::from_definition(definition, CAREGIVER_ROLE));
            total += if SHORTENED_TASKS.contains(&definition.id) {
                definition.min_duration.saturating_sub(5).max(5)
            } else {
                definition.min_duration
            };
        }

        plan.total_duration = Some(total.saturating_sub(UNDER_REPORTED_MINUTES));
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::care_plan::domain::{Qualification, NURSE_ROLE};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 16).expect("valid date")
    }

    #[test]
    fn baseline_includes_basic_tasks_and_fills_to_target() {
        let generator = BaselineGenerator::new(120);
        let plan = generator.generate_plan(&AssessmentRecord::new("empty"), date());

        let ids = plan.task_ids();
        for id in BASIC_TASKS {
            assert!(ids.contains(&id), "basic task {id} missing");
        }
        let total = plan.total_duration.expect("total reported");
        assert_eq!(total, plan.tasks.iter().map(|t| t.min_duration).sum::<u32>());
        assert!(total <= 140);
        assert!(total >= 100);
    }

    #[test]
    fn baseline_assigns_nurse_only_tasks_to_nurses() {
        let generator = BaselineGenerator::default();
        let assessment =
            AssessmentRecord::new("catheter").with_field("Indwelling catheter: Yes", true);
        let plan = generator.generate_plan(&assessment, date());

        let catheter = plan
            .tasks
            .iter()
            .find(|task| task.task_id == 26)
            .expect("catheter care scheduled");
        assert_eq!(catheter.qualification, Qualification::NurseOnly);
        assert_eq!(catheter.assigned_role.as_deref(), Some(NURSE_ROLE));
    }

    #[test]
    fn adversarial_plan_carries_seeded_errors() {
        let plan = AdversarialGenerator::new().generate_plan(&AssessmentRecord::new("bad"), date());
        let ids = plan.task_ids();

        assert!(ids.contains(&WALKING_TASK));
        assert!(!ids.contains(&OMITTED_TASK));
        assert!(ids.contains(&35));
        assert!(plan
            .tasks
            .iter()
            .all(|task| task.assigned_role.as_deref() == Some(CAREGIVER_ROLE)));

        let summed: u32 = plan.tasks.iter().map(|task| task.min_duration).sum();
        assert!(plan.total_duration.expect("total reported") < summed);
    }
}
