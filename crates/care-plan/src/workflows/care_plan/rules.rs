use super::domain::TaskId;

/// Task ids attached to a requirement rule.
///
/// `AnyOf` describes a rule satisfied by one of its tasks. Scoring currently treats both
/// shapes as `AllOf`; see `evaluation::rules::score_mandatory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskGroup {
    AllOf(&'static [TaskId]),
    AnyOf(&'static [TaskId]),
}

impl TaskGroup {
    pub const fn ids(&self) -> &'static [TaskId] {
        match *self {
            TaskGroup::AllOf(ids) | TaskGroup::AnyOf(ids) => ids,
        }
    }
}

/// Condition → tasks a compliant plan must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementRule {
    pub condition: &'static str,
    pub tasks: TaskGroup,
}

/// Condition → tasks a plan must not contain while the condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContraindicationRule {
    pub condition: &'static str,
    pub tasks: &'static [TaskId],
}

/// Immutable pair of rule tables consulted by the evaluator and the generators.
#[derive(Debug, Clone, Copy)]
pub struct RuleBook {
    pub requirements: &'static [RequirementRule],
    pub contraindications: &'static [ContraindicationRule],
}

impl RuleBook {
    pub fn standard() -> Self {
        Self {
            requirements: &REQUIREMENT_RULES,
            contraindications: &CONTRAINDICATION_RULES,
        }
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::standard()
    }
}

const fn all_of(condition: &'static str, tasks: &'static [TaskId]) -> RequirementRule {
    RequirementRule {
        condition,
        tasks: TaskGroup::AllOf(tasks),
    }
}

static REQUIREMENT_RULES: [RequirementRule; 19] = [
    // diet
    all_of("Dietary habit: Low sugar or sugar-free", &[7, 36]),
    all_of("Dietary habit: Low salt", &[7]),
    all_of("Allergy: Food allergy", &[7]),
    all_of("Allergy: Drug allergy", &[18]),
    all_of("Choking risk", &[7]),
    all_of("Aspiration risk", &[7]),
    // mobility and safety
    all_of("Fall risk", &[23, 21]),
    all_of("Gait abnormality", &[21, 23]),
    all_of("Mobility: Partially unable", &[21, 28]),
    // skin
    all_of("Skin integrity: Impaired", &[22, 25, 37]),
    all_of("Pressure ulcer risk: High", &[19, 25]),
    // hygiene
    all_of("Clothing cleanliness: Poor", &[9, 15]),
    all_of("Body moisture", &[10, 12, 25]),
    // medical care
    all_of("Indwelling catheter: Yes", &[26]),
    all_of("Need blood glucose monitoring", &[36]),
    all_of("Need physical cooling", &[31]),
    all_of("Need oxygen", &[33]),
    all_of("Need PICC maintenance", &[42]),
    all_of("Severe constipation", &[28]),
];

static CONTRAINDICATION_RULES: [ContraindicationRule; 4] = [
    // bedridden patients are never scheduled for walking
    ContraindicationRule {
        condition: "Mobility: Completely unable",
        tasks: &[21],
    },
    ContraindicationRule {
        condition: "Dysphagia",
        tasks: &[7],
    },
    ContraindicationRule {
        condition: "No catheter",
        tasks: &[26],
    },
    ContraindicationRule {
        condition: "No ostomy",
        tasks: &[27],
    },
];
