use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Catalog identifier for a care task.
pub type TaskId = u32;

/// Role literal accepted for nurse-only tasks, compared case-insensitively.
pub const NURSE_ROLE: &str = "Nurse";
/// Localized spelling of the nurse role.
pub const NURSE_ROLE_LOCALIZED: &str = "护士";
/// Role assigned to tasks any caregiver may perform.
pub const CAREGIVER_ROLE: &str = "Caregiver";

/// Who is allowed to perform a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qualification {
    #[serde(rename = "Any")]
    Any,
    #[serde(rename = "Nurse")]
    NurseOnly,
}

impl Qualification {
    pub const fn label(self) -> &'static str {
        match self {
            Qualification::Any => "Any",
            Qualification::NurseOnly => "Nurse",
        }
    }

    /// Role a well-formed plan assigns to a task of this tier.
    pub const fn default_role(self) -> &'static str {
        match self {
            Qualification::Any => CAREGIVER_ROLE,
            Qualification::NurseOnly => NURSE_ROLE,
        }
    }
}

/// Immutable catalog entry describing a billable care task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDefinition {
    pub id: TaskId,
    pub name: &'static str,
    pub min_duration: u32,
    pub qualification: Qualification,
    pub description: Option<&'static str>,
}

/// Scalar captured on an assessment form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Text rendering used for literal comparisons (`True`, `3`, `2.5`, raw text).
    pub fn text_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Boolean(true) => f.write_str("True"),
            FieldValue::Boolean(false) => f.write_str("False"),
            // f64 Display already drops the fraction for integral values
            FieldValue::Number(value) => write!(f, "{value}"),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Patient assessment as captured by the intake form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    #[serde(alias = "assessment_id")]
    pub id: String,
    #[serde(default, alias = "patient_info")]
    pub patient_metadata: BTreeMap<String, serde_json::Value>,
    #[serde(
        default,
        alias = "assessment_data",
        deserialize_with = "null_values_as_absent"
    )]
    pub fields: BTreeMap<String, FieldValue>,
    #[serde(default)]
    pub eating_habits: Option<String>,
    #[serde(default)]
    pub clothing_neatness: Option<i64>,
    #[serde(default)]
    pub allergy_info: Option<String>,
    #[serde(default)]
    pub fall_risk: Option<bool>,
}

impl AssessmentRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(label.into(), value.into());
        self
    }

    /// Resolve a field label against `fields`, then against the shortcut attributes.
    pub fn get_field_value(&self, label: &str) -> Option<FieldValue> {
        self.fields
            .get(label)
            .cloned()
            .or_else(|| self.shortcut_value(label))
    }

    fn shortcut_value(&self, label: &str) -> Option<FieldValue> {
        match label {
            "eating_habits" => self.eating_habits.clone().map(FieldValue::Text),
            "clothing_neatness" => self.clothing_neatness.map(FieldValue::from),
            "allergy_info" => self.allergy_info.clone().map(FieldValue::Text),
            "fall_risk" => self.fall_risk.map(FieldValue::Boolean),
            _ => None,
        }
    }
}

fn null_values_as_absent<'de, D>(deserializer: D) -> Result<BTreeMap<String, FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Option<FieldValue>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| (label, value)))
        .collect())
}

/// A single scheduled task inside a daily plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTask {
    pub task_id: TaskId,
    pub name: String,
    pub min_duration: u32,
    pub qualification: Qualification,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, alias = "assigned_to")]
    pub assigned_role: Option<String>,
}

impl PlanTask {
    pub fn from_definition(definition: &TaskDefinition, role: impl Into<String>) -> Self {
        Self {
            task_id: definition.id,
            name: definition.name.to_string(),
            min_duration: definition.min_duration,
            qualification: definition.qualification,
            content: definition.description.map(str::to_string),
            assigned_role: Some(role.into()),
        }
    }
}

/// Candidate plan for one day of care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub date: NaiveDate,
    #[serde(default)]
    pub tasks: Vec<PlanTask>,
    #[serde(default)]
    pub total_duration: Option<u32>,
}

impl DailyPlan {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            tasks: Vec::new(),
            total_duration: None,
        }
    }

    pub fn task_ids(&self) -> BTreeSet<TaskId> {
        self.tasks.iter().map(|task| task.task_id).collect()
    }

    /// Reported total when present, otherwise the sum of minimum durations.
    pub fn minutes(&self) -> u64 {
        match self.total_duration {
            Some(total) => u64::from(total),
            None => self
                .tasks
                .iter()
                .map(|task| u64::from(task.min_duration))
                .sum(),
        }
    }
}
