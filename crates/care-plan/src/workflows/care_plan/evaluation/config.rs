use serde::{Deserialize, Serialize};

const WEIGHT_TOLERANCE: f64 = 0.01;

/// Scoring weights and the acceptable duration window for a daily plan.
///
/// The three weights must sum to 1.0; qualification is applied as a penalty instead of a
/// weight. No ordering is enforced between the duration bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub mandatory_weight: f64,
    pub duration_weight: f64,
    pub safety_weight: f64,
    pub duration_min: u32,
    pub duration_max: u32,
    pub duration_target: u32,
}

impl EvaluatorConfig {
    pub fn weight_sum(&self) -> f64 {
        self.mandatory_weight + self.duration_weight + self.safety_weight
    }

    pub fn validate(&self) -> Result<(), EvaluatorConfigError> {
        for (name, weight) in [
            ("mandatory_weight", self.mandatory_weight),
            ("duration_weight", self.duration_weight),
            ("safety_weight", self.safety_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(EvaluatorConfigError::InvalidWeight { name, weight });
            }
        }

        let sum = self.weight_sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(EvaluatorConfigError::WeightSum { sum });
        }

        Ok(())
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            mandatory_weight: 0.5,
            duration_weight: 0.3,
            safety_weight: 0.2,
            duration_min: 100,
            duration_max: 140,
            duration_target: 120,
        }
    }
}

/// Raised when an evaluator is built from an unusable configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluatorConfigError {
    #[error("weights must sum to 1.0, current sum is {sum}")]
    WeightSum { sum: f64 },
    #[error("{name} must be a non-negative number (found {weight})")]
    InvalidWeight { name: &'static str, weight: f64 },
}
