use crate::workflows::care_plan::EvaluatorConfig;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the benchmark.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub evaluator: EvaluatorConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = EvaluatorConfig::default();
        let evaluator = EvaluatorConfig {
            mandatory_weight: env_number("CAREPLAN_MANDATORY_WEIGHT", defaults.mandatory_weight)?,
            duration_weight: env_number("CAREPLAN_DURATION_WEIGHT", defaults.duration_weight)?,
            safety_weight: env_number("CAREPLAN_SAFETY_WEIGHT", defaults.safety_weight)?,
            duration_min: env_number("CAREPLAN_DURATION_MIN", defaults.duration_min)?,
            duration_max: env_number("CAREPLAN_DURATION_MAX", defaults.duration_max)?,
            duration_target: env_number("CAREPLAN_DURATION_TARGET", defaults.duration_target)?,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            evaluator,
        })
    }
}

fn env_number<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be numeric (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
