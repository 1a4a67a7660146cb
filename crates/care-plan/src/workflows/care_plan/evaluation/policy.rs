use super::config::EvaluatorConfig;
use super::rules::round3;
use super::ScoreBreakdown;

const PASS_THRESHOLD: f64 = 0.8;
const QUALIFICATION_PENALTY_PER_ISSUE: f64 = 0.05;
const QUALIFICATION_PENALTY_CAP: f64 = 0.2;

pub(crate) struct Verdict {
    pub overall_score: f64,
    pub passed: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// Fold the sub-scores into the overall score, pass flag and diagnostics.
///
/// Qualification never contributes a weight; each mismatch costs a capped penalty and any
/// mismatch fails the plan.
pub(crate) fn decide_outcome(breakdown: &ScoreBreakdown, config: &EvaluatorConfig) -> Verdict {
    let ScoreBreakdown {
        mandatory,
        safety,
        duration,
        qualification,
    } = breakdown;

    let mut overall = mandatory.score * config.mandatory_weight
        + duration.score * config.duration_weight
        + safety.score * config.safety_weight;

    if !qualification.issues.is_empty() {
        let penalty = (QUALIFICATION_PENALTY_PER_ISSUE * qualification.issues.len() as f64)
            .min(QUALIFICATION_PENALTY_CAP);
        overall = (overall - penalty).max(0.0);
    }
    let overall_score = round3(overall.clamp(0.0, 1.0));

    let passed = overall_score >= PASS_THRESHOLD
        && safety.violations.is_empty()
        && qualification.issues.is_empty();

    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    if !mandatory.missing.is_empty() {
        warnings.push(format!(
            "Missing {} mandatory tasks",
            mandatory.missing.len()
        ));
    }

    if !safety.violations.is_empty() {
        errors.push(format!(
            "Safety constraint violations: tasks {:?}",
            safety.violations
        ));
    }

    if !qualification.issues.is_empty() {
        errors.push(format!(
            "Qualification mismatch: {} tasks",
            qualification.issues.len()
        ));
    }

    if duration.minutes < u64::from(config.duration_min) {
        warnings.push(format!(
            "Total duration too short: {} minutes (recommended: {}-{} minutes)",
            duration.minutes, config.duration_min, config.duration_max
        ));
    } else if duration.minutes > u64::from(config.duration_max) {
        warnings.push(format!(
            "Total duration too long: {} minutes (recommended: {}-{} minutes)",
            duration.minutes, config.duration_min, config.duration_max
        ));
    }

    Verdict {
        overall_score,
        passed,
        warnings,
        errors,
    }
}
