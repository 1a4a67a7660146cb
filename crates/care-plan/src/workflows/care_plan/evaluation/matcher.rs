use super::super::domain::{AssessmentRecord, FieldValue};

const AFFIRMATIVE: [&str; 3] = ["yes", "true", "是"];
const NEGATIVE: [&str; 3] = ["no", "false", "否"];

/// Decide whether `record` satisfies the rule key `condition`.
///
/// Keys take the form `"<field label>: <expected>"`. Keys without a colon never match and
/// parse failures degrade to `false`.
pub fn condition_matches(record: &AssessmentRecord, condition: &str) -> bool {
    let Some((field_label, expected)) = condition.split_once(':') else {
        return false;
    };

    // checkbox-style answers store the whole rule key as the field label
    if record.fields.get(condition).is_some_and(is_affirmative) {
        return true;
    }

    let field_label = field_label.trim();
    let expected = expected.trim();

    let Some(actual) = record.get_field_value(field_label) else {
        return false;
    };

    compare(&actual, expected)
}

fn compare(actual: &FieldValue, expected: &str) -> bool {
    if let Some(threshold) = expected.strip_prefix(">=") {
        return match (parse_threshold(threshold), actual.as_number()) {
            (Some(threshold), Some(value)) => value >= threshold,
            _ => false,
        };
    }

    if let Some(threshold) = expected.strip_prefix('<') {
        return match (parse_threshold(threshold), actual.as_number()) {
            (Some(threshold), Some(value)) => value < threshold,
            _ => false,
        };
    }

    let lowered = expected.to_lowercase();
    if AFFIRMATIVE.contains(&lowered.as_str()) {
        return is_affirmative(actual);
    }
    if NEGATIVE.contains(&lowered.as_str()) {
        return actual.as_bool() == Some(false) || is_literal(actual, &NEGATIVE);
    }

    let text = actual.text_form();
    text == expected || text.contains(expected)
}

fn is_affirmative(value: &FieldValue) -> bool {
    value.as_bool() == Some(true) || is_literal(value, &AFFIRMATIVE)
}

fn is_literal(value: &FieldValue, literals: &[&str]) -> bool {
    let text = value.text_form().to_lowercase();
    literals.contains(&text.as_str())
}

fn parse_threshold(raw: &str) -> Option<f64> {
    raw.trim().parse::<i64>().ok().map(|threshold| threshold as f64)
}
