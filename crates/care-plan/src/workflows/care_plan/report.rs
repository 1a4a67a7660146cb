//! Batch reporting over many evaluations.

use std::io::Write;

use serde::Serialize;

use super::evaluation::ScoreResult;

/// Caller-owned accumulator of evaluation results for a later batch report.
#[derive(Debug, Default, Clone)]
pub struct EvaluationLedger {
    entries: Vec<LedgerEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub label: String,
    pub result: ScoreResult,
}

/// Aggregate view over every recorded evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub evaluated: usize,
    pub passed: usize,
    pub failed: usize,
    pub mean_score: f64,
    pub safety_failures: usize,
    pub qualification_failures: usize,
}

/// One CSV line per recorded evaluation.
#[derive(Debug, Serialize)]
struct LedgerRow<'a> {
    label: &'a str,
    overall_score: f64,
    passed: bool,
    mandatory_score: f64,
    safety_score: f64,
    duration_score: f64,
    qualification_score: f64,
    duration_minutes: u64,
    missing_tasks: String,
    safety_violations: String,
    qualification_issues: usize,
}

impl EvaluationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: impl Into<String>, result: &ScoreResult) {
        self.entries.push(LedgerEntry {
            label: label.into(),
            result: result.clone(),
        });
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> LedgerSummary {
        let evaluated = self.entries.len();
        let passed = self
            .entries
            .iter()
            .filter(|entry| entry.result.passed)
            .count();
        let mean_score = if evaluated == 0 {
            0.0
        } else {
            let total: f64 = self
                .entries
                .iter()
                .map(|entry| entry.result.overall_score)
                .sum();
            (total / evaluated as f64 * 1000.0).round() / 1000.0
        };

        LedgerSummary {
            evaluated,
            passed,
            failed: evaluated - passed,
            mean_score,
            safety_failures: self
                .entries
                .iter()
                .filter(|entry| !entry.result.breakdown.safety.violations.is_empty())
                .count(),
            qualification_failures: self
                .entries
                .iter()
                .filter(|entry| !entry.result.breakdown.qualification.issues.is_empty())
                .count(),
        }
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for entry in &self.entries {
            let breakdown = &entry.result.breakdown;
            csv_writer.serialize(LedgerRow {
                label: &entry.label,
                overall_score: entry.result.overall_score,
                passed: entry.result.passed,
                mandatory_score: breakdown.mandatory.score,
                safety_score: breakdown.safety.score,
                duration_score: breakdown.duration.score,
                qualification_score: breakdown.qualification.score,
                duration_minutes: breakdown.duration.minutes,
                missing_tasks: join_ids(&breakdown.mandatory.missing),
                safety_violations: join_ids(&breakdown.safety.violations),
                qualification_issues: breakdown.qualification.issues.len(),
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
