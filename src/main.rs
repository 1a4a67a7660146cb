mod demo;
mod render;

use care_plan::config::AppConfig;
use care_plan::error::AppError;
use care_plan::telemetry;
use care_plan::workflows::care_plan::{
    AssessmentRecord, BaselineGenerator, DailyPlan, EvaluationLedger, PlanEvaluator, RuleBook,
};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Care Plan Benchmark",
    about = "Score elder-care daily plans against patient assessments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a baseline plan and an adversarial plan for a sample assessment (default command)
    Demo(demo::DemoArgs),
    /// Score a plan file against an assessment file
    Evaluate(EvaluateArgs),
    /// Print a rule-following plan for an assessment file as JSON
    Generate(GenerateArgs),
    /// Score several plan files against one assessment and summarize them
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Assessment JSON file
    #[arg(long)]
    assessment: PathBuf,
    /// Daily plan JSON file
    #[arg(long)]
    plan: PathBuf,
    /// Write the score result as JSON to this path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Assessment JSON file
    #[arg(long)]
    assessment: PathBuf,
    /// Target total duration in minutes (defaults to the configured target)
    #[arg(long)]
    target_duration: Option<u32>,
    /// Plan date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Assessment JSON file
    #[arg(long)]
    assessment: PathBuf,
    /// Daily plan JSON file; repeat for each plan
    #[arg(long = "plan", required = true)]
    plans: Vec<PathBuf>,
    /// Write one CSV row per plan to this path
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let evaluator = PlanEvaluator::new(config.evaluator.clone())?;
    info!(?config.environment, "care plan benchmark ready");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(demo::DemoArgs::default()));

    match command {
        Command::Demo(args) => demo::run_demo(&evaluator, args),
        Command::Evaluate(args) => run_evaluate(&evaluator, args),
        Command::Generate(args) => run_generate(&evaluator, args),
        Command::Batch(args) => run_batch(&evaluator, args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

fn run_evaluate(evaluator: &PlanEvaluator, args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        assessment,
        plan,
        output,
    } = args;

    let assessment: AssessmentRecord = load_json(&assessment)?;
    let plan: DailyPlan = load_json(&plan)?;

    render::print_assessment_items(&assessment);
    let result = evaluator.evaluate(&assessment, &plan);
    render::print_ground_truth(&RuleBook::standard(), &assessment);
    render::print_result(&result, "Evaluation result");

    if let Some(path) = output {
        let writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(writer, &result)?;
        println!("Result saved to: {}", path.display());
    }

    Ok(())
}

fn run_generate(evaluator: &PlanEvaluator, args: GenerateArgs) -> Result<(), AppError> {
    let GenerateArgs {
        assessment,
        target_duration,
        date,
    } = args;

    let assessment: AssessmentRecord = load_json(&assessment)?;
    let target = target_duration.unwrap_or(evaluator.config().duration_target);
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    let plan = BaselineGenerator::new(target).generate_plan(&assessment, date);
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn run_batch(evaluator: &PlanEvaluator, args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs {
        assessment,
        plans,
        csv,
    } = args;

    let assessment: AssessmentRecord = load_json(&assessment)?;
    let mut ledger = EvaluationLedger::new();

    for path in &plans {
        let plan: DailyPlan = load_json(path)?;
        let result = evaluator.evaluate(&assessment, &plan);
        ledger.record(path.display().to_string(), &result);
    }

    render::print_ledger(&ledger);

    if let Some(path) = csv {
        ledger.write_csv(BufWriter::new(File::create(&path)?))?;
        println!("Batch report saved to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn batch_requires_at_least_one_plan() {
        let parsed = Cli::try_parse_from(["care-plan-bench", "batch", "--assessment", "a.json"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("2026-01-16").is_ok());
        assert!(parse_date("16/01/2026").is_err());
    }

    #[test]
    fn load_json_reads_intake_files() {
        let path = std::env::temp_dir().join(format!(
            "care-plan-bench-assessment-{}.json",
            std::process::id()
        ));
        let mut file = File::create(&path).expect("temp file");
        write!(
            file,
            r#"{{"assessment_id": "ASSESS_009", "assessment_data": {{"Fall risk": true}}}}"#
        )
        .expect("write assessment");

        let assessment: AssessmentRecord = load_json(&path).expect("assessment loads");
        std::fs::remove_file(&path).ok();

        assert_eq!(assessment.id, "ASSESS_009");
        assert!(assessment.fields.contains_key("Fall risk"));
    }
}
