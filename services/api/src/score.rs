use clap::Args;
use lead_scoring::config::ScoringLimits;
use lead_scoring::error::AppError;
use lead_scoring::scoring::{
    AnalyzeLeadRequest, CompanyInput, JobInput, LeadScoringEngine, LeadScoringService,
    ScoringCriteria,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Job title of the contact (omit to score an unknown title)
    #[arg(long)]
    pub(crate) title: Option<String>,
    /// Employee head count of the contact's company
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) employees: i64,
    /// Company industry, e.g. saas or retail
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Company location
    #[arg(long)]
    pub(crate) location: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Path to a JSON file of the form {"leads": [...]}
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Maximum number of leads accepted from the file
    #[arg(long, default_value_t = ScoringLimits::default().max_batch_size)]
    pub(crate) max_batch_size: usize,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        title,
        employees,
        industry,
        location,
    } = args;

    let request = AnalyzeLeadRequest::new(
        JobInput { title },
        CompanyInput {
            employees,
            industry,
            location,
        },
    );

    let service = LeadScoringService::default();
    let analysis = service.analyze_lead(request)?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let payload: serde_json::Value = serde_json::from_str(&raw)?;

    let service = LeadScoringService::new(
        LeadScoringEngine::standard(),
        ScoringLimits {
            max_batch_size: args.max_batch_size,
        },
    );
    let outcome = service.batch_analyze_value(payload)?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    if outcome.failed() > 0 {
        eprintln!(
            "{} of {} lead(s) could not be scored",
            outcome.failed(),
            outcome.processed
        );
    }
    Ok(())
}

pub(crate) fn run_criteria() -> Result<(), AppError> {
    println!(
        "{}",
        serde_json::to_string_pretty(ScoringCriteria::standard())?
    );
    Ok(())
}
