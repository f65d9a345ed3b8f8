use clap::Args;
use serde::{Deserialize, Serialize};
use solar_leads::error::AppError;
use solar_leads::leads::{AirtableLeadImporter, LeadRecord, LeadScoringEngine};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) source: LeadSource,
    /// Include the normalized signals and weighted total with each score
    #[arg(long)]
    pub(crate) explain: bool,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub(crate) pretty: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub(crate) struct LeadSource {
    /// JSON file holding a single lead object or an array of leads
    #[arg(long)]
    pub(crate) json: Option<PathBuf>,
    /// Airtable CSV export of the leads table
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print full JSON scores instead of one-line summaries
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LeadPayload {
    Many(Vec<LeadRecord>),
    One(Box<LeadRecord>),
}

impl LeadPayload {
    fn into_leads(self) -> Vec<LeadRecord> {
        match self {
            LeadPayload::Many(leads) => leads,
            LeadPayload::One(lead) => vec![*lead],
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        source,
        explain,
        pretty,
    } = args;

    let leads = load_leads(&source)?;
    let engine = LeadScoringEngine::new();

    for lead in &leads {
        let line = if explain {
            render_json(&engine.evaluate(lead), pretty)?
        } else {
            render_json(&engine.score(lead), pretty)?
        };
        println!("{line}");
    }

    Ok(())
}

fn load_leads(source: &LeadSource) -> Result<Vec<LeadRecord>, AppError> {
    match (&source.json, &source.csv) {
        (Some(path), _) => load_json_leads(path),
        (None, Some(path)) => Ok(AirtableLeadImporter::from_path(path)?),
        (None, None) => Ok(Vec::new()),
    }
}

fn load_json_leads(path: &Path) -> Result<Vec<LeadRecord>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let payload: LeadPayload = serde_json::from_str(&raw)?;
    Ok(payload.into_leads())
}

fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = LeadScoringEngine::new();

    println!("Solar lead qualification demo");
    for (label, lead) in sample_leads() {
        let score = engine.score(&lead);
        if args.json {
            println!("{label}: {}", render_json(&score, false)?);
        } else {
            println!("- {label}: {}", score.summary());
            if !score.pain_points.is_empty() {
                let tags = score
                    .pain_points
                    .iter()
                    .map(|tag| tag.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("  pain points: {tags}");
            }
        }
    }

    Ok(())
}

fn sample_leads() -> Vec<(&'static str, LeadRecord)> {
    vec![
        (
            "Move-up homeowner",
            LeadRecord {
                source: Some("Solar IQ".to_string()),
                roof_type: Some("Composition shingle".to_string()),
                roof_age_years: Some(4),
                shading_level: Some("Full sun".to_string()),
                hoa_allows_solar: Some("No HOA".to_string()),
                distance_minutes: Some(25),
                monthly_bill_raw: Some("$400–$600".to_string()),
                true_up_band: Some("$500+".to_string()),
                credit_band: Some("720+".to_string()),
                motivation: Some("Saving money".to_string()),
                decision_style: Some("Researches everything".to_string()),
                ..LeadRecord::default()
            },
        ),
        (
            "Small landlord",
            LeadRecord {
                source: Some("Scraped Property".to_string()),
                is_landlord: Some(true),
                property_count: Some(2),
                roof_type: Some("Tile".to_string()),
                roof_age_years: Some(9),
                shading_level: Some("Mostly sunny".to_string()),
                monthly_bill_raw: Some("$200-$300".to_string()),
                credit_band: Some("650-719".to_string()),
                motivation: Some("Backup power during outages".to_string()),
                decision_style: Some("Trusts the expert".to_string()),
                ..LeadRecord::default()
            },
        ),
        (
            "Bargain hunter",
            LeadRecord {
                roof_type: Some("Flat".to_string()),
                roof_age_years: Some(3),
                shading_level: Some("Partial shade".to_string()),
                monthly_bill: Some(180.0),
                motivation: Some("Environment".to_string()),
                decision_style: Some("Only cares about price".to_string()),
                ..LeadRecord::default()
            },
        ),
        (
            "Out-of-area cabin",
            LeadRecord {
                roof_type: Some("Cedar wood shake".to_string()),
                shading_level: Some("Heavy shade".to_string()),
                distance_minutes: Some(140),
                monthly_bill_raw: Some("$90".to_string()),
                ..LeadRecord::default()
            },
        ),
    ]
}
