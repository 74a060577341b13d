use anyhow::{Context, Result, bail};
use api_client::{CandidateClient, ClientConfig};
use candidates::CandidateSummary;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use pipeline::{FilterField, FilterOptions};
use search::ManualSearch;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Smart Assign - manual candidate search
#[derive(Parser)]
#[command(name = "smart-assign")]
#[command(about = "Search candidates by location, grade, clearance, availability, role and skills", long_about = None)]
struct Cli {
    /// Base URL of the candidate API (overrides SMART_ASSIGN_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Read candidates from a snapshot file instead of calling the API
    #[arg(long, global = true)]
    from_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter candidates and list the matches
    Search {
        #[command(flatten)]
        filters: FilterArgs,

        /// Show at most this many candidates
        #[arg(long)]
        limit: Option<usize>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the values each filter accepts
    Options {
        /// Print options as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save the candidate list to a JSON file
    Snapshot {
        /// Destination file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// One optional value per filter, given as an option label.
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Country, e.g. "UK"
    #[arg(long)]
    location: Option<String>,

    /// Department/grade, e.g. "G7"
    #[arg(long)]
    grade: Option<String>,

    /// SC, DV or NPPV2
    #[arg(long)]
    clearance: Option<String>,

    /// Minimum availability: ">= 25%", ">= 50%" or ">= 75%"
    #[arg(long)]
    availability: Option<String>,

    /// Latest CV title, e.g. "Data Engineer"
    #[arg(long)]
    role: Option<String>,

    /// Skill text, matched case-insensitively anywhere in the skills list
    #[arg(long)]
    skills: Option<String>,
}

impl FilterArgs {
    fn changes(&self) -> impl Iterator<Item = (FilterField, &str)> {
        [
            (FilterField::Location, &self.location),
            (FilterField::Grade, &self.grade),
            (FilterField::Clearance, &self.clearance),
            (FilterField::Availability, &self.availability),
            (FilterField::Role, &self.role),
            (FilterField::Skills, &self.skills),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up SMART_ASSIGN_* and RUST_LOG from a local .env, if any
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let session = load_session(cli.base_url.as_deref(), cli.from_file.as_deref()).await?;
    eprintln!(
        "{} Loaded {} candidates in {:?}",
        "✓".green(),
        session.candidates().len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            filters,
            limit,
            json,
        } => handle_search(session, &filters, limit, json)?,
        Commands::Options { json } => handle_options(session.options(), json)?,
        Commands::Snapshot { output } => handle_snapshot(&session, &output)?,
    }

    Ok(())
}

/// Build a session from a snapshot file or from the candidate API.
async fn load_session(base_url: Option<&str>, from_file: Option<&Path>) -> Result<ManualSearch> {
    let mut session = ManualSearch::new();

    if let Some(path) = from_file {
        info!("Reading candidates from {}", path.display());
        let candidates = candidates::load_from_file(path)
            .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
        session.load_from(candidates);
        return Ok(session);
    }

    let mut config = ClientConfig::from_env();
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }
    let client = CandidateClient::new(config).context("Failed to build HTTP client")?;

    session.load(&client).await;
    if let Some(message) = session.error() {
        bail!(
            "Failed to load candidates from {}: {}",
            client.config().all_candidates_url(),
            message
        );
    }
    Ok(session)
}

/// Handle the 'search' command
fn handle_search(
    mut session: ManualSearch,
    filters: &FilterArgs,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    for (field, value) in filters.changes() {
        session
            .update(field, value)
            .with_context(|| format!("Invalid value for --{}", field.name()))?;
    }

    let results = session.results();
    let shown = &results[..limit.unwrap_or(results.len()).min(results.len())];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{} of {} candidates match",
            results.len(),
            session.candidates().len()
        )
        .bold()
        .blue()
    );
    print_candidates(shown);
    if shown.len() < results.len() {
        println!("  ... {} more", results.len() - shown.len());
    }
    Ok(())
}

/// Handle the 'options' command
fn handle_options(options: &FilterOptions, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(options)?);
        return Ok(());
    }

    let lists = [
        (FilterField::Location, &options.locations),
        (FilterField::Grade, &options.grades),
        (FilterField::Clearance, &options.clearances),
        (FilterField::Availability, &options.availabilities),
        (FilterField::Role, &options.roles),
        (FilterField::Skills, &options.skills),
    ];
    for (field, values) in lists {
        println!("{}", format!("{}:", field.name()).bold().blue());
        for value in values {
            println!("{}{}", "• ".green(), value);
        }
    }
    Ok(())
}

/// Handle the 'snapshot' command
fn handle_snapshot(session: &ManualSearch, output: &Path) -> Result<()> {
    candidates::write_snapshot(output, session.candidates())
        .with_context(|| format!("Failed to write snapshot {}", output.display()))?;
    println!(
        "{} Wrote {} candidates to {}",
        "✓".green(),
        session.candidates().len(),
        output.display()
    );
    Ok(())
}

fn print_candidates(candidates: &[CandidateSummary]) {
    for (rank, candidate) in candidates.iter().enumerate() {
        println!(
            "{}. {} {}",
            (rank + 1).to_string().green(),
            candidate.display_name().bold(),
            candidate.email.as_deref().unwrap_or("").dimmed()
        );
        println!("   {}", describe(candidate));
        if let Some(skills) = candidate.skills.as_deref().filter(|s| !s.is_empty()) {
            println!("   Skills: {}", skills);
        }
    }
}

/// One-line summary of role, location, grade, availability and clearance.
fn describe(candidate: &CandidateSummary) -> String {
    let or_dash = |value: &Option<String>| {
        value
            .clone()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "-".to_string())
    };
    format!(
        "{} | {} | {} | {:.0}% available | clearance {}",
        or_dash(&candidate.latest_cv_title),
        or_dash(&candidate.country),
        or_dash(&candidate.department),
        candidate.availability,
        candidate
            .clearance
            .as_ref()
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| "none".to_string())
    )
}
