//! Command-line interface for the awesome-stars binary.
//!
//! The CLI exposes subcommands for generating a star leaderboard from an
//! awesome-list markdown document and for looking up individual
//! repositories.

use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use awesome_stars::{
    CredentialSet, DEFAULT_API_URL, Error, GitHubClient, RepoStars, build_report, fetch_many,
    format_stars, load_markdown, rate_limit_message, write_report,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_OUTPUT: &str = "github/awesome-docker-stars.md";
const DEFAULT_LOG_FILTER: &str = "awesome_stars=info";

/// Command line interface for ranking awesome-list repositories by stars.
#[derive(Debug, Parser,)]
#[command(name = "awesome-stars", version, about = "Rank awesome-list repositories by GitHub stars")]
struct Cli
{
    #[command(subcommand)]
    command: Command,

    /// Base URL of the GitHub REST API.
    #[arg(long = "api-url", value_name = "URL", env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Generate a markdown star leaderboard from an awesome-list document.
    Generate(GenerateArgs,),
    /// Print star counts for individual repositories.
    Stars(StarsArgs,),
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `generate` subcommand.
struct GenerateArgs
{
    /// Path to the awesome-list markdown document.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the generated markdown table.
    #[arg(long = "output", value_name = "PATH", env = "AWESOME_STARS_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Hide the progress bar.
    #[arg(long = "no-progress", action = ArgAction::SetTrue)]
    no_progress: bool,
}

#[derive(Debug, Args,)]
struct StarsArgs
{
    /// Repository slugs (`owner/repo`) or GitHub URLs.
    #[arg(value_name = "REPO", required = true)]
    repos: Vec<String,>,

    /// Output JSON instead of tab-separated lines.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    init_tracing();

    if let Err(error,) = run(Cli::parse(),).await {
        eprintln!("{}", user_message(&error,));
        process::exit(1,);
    }
}

fn init_tracing()
{
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into(),),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr,),)
        .init();
}

/// Message printed for a failed run; rate limits get the retry estimate.
fn user_message(error: &Error,) -> String
{
    match error {
        Error::RateLimited {
            reset_at, ..
        } => rate_limit_message(*reset_at,),
        other => other.to_display_string(),
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors from reading input, resolving stars and writing output.
async fn run(cli: Cli,) -> Result<(), Error,>
{
    let credentials = CredentialSet::from_env();
    let client = GitHubClient::new(&cli.api_url, &credentials,)?;

    match cli.command {
        Command::Generate(args,) => run_generate(&client, &credentials, args,).await,
        Command::Stars(args,) => run_stars(&client, &credentials, args,).await,
    }
}

async fn run_generate(
    client: &GitHubClient,
    credentials: &CredentialSet,
    args: GenerateArgs,
) -> Result<(), Error,>
{
    let markdown = load_markdown(&args.input,)?;
    let progress = progress_bar(args.no_progress,);

    let report = match build_report(client, &markdown, credentials, &progress,).await {
        Ok(report,) => report,
        Err(error,) => {
            progress.abandon();
            return Err(error,);
        }
    };

    write_report(&args.output, &report.markdown,)?;
    info!("Ranked {} repositories into {}", report.entries.len(), args.output.display());

    Ok((),)
}

async fn run_stars(
    client: &GitHubClient,
    credentials: &CredentialSet,
    args: StarsArgs,
) -> Result<(), Error,>
{
    let results = fetch_many(client, &args.repos, credentials.first(),).await?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_stars(&mut handle, &results, args.json,)
}

fn write_stars<W: Write,>(writer: &mut W, results: &[RepoStars], json: bool,) -> Result<(), Error,>
{
    if json {
        serde_json::to_writer(&mut *writer, results,).map_err(|source| {
            if source.is_io() {
                Error::Stdout {
                    source: source.into(),
                }
            } else {
                Error::from(source,)
            }
        },)?;
        writeln!(writer).map_err(stdout_error,)?;
        return Ok((),);
    }

    for info in results {
        writeln!(writer, "{}\t{}\t{}", info.slug, format_stars(info.stars,), info.html_url)
            .map_err(stdout_error,)?;
    }

    Ok((),)
}

fn stdout_error(source: io::Error,) -> Error
{
    Error::Stdout {
        source,
    }
}

fn progress_bar(hidden: bool,) -> ProgressBar
{
    if hidden {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(0,);
    progress.set_style(
        ProgressStyle::with_template("{spinner:.yellow} [{elapsed_precise}] {bar:30} {pos}/{len} {msg}",)
            .unwrap_or_else(|_| ProgressStyle::default_bar(),),
    );
    progress
}
