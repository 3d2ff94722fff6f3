use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use passer_rating::calculator::compute_with;
use passer_rating::input::batch::load_batch;
use passer_rating::input::policy::SecondaryPolicy;
use passer_rating::logging;
use passer_rating::model::profile::RatingProfile;
use passer_rating::model::stats::RawPassingInput;
use passer_rating::report::json::{render_batch_json, render_player_json};
use passer_rating::report::text::{render_batch_text, render_player_line};
use passer_rating::report::{OutputFormat, PlayerReport, summarize};

#[derive(Debug, Parser)]
#[command(name = "passer-rating", version, about = "NFL passer-rating calculator")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rate a single passing line.
    Rate(RateArgs),
    /// Rate every row of a tab-separated games file.
    Batch(BatchArgs),
}

#[derive(Debug, Clone, Args)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Reject unparseable completions/yards/touchdowns/interceptions instead of reading them as 0.
    #[arg(long)]
    strict: bool,

    /// Write the report to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct RateArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, allow_hyphen_values = true)]
    attempts: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    completions: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    yards: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    touchdowns: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    interceptions: String,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Clone, Args)]
struct BatchArgs {
    #[arg(long)]
    input: PathBuf,
    #[command(flatten)]
    output: OutputArgs,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let profile = RatingProfile::nfl();
    match cli.command {
        Command::Rate(args) => run_rate(&args, &profile),
        Command::Batch(args) => run_batch(&args, &profile),
    }
}

fn secondary_policy(output: &OutputArgs) -> SecondaryPolicy {
    if output.strict {
        SecondaryPolicy::Reject
    } else {
        SecondaryPolicy::ZeroOnInvalid
    }
}

fn raw_input(args: &RateArgs) -> RawPassingInput {
    RawPassingInput {
        player: args.name.clone(),
        attempts: args.attempts.clone(),
        completions: args.completions.clone(),
        yards: args.yards.clone(),
        touchdowns: args.touchdowns.clone(),
        interceptions: args.interceptions.clone(),
    }
}

fn run_rate(args: &RateArgs, profile: &RatingProfile) -> Result<(), String> {
    let input = raw_input(args);
    let policy = secondary_policy(&args.output);
    let result = compute_with(&input, profile, policy);
    let failed = result.as_ref().err().map(|e| e.to_string());
    let report = PlayerReport::new(&input.player, result);

    match args.output.format {
        OutputFormat::Text => {
            if let Some(message) = failed {
                return Err(message);
            }
            emit(&render_player_line(&report), args.output.out.as_deref())?;
        }
        OutputFormat::Json => {
            let body = render_player_json(&report).map_err(|e| e.to_string())?;
            emit(&body, args.output.out.as_deref())?;
            if let Some(message) = failed {
                return Err(message);
            }
        }
    }
    Ok(())
}

fn run_batch(args: &BatchArgs, profile: &RatingProfile) -> Result<(), String> {
    let rows = load_batch(&args.input).map_err(|e| e.to_string())?;
    let policy = secondary_policy(&args.output);
    let reports: Vec<PlayerReport> = rows
        .iter()
        .map(|row| {
            PlayerReport::new(&row.input.player, compute_with(&row.input, profile, policy))
                .at_line(row.line_no)
        })
        .collect();
    let summary = summarize(&reports);
    info!(
        rows = summary.rows,
        rated = summary.rated,
        failed = summary.failed,
        "batch rated"
    );

    let body = match args.output.format {
        OutputFormat::Text => render_batch_text(&reports, &summary),
        OutputFormat::Json => {
            render_batch_json(&reports, &summary, profile).map_err(|e| e.to_string())?
        }
    };
    emit(&body, args.output.out.as_deref())
}

fn emit(body: &str, out: Option<&Path>) -> Result<(), String> {
    match out {
        Some(path) => {
            let mut content = body.to_string();
            if !content.ends_with('\n') {
                content.push('\n');
            }
            std::fs::write(path, content)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            info!(path = %path.display(), "report written");
            Ok(())
        }
        None => {
            println!("{}", body.trim_end_matches('\n'));
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
