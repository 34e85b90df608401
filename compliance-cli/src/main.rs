use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rest_compliance::{
    duty_status, find_activity_gaps, latest_shift, lookback_window, now_local,
    raw::{parse_intervals, parse_shifts, RawActivityInterval, RawShiftRecord},
    report::{ActivityGapsReport, RestTimerReport},
    RestPolicy, WeeklySchedule, DEFAULT_LOOKBACK_YEARS,
};
use serde::de::DeserializeOwned;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

#[derive(Debug, Parser)]
#[command(name = "compliance-cli")]
#[command(about = "Rest compliance and activity gap checks over exported records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Duty/rest status from a shift history
    RestTimer {
        /// JSON array of shift records
        #[arg(long)]
        shifts: PathBuf,
        /// JSON object of weekday flags (`sun`..`sat`)
        #[arg(long)]
        schedule: Option<PathBuf>,
        /// Evaluate at this RFC 3339 instant instead of now
        #[arg(long)]
        now: Option<String>,
    },
    /// Uncovered spans of an activity history
    Gaps {
        /// JSON array of activity intervals
        #[arg(long)]
        intervals: PathBuf,
        #[arg(long, default_value_t = DEFAULT_LOOKBACK_YEARS)]
        lookback_years: u32,
        /// Evaluate at this RFC 3339 instant instead of now
        #[arg(long)]
        now: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::RestTimer {
            shifts,
            schedule,
            now,
        } => {
            let now = resolve_now(now.as_deref())?;
            let report = rest_timer_report(&shifts, schedule.as_deref(), now)?;
            serde_json::to_string_pretty(&report)?
        }
        Commands::Gaps {
            intervals,
            lookback_years,
            now,
        } => {
            let now = resolve_now(now.as_deref())?;
            let report = gaps_report(&intervals, lookback_years, now)?;
            serde_json::to_string_pretty(&report)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn rest_timer_report(
    shifts: &Path,
    schedule: Option<&Path>,
    now: OffsetDateTime,
) -> Result<RestTimerReport> {
    let raw: Vec<RawShiftRecord> = read_json(shifts)?;
    let schedule: WeeklySchedule = match schedule {
        Some(path) => read_json(path)?,
        None => WeeklySchedule::default(),
    };
    let shifts = parse_shifts(&raw).context("Invalid shift record")?;
    let status = duty_status(
        latest_shift(&shifts),
        &schedule,
        &RestPolicy::default(),
        now,
    )
    .context("Rest timer failed")?;

    Ok(RestTimerReport::from(status))
}

fn gaps_report(
    intervals: &Path,
    lookback_years: u32,
    now: OffsetDateTime,
) -> Result<ActivityGapsReport> {
    let raw: Vec<RawActivityInterval> = read_json(intervals)?;
    let intervals = parse_intervals(&raw).context("Invalid activity interval")?;

    Ok(ActivityGapsReport::new(
        lookback_window(now, lookback_years).date(),
        find_activity_gaps(&intervals, lookback_years, now),
    ))
}

fn resolve_now(now: Option<&str>) -> Result<OffsetDateTime> {
    match now {
        Some(value) => OffsetDateTime::parse(value, &Rfc3339)
            .with_context(|| format!("Invalid --now value '{}'", value)),
        None => Ok(now_local()),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
