use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use gym_dashboard::config::AppConfig;
use gym_dashboard::services::{DashboardService, ExerciseLibrary, SnapshotDataProvider};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Member dashboard calculations over a gym data snapshot
#[derive(Parser, Debug)]
#[command(name = "gym-dashboard", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, env = "GYM_DASHBOARD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a member's dashboard and print it as JSON
    Dashboard {
        /// JSON snapshot of members, activity, payments and trainers
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Member id
        #[arg(short, long)]
        member: Uuid,

        /// Evaluate as of this date (YYYY-MM-DD, end of day UTC) instead of now
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Show the reference entry for an exercise key
    Exercise {
        key: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Dashboard {
            snapshot,
            member,
            date,
        } => {
            let provider = SnapshotDataProvider::load(&snapshot)
                .await
                .with_context(|| format!("Failed to load snapshot {}", snapshot.display()))?;
            let now = match date {
                Some(date) => end_of_day(date)?,
                None => Utc::now(),
            };

            let service = DashboardService::new(config.dashboard);
            let view = service.build(&provider, member, now).await?;
            info!("Rendered dashboard for {}", view.member_name);

            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Command::Exercise { key } => {
            let Some(detail) = ExerciseLibrary::new().lookup(&key) else {
                bail!("Unknown exercise key: {}", key);
            };
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
    }

    Ok(())
}

fn end_of_day(date: NaiveDate) -> Result<DateTime<Utc>> {
    let time = date
        .and_hms_opt(23, 59, 59)
        .context("Invalid evaluation date")?;
    Ok(time.and_utc())
}
