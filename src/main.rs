mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calport")]
#[command(about = "Move events in and out of your personal calendar as iCalendar files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an event to the store
    Add {
        title: String,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Last day of a multi-day event (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,

        /// Start time (HH:MM); omit for an all-day event
        #[arg(short, long)]
        time: Option<String>,

        /// End time (HH:MM)
        #[arg(long)]
        end_time: Option<String>,

        /// Longer description
        #[arg(long)]
        description: Option<String>,

        /// Display color (e.g. "#3b82f6")
        #[arg(long)]
        color: Option<String>,
    },
    /// List stored events grouped by day
    List {
        /// Show events from this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Show events until this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Write stored events to an .ics file
    Export {
        /// Output path (defaults to a name derived from the events)
        #[arg(short, long)]
        out: Option<String>,

        /// Export events from this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Export events until this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Read events from an .ics file into the store
    Import {
        /// Path to the .ics file
        file: String,
    },
    /// Show public holidays from the configured feed
    Holidays {
        /// Feed URL (overrides the configured holiday_feed_url)
        #[arg(long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            title,
            date,
            end_date,
            time,
            end_time,
            description,
            color,
        } => commands::add::run(title, date, end_date, time, end_time, description, color),
        Commands::List { from, to } => commands::list::run(from.as_deref(), to.as_deref()),
        Commands::Export { out, from, to } => {
            commands::export::run(out.as_deref(), from.as_deref(), to.as_deref())
        }
        Commands::Import { file } => commands::import::run(&file),
        Commands::Holidays { url } => commands::holidays::run(url.as_deref()).await,
    }
}
