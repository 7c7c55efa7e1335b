//! chatlog CLI
//!
//! Appends to and queries a storage directory directly, without the server.

use std::process::ExitCode;

use chatlog::record::parse_date;
use chatlog::{Config, LogStore, NewChatLog};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// chatlog CLI
#[derive(Parser, Debug)]
#[command(name = "chatlog-cli")]
#[command(about = "CLI for a chatlog storage directory")]
struct Args {
    /// Storage directory
    #[arg(short, long, default_value = "./storage")]
    storage_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append a record to today's partition
    Append {
        /// Chat text
        text: String,

        /// Validation label stored with the record
        #[arg(short, long, default_value = "false")]
        validation_result: String,
    },

    /// Print records in a date range as JSON
    Query {
        /// First date (YYYY-MM-DD), defaults to a week before the end date
        #[arg(long)]
        start_date: Option<String>,

        /// Last date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        end_date: Option<String>,
    },
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> chatlog::Result<()> {
    let store = LogStore::open(Config::builder().storage_dir(&args.storage_dir).build())?;

    match args.command {
        Commands::Append { text, validation_result } => {
            let record = store.append(NewChatLog::new(text, validation_result))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Query { start_date, end_date } => {
            let start = start_date.as_deref().map(parse_date).transpose()?;
            let end = end_date.as_deref().map(parse_date).transpose()?;
            let records = store.query(start, end)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}
