//! Billable — parse free-text legal time entries from the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use billable_core::ParserConfig;
use billable_nlp::EntryParser;

mod commands;

use commands::Outcome;

#[derive(Parser)]
#[command(name = "billable")]
#[command(about = "Turn dictated time entries into structured billing records", long_about = None)]
struct Cli {
    /// Parser configuration file (JSON). Defaults plus BILLABLE_* env overrides otherwise.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a sentence into a time entry
    Parse {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        text: Vec<String>,
    },
    /// Show the raw output of every extractor
    Extract {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        text: Vec<String>,
    },
    /// Validate an entry before saving it
    Validate {
        #[arg(long, default_value_t = 0)]
        hours: u32,
        #[arg(long, default_value_t = 0)]
        minutes: u32,
        #[arg(long, default_value = "")]
        client: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Display, decimal and billing renditions of a duration
    Format {
        #[arg(long, default_value_t = 0)]
        hours: u32,
        #[arg(long, default_value_t = 0)]
        minutes: u32,
    },
    /// Task names for a practice area
    SuggestTasks {
        area: String,
        #[arg(long, default_value = "")]
        context: String,
    },
    /// Clients from a JSON directory matching the input
    SuggestClients {
        input: String,
        #[arg(long)]
        clients: PathBuf,
    },
    /// Expand a terse note into billing narrative
    Enhance {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        text: Vec<String>,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ParserConfig> {
    let config = match path {
        Some(p) => ParserConfig::load(p)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", p.display(), e))?,
        None => ParserConfig::from_env()?,
    };
    debug!("Parser config: {:?}", config);
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let parser = EntryParser::new(load_config(cli.config.as_ref())?);

    let outcome = match cli.command {
        Command::Parse { text } => commands::parse(&parser, &text.join(" "))?,
        Command::Extract { text } => commands::extract(&parser, &text.join(" "))?,
        Command::Validate {
            hours,
            minutes,
            client,
            description,
        } => commands::validate(hours, minutes, client, description)?,
        Command::Format { hours, minutes } => commands::format(hours, minutes)?,
        Command::SuggestTasks { area, context } => {
            commands::suggest_tasks(&parser, &area, &context)?
        }
        Command::SuggestClients { input, clients } => {
            info!("Loading client directory from {}", clients.display());
            commands::suggest_clients(&parser, &input, &clients)?
        }
        Command::Enhance { text } => commands::enhance(&text.join(" "))?,
    };

    emit(&outcome)
}

fn emit(outcome: &Outcome) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&outcome.body)?);
    if !outcome.success {
        std::process::exit(1);
    }
    Ok(())
}
