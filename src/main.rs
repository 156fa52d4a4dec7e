mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{parse_date, DiaryParams, HolidayArgs};
use ddsm_diaries::config::Config;
use ddsm_diaries::diary::OutputFormat;

#[derive(Parser)]
#[command(
    name = "ddsm-diaries",
    version,
    about = "Recording and duplication diaries for a monthly talking newspaper",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to DDSM_* environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,
}

#[derive(clap::Args)]
struct DiaryArgs {
    /// Diary year
    #[arg(short, long)]
    year: i32,

    /// January recording date (dd/mm/yyyy), a Monday or Tuesday
    #[arg(short, long, value_parser = parse_date)]
    first_edition: NaiveDate,

    /// Edition number recorded in January
    #[arg(short, long, allow_negative_numbers = true)]
    edition: i64,

    /// Decani compiler
    #[arg(long)]
    decani_compiler: Option<String>,

    /// Decani assistant
    #[arg(long)]
    decani_assistant: Option<String>,

    /// Cantoris compiler
    #[arg(long)]
    cantoris_compiler: Option<String>,

    /// Cantoris assistant
    #[arg(long)]
    cantoris_assistant: Option<String>,

    #[command(flatten)]
    holidays: HolidayArgs,

    /// Output format (text, markdown, json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl From<DiaryArgs> for DiaryParams {
    fn from(args: DiaryArgs) -> Self {
        Self {
            year: args.year,
            first_edition: args.first_edition,
            edition: args.edition,
            decani_compiler: args.decani_compiler,
            decani_assistant: args.decani_assistant,
            cantoris_compiler: args.cantoris_compiler,
            cantoris_assistant: args.cantoris_assistant,
            holidays: args.holidays,
            format: args.format,
            output: args.output,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the recording diary
    Recording(DiaryArgs),

    /// Generate the duplication diary
    Duplication(DiaryArgs),

    /// Bank holiday lookup, export and file validation
    Holidays {
        #[command(subcommand)]
        command: HolidayCommands,
    },

    /// Check connectivity and show the effective configuration
    Status,
}

#[derive(Subcommand)]
enum HolidayCommands {
    /// Download bank holidays from the API
    Fetch {
        /// Year to fetch
        #[arg(short, long)]
        year: i32,

        /// Export to a text file
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,

        /// Replace the export file if it exists
        #[arg(long, alias = "force", requires = "export")]
        overwrite: bool,
    },

    /// Check a bank holiday file
    Validate {
        /// File to check
        file: PathBuf,
    },

    /// List the bank holidays for a year from the chosen source
    Show {
        /// Year to list
        #[arg(short, long)]
        year: i32,

        #[command(flatten)]
        holidays: HolidayArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    // Initialize tracing/logging
    let log_format = cli.log_format.as_deref().unwrap_or(&config.logging.format);
    setup_tracing(log_format, &config.logging.level, cli.verbose)?;

    tracing::info!("ddsm-diaries starting");

    match cli.command {
        Commands::Recording(args) => {
            tracing::info!(
                year = args.year,
                first_edition = %args.first_edition,
                edition = args.edition,
                "Starting recording command"
            );
            commands::recording(config, args.into()).await?;
        }

        Commands::Duplication(args) => {
            tracing::info!(
                year = args.year,
                first_edition = %args.first_edition,
                edition = args.edition,
                "Starting duplication command"
            );
            commands::duplication(config, args.into()).await?;
        }

        Commands::Holidays { command } => match command {
            HolidayCommands::Fetch {
                year,
                export,
                overwrite,
            } => {
                tracing::info!(
                    year,
                    export = ?export,
                    overwrite,
                    "Starting holidays fetch command"
                );
                commands::fetch(config, year, export, overwrite).await?;
            }
            HolidayCommands::Validate { file } => {
                tracing::info!(file = %file.display(), "Starting holidays validate command");
                commands::validate(file)?;
            }
            HolidayCommands::Show { year, holidays } => {
                tracing::info!(year, "Starting holidays show command");
                commands::show(config, year, holidays).await?;
            }
        },

        Commands::Status => {
            commands::status(config).await?;
        }
    }

    tracing::info!("ddsm-diaries completed successfully");
    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("ddsm_diaries=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_new(format!("ddsm_diaries={level},warn"))?
    };

    // Logs go to stderr so diaries on stdout can be piped
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
