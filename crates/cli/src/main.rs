// PivotGrid CLI - headless dataset operations

mod exit_codes;
mod export;
mod show;
mod util;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use pivotgrid_config::palette;
use pivotgrid_config::settings::{Settings, SourceKind};
use pivotgrid_config::view_state::ViewState;
use pivotgrid_source::{from_settings, DataSource, SourceError};

use exit_codes::{source_exit_code, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "pgrid")]
#[command(about = "Pivot-table dataset tool (fetch, transform, export)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the dataset as CSV
    #[command(after_help = "\
Examples:
  pgrid export
  pgrid export --out inventory.csv
  pgrid export --out - | head -5
  pgrid export --url https://api.example.com/cabledata --path data.records
  pgrid export --fixture --raw-headers")]
    Export {
        /// Output CSV file ('-' for stdout; default from settings)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,

        /// Use the built-in mock dataset
        #[arg(long)]
        fixture: bool,

        /// Fetch records from this endpoint instead
        #[arg(long, env = "PGRID_URL")]
        url: Option<String>,

        /// Dotted path to the record list in the response body
        #[arg(long)]
        path: Option<String>,

        /// Keep raw field names instead of humanized labels
        #[arg(long)]
        raw_headers: bool,

        /// Suppress progress on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Preview the dataset as an aligned table
    #[command(after_help = "\
Examples:
  pgrid show
  pgrid show --limit 50
  pgrid show --url https://api.example.com/cabledata --no-color")]
    Show {
        /// Maximum data rows to print
        #[arg(long, default_value_t = 15)]
        limit: usize,

        /// Disable colored headers
        #[arg(long)]
        no_color: bool,

        /// Use the built-in mock dataset
        #[arg(long)]
        fixture: bool,

        /// Fetch records from this endpoint instead
        #[arg(long, env = "PGRID_URL")]
        url: Option<String>,

        /// Dotted path to the record list in the response body
        #[arg(long)]
        path: Option<String>,

        /// Keep raw field names instead of humanized labels
        #[arg(long)]
        raw_headers: bool,
    },

    /// Print the color token assigned to each label
    #[command(after_help = "\
Examples:
  pgrid palette Manufacturer Location
  pgrid palette \"Hub Id\"")]
    Palette {
        /// Labels to hash
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Inspect or replace the stored widget view state
    #[command(subcommand, name = "view-state")]
    ViewState(ViewStateCommands),
}

#[derive(Subcommand)]
enum ViewStateCommands {
    /// Print the stored view state as JSON
    Get,
    /// Replace the stored view state with a JSON document
    Set {
        /// JSON document (widget-owned shape, stored opaquely)
        json: String,
    },
    /// Delete the stored view state
    Clear,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = &err.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(err.code)
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    let settings = Settings::load();

    match command {
        Commands::Export {
            out,
            fixture,
            url,
            path,
            raw_headers,
            quiet,
        } => {
            let source = resolve_source(&settings, fixture, url, path)?;
            let out = out.unwrap_or_else(|| PathBuf::from(&settings.export_filename));
            let humanize = settings.humanize_headers && !raw_headers;
            export::cmd_export(source, out, humanize, quiet)
        }
        Commands::Show {
            limit,
            no_color,
            fixture,
            url,
            path,
            raw_headers,
        } => {
            let source = resolve_source(&settings, fixture, url, path)?;
            let humanize = settings.humanize_headers && !raw_headers;
            show::cmd_show(source, limit, !no_color, humanize)
        }
        Commands::Palette { labels } => {
            for label in labels {
                println!("{}\t{}", label, palette::token_for(&label));
            }
            Ok(())
        }
        Commands::ViewState(command) => cmd_view_state(command),
    }
}

/// Pick the data source: flags override the configured default.
fn resolve_source(
    settings: &Settings,
    fixture: bool,
    url: Option<String>,
    path: Option<String>,
) -> Result<Box<dyn DataSource>, CliError> {
    if fixture && url.is_some() {
        return Err(CliError::args("--fixture and --url are mutually exclusive"));
    }

    let mut settings = settings.clone();
    if fixture {
        settings.source = SourceKind::Fixture;
    }
    if let Some(url) = url {
        settings.source = SourceKind::Remote;
        settings.endpoint = url;
    }
    if let Some(path) = path {
        settings.records_path = path;
    }

    Ok(from_settings(&settings))
}

fn cmd_view_state(command: ViewStateCommands) -> Result<(), CliError> {
    match command {
        ViewStateCommands::Get => match ViewState::load() {
            Some(state) => {
                let json = serde_json::to_string_pretty(&state.state)
                    .map_err(|e| CliError::io(e.to_string()))?;
                println!("{json}");
                Ok(())
            }
            None => {
                eprintln!("(no stored view state)");
                Ok(())
            }
        },
        ViewStateCommands::Set { json } => {
            // Must be valid JSON; the shape inside is the widget's business
            let state: serde_json::Value = serde_json::from_str(&json)
                .map_err(|e| CliError::args(format!("not valid JSON: {e}")))?;
            ViewState::new(state).save().map_err(CliError::io)
        }
        ViewStateCommands::Clear => {
            let path = ViewState::path();
            match std::fs::remove_file(&path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(CliError::io(format!("{}: {e}", path.display()))),
            }
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_USAGE,
            message: msg.into(),
            hint: None,
        }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_ERROR,
            message: msg.into(),
            hint: None,
        }
    }

    /// A dataset load failed; previous data (if any) is untouched.
    pub fn from_source(source_name: &str, err: SourceError) -> Self {
        let hint = match &err {
            SourceError::Network(_) => {
                Some("check the endpoint URL and your connection".to_string())
            }
            SourceError::Shape(_) => {
                Some("use --path to point at the record list inside the body".to_string())
            }
            _ => None,
        };
        Self {
            code: source_exit_code(&err),
            message: format!("{source_name}: {err}"),
            hint,
        }
    }
}
