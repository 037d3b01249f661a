//! CLI Adapter.

mod render;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, InitStyle};

#[derive(Parser)]
#[command(name = "initscript")]
#[command(version)]
#[command(
    about = "Render init scripts and service definitions for six init systems",
    long_about = None
)]
struct Cli {
    /// Log rendering decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the artifact described by a spec file
    #[clap(visible_alias = "r")]
    Render {
        /// Service spec file (YAML, or TOML with a .toml extension)
        spec_file: PathBuf,
        /// Init style, overriding the spec file's init_style
        #[arg(short, long, value_parser = parse_style)]
        style: Option<InitStyle>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print where the artifact would be installed
    #[clap(visible_alias = "p")]
    Path {
        /// Service spec file (YAML, or TOML with a .toml extension)
        spec_file: PathBuf,
        /// Init style, overriding the spec file's init_style
        #[arg(short, long, value_parser = parse_style)]
        style: Option<InitStyle>,
    },
    /// List supported init styles
    Styles,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// The artifact body only
    Text,
    /// Path, mode, and content as a JSON object
    Json,
}

fn parse_style(value: &str) -> Result<InitStyle, String> {
    value.parse::<InitStyle>().map_err(|e| e.to_string())
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Render { spec_file, style, format } => {
            render::run_render(&spec_file, style, format)
        }
        Commands::Path { spec_file, style } => render::run_path(&spec_file, style),
        Commands::Styles => render::run_styles(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
