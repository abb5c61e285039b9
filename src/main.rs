//! AssetGen - reference workbook and icon set generator
//!
//! Command-line entry point. Subcommands live in [`assetgen::cli`].

use assetgen::branding::APP_DESCRIPTION;
use assetgen::cli::{CliResult, ConfigArgs, ExitCode, IconsArgs, WorkbookArgs};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// AssetGen - reference workbook and icon set generator
#[derive(Parser, Debug)]
#[command(author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the editing-tools reference workbook
    Workbook(WorkbookArgs),
    /// Generate standard, maskable, and apple-touch PNG icons
    Icons(IconsArgs),
    /// Show or initialize the configuration file
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Workbook(args) => args.execute(),
            Self::Icons(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    // Usage errors are validation failures; help and version still exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(ExitCode::ValidationError.code());
        }
        Err(e) => e.exit(),
    };

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
