use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxconv::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxconv::AppCommand {
    fn from(cmd: Commands) -> fxconv::AppCommand {
        match cmd {
            Commands::Convert { amount, from, to } => {
                fxconv::AppCommand::Convert { amount, from, to }
            }
            Commands::Rate { from, to } => fxconv::AppCommand::Rate { from, to },
            Commands::List => fxconv::AppCommand::List,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Amount in the base currency
        amount: String,
        /// Base currency code, e.g. USD
        from: String,
        /// Target currency code, e.g. PHP
        to: String,
    },
    /// Show the live exchange rate for a currency pair
    Rate {
        /// Base currency code
        from: String,
        /// Target currency code
        to: String,
    },
    /// List supported currency codes
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => fxconv::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = fxconv::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
sources:
  primary:
    base_url: "https://api.exchangerate.host"
  secondary:
    base_url: "https://open.er-api.com"

# Uncomment to restrict or extend the supported codes.
# currencies: ["USD", "EUR", "GBP", "JPY", "PHP"]
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
