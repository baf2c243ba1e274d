pub mod cli;
pub mod config;
pub mod convert;
pub mod currency;
pub mod error;
pub mod log;
pub mod providers;
pub mod rate_source;
pub mod resolver;

use anyhow::{Result, bail};
use tracing::debug;

use crate::config::AppConfig;
use crate::convert::ConversionService;
use crate::currency::CurrencyCode;
use crate::providers::exchangerate_host::ExchangerateHostSource;
use crate::providers::open_er_api::OpenErApiSource;
use crate::resolver::RateResolver;

pub enum AppCommand {
    Convert {
        amount: String,
        from: String,
        to: String,
    },
    Rate {
        from: String,
        to: String,
    },
    List,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::List => {
            println!("{}", cli::list::display_currencies(&config.currencies));
        }
        AppCommand::Rate { from, to } => {
            let (from, to) = parse_pair(&config, &from, &to)?;
            let resolver = build_resolver(&config);

            let spinner = cli::ui::fetch_spinner(&format!("Fetching rate {from} -> {to}..."));
            let resolved = resolver.resolve(&from, &to).await;
            spinner.finish_and_clear();

            println!("{}", cli::rate::display_rate(&from, &to, resolved?));
        }
        AppCommand::Convert { amount, from, to } => {
            let (from, to) = parse_pair(&config, &from, &to)?;
            // Amount problems are reported before any network activity.
            let amount = convert::parse_amount(&amount)?;
            let service = ConversionService::new(build_resolver(&config));

            let spinner = cli::ui::fetch_spinner(&format!("Converting {from} -> {to}..."));
            let result = service.convert(amount, &from, &to).await;
            spinner.finish_and_clear();

            println!("{}", cli::convert::display_result(&result?));
        }
    }

    Ok(())
}

fn build_resolver(config: &AppConfig) -> RateResolver<ExchangerateHostSource, OpenErApiSource> {
    RateResolver::new(
        ExchangerateHostSource::new(config.primary_base_url()),
        OpenErApiSource::new(config.secondary_base_url()),
    )
}

fn parse_pair(
    config: &AppConfig,
    from: &str,
    to: &str,
) -> Result<(CurrencyCode, CurrencyCode)> {
    Ok((
        parse_supported(config, from)?,
        parse_supported(config, to)?,
    ))
}

fn parse_supported(config: &AppConfig, input: &str) -> Result<CurrencyCode> {
    let code = CurrencyCode::parse(input)?;
    if !config.currencies.iter().any(|c| c == code.as_str()) {
        bail!("Unsupported currency: {code}. Run `fxconv list` to see supported codes");
    }
    Ok(code)
}
