// Copyright (c) 2026 The oi-dash authors. All rights reserved.

mod api;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod session;
mod sync;
mod ui;

use crate::api::{AnalyticsApi, AnalyticsClient};
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::refresh;
use crate::environment::{API_URL_ENV, Environment};
use crate::session::{run_fetch_once, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the live dashboard
    Start {
        /// Ticker symbol to load first (defaults to the saved symbol)
        #[arg(long, value_name = "SYMBOL")]
        symbol: Option<String>,

        /// Analytics API base URL, e.g. http://127.0.0.1:5000
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Seconds between automatic refreshes
        #[arg(long, value_name = "SECONDS", default_value_t = refresh::DEFAULT_INTERVAL_SECS,
              value_parser = clap::value_parser!(u64).range(1..))]
        refresh_secs: u64,

        /// Print the regions to stdout instead of drawing the dashboard
        #[arg(long, default_value = "false")]
        headless: bool,

        /// Enable background colors
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Fetch the analytics once and print them
    Fetch {
        /// Ticker symbol to fetch (defaults to the saved symbol)
        #[arg(long, value_name = "SYMBOL")]
        symbol: Option<String>,

        /// Analytics API base URL
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print the validated response as JSON
        #[arg(long, action = clap::ArgAction::SetTrue)]
        json: bool,
    },
    /// Save the default symbol and API URL
    SetDefault {
        /// Symbol loaded at start
        #[arg(long, value_name = "SYMBOL")]
        symbol: Option<String>,

        /// Analytics API base URL
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Delete the saved configuration.
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            symbol,
            api_url,
            refresh_secs,
            headless,
            with_background,
        } => {
            let config = Config::load_or_default(&config_path)?;
            let environment = resolve_environment(api_url, &config);
            let symbol = symbol.unwrap_or(config.symbol);
            start(
                environment,
                symbol,
                Duration::from_secs(refresh_secs),
                headless,
                with_background,
            )
            .await
        }
        Command::Fetch {
            symbol,
            api_url,
            json,
        } => {
            logging::init_console_logger();
            let config = Config::load_or_default(&config_path)?;
            let environment = resolve_environment(api_url, &config);
            let symbol = symbol.unwrap_or(config.symbol);
            let client = AnalyticsClient::new(environment)?;
            if let Err(e) = run_fetch_once(&client, &symbol, json).await {
                print_cmd_error!(&e.to_string());
                std::process::exit(1);
            }
            Ok(())
        }
        Command::SetDefault { symbol, api_url } => {
            let mut config = Config::load_or_default(&config_path)?;
            if let Some(symbol) = symbol {
                config.symbol = symbol;
            }
            if let Some(api_url) = api_url {
                if api_url.parse::<Environment>().is_err() {
                    print_cmd_error!(
                        "Invalid API URL.",
                        "expected http:// or https://, got {:?}",
                        api_url
                    );
                    std::process::exit(1);
                }
                config.api_url = Some(api_url);
            }
            config.save(&config_path)?;
            print_cmd_success!(
                "Saved defaults.",
                "{} ({})",
                config.symbol,
                config.api_url.as_deref().unwrap_or("default API URL")
            );
            Ok(())
        }
        Command::ClearConfig => {
            if config_path.exists() {
                print_cmd_info!("Clearing configuration", "{}", config_path.display());
            }
            Config::clear(&config_path)?;
            print_cmd_success!("Configuration cleared.", "");
            Ok(())
        }
    }
}

/// Flag, then `OI_DASH_API_URL`, then the saved URL. Warns when the chosen
/// value is not a usable URL.
fn resolve_environment(flag: Option<String>, config: &Config) -> Environment {
    let env_var = std::env::var(API_URL_ENV).ok();
    let chosen = flag
        .as_deref()
        .or(env_var.as_deref())
        .or(config.api_url.as_deref())
        .map(str::trim)
        .filter(|url| !url.is_empty());
    if let Some(url) = chosen {
        if url.parse::<Environment>().is_err() {
            print_cmd_warn!(
                "Ignoring invalid API URL.",
                "{:?}, using {}",
                url,
                Environment::default()
            );
        }
    }
    Environment::resolve(flag, env_var, config.api_url.clone())
}

/// Starts the dashboard in TUI or headless mode.
async fn start(
    environment: Environment,
    symbol: String,
    refresh_interval: Duration,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    if headless {
        logging::init_console_logger();
    }
    log::info!(
        "Starting dashboard for {:?} against {} (refresh every {:?})",
        symbol,
        environment,
        refresh_interval
    );

    let client: Arc<dyn AnalyticsApi> = Arc::new(AnalyticsClient::new(environment)?);
    let session = setup_session(client, symbol, refresh_interval);

    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, with_background).await
    }
}
