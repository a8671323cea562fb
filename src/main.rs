use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use cli::output::{format_card, format_tabs};
use toolcat::catalog::{TabId, ViewState, filter_tools};
use toolcat::config::Config;
use toolcat::launcher::SystemOpener;
use toolcat::loader::{HttpToolSource, IconProbe, Loader};
use toolcat::tui::{self, App, AppState, EventHandler, Session, TuiRunner};

fn setup_logging(config: &Config, verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolcat")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolcat.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let default_level = if verbose {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("info")
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => run_tui(config).await,
        Some(Commands::List {
            tab,
            all,
            search,
            json,
        }) => {
            let mut out = io::stdout().lock();
            handle_list_command(*tab, *all, search.as_deref(), *json, config, &mut out).await
        }
        Some(Commands::Tabs) => {
            println!("{}", format_tabs());
            Ok(())
        }
    }
}

async fn run_tui(config: &Config) -> Result<()> {
    info!("Launching TUI mode against {}", config.catalog.endpoint);

    let source = HttpToolSource::new(&config.catalog.endpoint, config.catalog.timeout())?;
    let probe = IconProbe::new(
        source.client().clone(),
        source.endpoint().clone(),
        config.tui.icon_probe_concurrency,
    );

    let events = EventHandler::new(config.tui.tick_rate_ms);
    let app = App::new(AppState::new(config.catalog.fallback_icon.clone()));
    let opener = SystemOpener::new(config.tui.open_command.clone());
    let mut session = Session::new(app, Loader::new(Arc::new(source)), Box::new(opener), events.sender());
    if config.tui.probe_icons {
        session = session.with_icon_probe(probe);
    }

    let terminal = tui::init_terminal().context("Failed to initialize terminal")?;
    let mut runner = TuiRunner::new(terminal, events, session);
    let result = runner.run().await;
    tui::restore_terminal().context("Failed to restore terminal")?;
    result
}

async fn handle_list_command(
    tab: Option<TabId>,
    all: bool,
    search: Option<&str>,
    json: bool,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    info!("Listing tools - tab: {:?}, all: {}, search: {:?}", tab, all, search);

    let source = HttpToolSource::new(&config.catalog.endpoint, config.catalog.timeout())?;
    let mut loader = Loader::new(Arc::new(source));
    let mut state = ViewState::new();
    if let Some(outcome) = loader.run().await {
        state.settle(outcome);
    }

    // Reported once, by main
    if let Some(message) = state.error() {
        eyre::bail!("{}", message);
    }

    let tab = if all { None } else { tab.unwrap_or_default().tab() };
    let tools = filter_tools(state.tools(), tab, search.unwrap_or(""));

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&tools)?)?;
        return Ok(());
    }

    if tools.is_empty() {
        writeln!(out, "{}", "No tools match".dimmed())?;
    }
    for tool in &tools {
        writeln!(out, "{}\n", format_card(tool, &config.catalog.fallback_icon))?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_endpoint(cli.endpoint.as_deref());

    // Setup logging once the configured level is known
    setup_logging(&config, cli.is_verbose()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
