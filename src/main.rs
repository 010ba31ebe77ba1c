use std::sync::Arc;

use anyhow::Context;
use baseball_live::commands;
use baseball_live::config::{self, Config};
use baseball_live::data_provider::{GameStatus, MlbDataProvider, ScheduleGame};
use baseball_live::tui::{self, widgets::PreviewScreen, App, Phase};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "baseball-live")]
#[command(
    about = "Live MLB pitch-by-pitch viewer",
    long_about = "Live MLB pitch-by-pitch viewer\n\nIf no command is specified, today's games are listed and the chosen one is followed live."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Use built-in sample data instead of the MLB Stats API
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the schedule of games
    Schedule {
        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Display current configuration
    Config,
}

fn create_client(cli: &Cli) -> Arc<dyn MlbDataProvider> {
    #[cfg(feature = "development")]
    if cli.mock {
        tracing::info!("Using mock data provider");
        return Arc::new(baseball_live::dev::mock_client::MockClient::new());
    }
    #[cfg(not(feature = "development"))]
    let _ = cli;

    match baseball_live::api::Client::new() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            let error_msg = format!("Failed to create MLB API client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("render_interval_ms: {}", cfg.render_interval_ms);
    println!("time_format: {}", cfg.time_format);
    println!("use_unicode: {}", cfg.use_unicode);
    println!("check_color_support: {}", cfg.check_color_support);
    println!();
    println!("[theme]");
    println!("zone_fg: {:?}", cfg.theme.zone_fg);
    println!("text_fg: {:?}", cfg.theme.text_fg);
    println!("fallback_pitch_fg: {:?}", cfg.theme.fallback_pitch_fg);
    println!("header_fg: {:?}{}",
        cfg.theme.header_fg(),
        if cfg.theme.header_fg.is_none() { " (auto: zone_fg)" } else { "" }
    );
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

fn preview_screen(game: &ScheduleGame, config: &Config) -> PreviewScreen {
    PreviewScreen {
        away_team: game.away_team.clone(),
        home_team: game.home_team.clone(),
        start: game
            .start_time
            .with_timezone(&Local)
            .format(&config.time_format)
            .to_string(),
    }
}

/// List today's games, let the user pick one and follow it
async fn run_interactive(client: Arc<dyn MlbDataProvider>, config: Config) -> anyhow::Result<()> {
    let mut app = App::new();

    let games = client.schedule(None).await.context("Failed to fetch schedule")?;
    if games.is_empty() {
        println!("{}", commands::schedule::NO_GAMES);
        return Ok(());
    }

    let game = commands::schedule::prompt_selection(&games, &config)?;
    let status = client
        .game_status(game.game_pk)
        .await
        .with_context(|| format!("Failed to fetch status of game {}", game.game_pk))?;
    tracing::info!("Selected game {} ({})", game.game_pk, status);

    match app.select_game(status) {
        Phase::Preview => tui::run_preview(preview_screen(game, &config), &config).await?,
        Phase::Running => tui::run_live(client, game.game_pk, &config).await?,
        Phase::Terminating if status == GameStatus::Final => {
            commands::highlights::run(client.as_ref(), game.game_pk, &config.display()).await?
        }
        phase => tracing::debug!("Nothing to do in phase {:?}", phase),
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Handle Config command separately (doesn't need a client)
    if let Some(Commands::Config) = cli.command {
        handle_config_command();
        return;
    }

    let client = create_client(&cli);
    let result = match cli.command {
        None => run_interactive(client, config).await,
        Some(Commands::Schedule { date }) => {
            commands::schedule::run(client.as_ref(), date, &config).await
        }
        Some(Commands::Config) => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
