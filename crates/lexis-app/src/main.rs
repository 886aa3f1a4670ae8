use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lexis_config::Config;
use lexis_config::profile::{self, MAIN_PROFILE};
use lexis_core::entry::count_entries;
use lexis_core::invoker::DictCommand;
use lexis_core::state::{AppState, ProfileLocation};
use lexis_types::AppEvent;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use self::controller::AppController;
use self::status::format_entry_count;

pub mod context;
pub mod controller;
pub mod events;
pub mod status;
pub mod ui;


#[derive(Parser)]
#[command(name = "lexis", about = "Save dictionary definitions as vocabulary notes")]
struct Cli {
    /// Settings profile to use
    #[arg(long, global = true, default_value = MAIN_PROFILE)]
    profile: String,

    /// Directory holding settings profiles
    #[arg(long, global = true, env = "LEXIS_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an entry for WORD, or for the current desktop selection
    Lookup { word: Option<String> },
    /// Show the number of saved entries
    Status,
    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    /// Fields: word-directory, dictionary, tool-path, not-found-exit-code
    Set { field: String, value: String },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("LEXIS_LOG_JSON").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let root = cli.config_dir.unwrap_or_else(profile::default_config_dir);

    profile::init_user_config(&root)?;
    let config = profile::load_user_profile(&root, &cli.profile)?;
    let state = Arc::new(AppState::new(
        config,
        Some(ProfileLocation {
            root,
            name: cli.profile,
        }),
    ));

    match cli.command {
        Command::Lookup { word } => {
            let selection = match word {
                Some(word) => word,
                None => lexis_io::selection::read_selection()?,
            };
            run(state, selection).await
        }
        Command::Status => print_status(&state).await,
        Command::Config { action } => match action {
            ConfigAction::Show => {
                let config = state.config.read().await;
                println!("{}", serde_json::to_string_pretty(&*config)?);
                Ok(())
            }
            ConfigAction::Set { field, value } => {
                state.update_setting(&field, &value).await?;
                println!("Settings saved");
                Ok(())
            }
        },
    }
}

/// Run one lookup through the event loop and terminal frontend
async fn run(state: Arc<AppState>, selection: String) -> anyhow::Result<()> {
    let backend = {
        let config = state.config.read().await;
        Arc::new(DictCommand::from_config(&config.dictionary))
    };

    let controller = AppController::new(state, backend);
    let mut tasks = controller.spawn_tasks(BufReader::new(tokio::io::stdin()), tokio::io::stdout());

    controller
        .ui_sender()
        .send(AppEvent::CreateEntry(selection))
        .await
        .context("Event loop is not running")?;

    // Lookups are not cancellable; the frontend returns once the lookup is settled
    match tasks.join_next().await {
        Some(Ok(Ok(()))) => tracing::debug!("first task finished"),
        Some(Ok(Err(e))) => tracing::error!("task failed: {e:#}"),
        Some(Err(e)) => tracing::error!("task panicked: {e}"),
        None => {}
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("task failed during shutdown: {e:#}");
        }
    }

    let status = controller.status().snapshot().await;
    tracing::info!(
        "Session: {} lookups, {} entries created, {} failures",
        status.lookups,
        status.entries_created,
        status.failures
    );

    Ok(())
}

async fn print_status(state: &AppState) -> anyhow::Result<()> {
    let config: Config = state.config.read().await.clone();

    let entry_count = count_entries(&config.lexicon.word_directory)
        .inspect_err(|e| tracing::warn!("Failed to count entries: {}", e))
        .ok();

    println!("{}", format_entry_count(entry_count));
    println!("Word directory: {}", config.lexicon.word_directory);
    println!("Dictionary: {}", config.dictionary.dictionary_id);
    println!("Tool: {}", config.dictionary.tool_path);
    if let Some(location) = state.profile() {
        println!(
            "Profile: {}",
            profile::profile_path(&location.root, &location.name).display()
        );
    }
    Ok(())
}
