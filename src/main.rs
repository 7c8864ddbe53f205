#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use nyrna::common;
use nyrna::config::ConfigStore;
use nyrna::notify::Notifier;

#[derive(Parser)]
#[command(name = "nyrna")]
#[command(version)]
#[command(about = "Hotkey settings and notifications for the Nyrna process suspender", long_about = None)]
struct Cli {
    /// Directory holding nyrna_config.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the configured hotkey
    Hotkey,

    /// Persist a new hotkey
    SetHotkey {
        /// Key combination, e.g. "Pause" or "F9"
        key: String,
    },

    /// Send a desktop notification
    Notify {
        #[command(subcommand)]
        event: NotifyEvent,
    },

    /// Log desktop session details relevant to notification delivery
    SessionInfo,
}

#[derive(Subcommand)]
enum NotifyEvent {
    /// "<name> was suspended."
    Suspend { name: String },
    /// "<name> was resumed."
    Resume { name: String },
    /// Report a hotkey activation failure
    Issue { message: String },
}

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let mut store = ConfigStore::new(cli.config_dir.unwrap_or_else(ConfigStore::default_dir));
    if let Err(e) = store.load().map(|_| ()) {
        if e.is_read_error() {
            error!(path = %store.path().display(), error = %e, "Failed to load config file");
            error!(path = %store.path().display(), "Please fix or remove your config file.");
            std::process::exit(1);
        }
        warn!(error = %e, "Config not loaded, using defaults");
    }
    if let Err(e) = store.create_if_missing() {
        warn!(error = %e, "Could not create default config file");
    }

    match cli.command.unwrap_or(Command::Hotkey) {
        Command::Hotkey => println!("{}", store.hotkey()),
        Command::SetHotkey { key } => {
            store
                .write(&key)
                .with_context(|| format!("Failed to save hotkey {:?}", key))?;
        }
        Command::Notify { event } => {
            let notifier = Notifier::desktop();
            match event {
                NotifyEvent::Suspend { name } => notifier.notify_suspend(&name),
                NotifyEvent::Resume { name } => notifier.notify_resume(&name),
                NotifyEvent::Issue { message } => notifier.notify_hotkey_failure(&message),
            }
        }
        Command::SessionInfo => common::debug::log_session_info(),
    }

    Ok(())
}
