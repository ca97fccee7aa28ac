use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rally::cli::commands::Cli;
use rally::io::config_io::{default_config_dir, read_config};
use rally::io::notifier::{DisabledNotifier, Notifier, TerminalNotifier};
use rally::io::prefs::TomlPreferences;
use rally::ops::task_ops::TaskStore;
use rally::tui::app::{App, local_now, seed_demo_tasks};

/// Environment variable holding the log filter; logging is off when unset
const LOG_ENV: &str = "RALLY_LOG";

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = cli.config_dir.clone().unwrap_or_else(default_config_dir);
    install_tracing(&config_dir);

    let config = read_config(&config_dir)?;
    let prefs = TomlPreferences::open(&config_dir);
    let notifier: Box<dyn Notifier> = if cli.no_desktop_notify || !config.reminders.desktop {
        Box::new(DisabledNotifier)
    } else {
        Box::new(TerminalNotifier::from_env())
    };

    let mut store = TaskStore::new();
    if cli.demo {
        seed_demo_tasks(&mut store, local_now());
    }

    let mut app = App::new(store, config, Box::new(prefs), notifier);
    if let Some(dark) = cli.theme_override() {
        app.override_dark_mode(dark);
    }
    tracing::info!(config_dir = %config_dir.display(), demo = cli.demo, "starting");
    rally::tui::run(app)
}

/// Log to `<config dir>/rally.log` when RALLY_LOG is set. The TUI owns the
/// terminal, so nothing is ever written to stdout or stderr.
fn install_tracing(config_dir: &Path) {
    if std::env::var_os(LOG_ENV).is_none() {
        return;
    }
    if fs::create_dir_all(config_dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config_dir.join("rally.log"))
    else {
        return;
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_target(false)
        .compact()
        .try_init();
}
