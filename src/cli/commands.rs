use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rally", about = concat!("rally v", env!("CARGO_PKG_VERSION"), " - you've got this \u{1F495}"), version)]
pub struct Cli {
    /// Use the dark theme for this session
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Use the light theme for this session
    #[arg(long)]
    pub light: bool,

    /// Never raise desktop notifications; reminders stay in the app
    #[arg(long)]
    pub no_desktop_notify: bool,

    /// Start with a few sample tasks
    #[arg(long)]
    pub demo: bool,

    /// Read config.toml and preferences.toml from this directory
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

impl Cli {
    /// Theme forced from the command line, if any
    pub fn theme_override(&self) -> Option<bool> {
        if self.dark {
            Some(true)
        } else if self.light {
            Some(false)
        } else {
            None
        }
    }
}
