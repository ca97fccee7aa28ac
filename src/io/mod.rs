pub mod config_io;
pub mod notifier;
pub mod prefs;
pub mod scheduler;
