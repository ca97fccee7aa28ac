use std::fs;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use rally::io::config_io::read_config;
use rally::io::notifier::{Notifier, Permission, TerminalNotifier};
use rally::io::prefs::{DARK_MODE, PreferenceStore, TomlPreferences};
use rally::io::scheduler::{ReminderScheduler, ReminderTick};
use rally::model::Category;
use tempfile::TempDir;

#[test]
fn scheduler_activates_ticks_and_stops() {
    let mut scheduler = ReminderScheduler::start(Duration::from_millis(20)).unwrap();
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut ticks = Vec::new();
    while Instant::now() < deadline && !ticks.contains(&ReminderTick::Interval) {
        ticks.extend(scheduler.poll());
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(ticks.first(), Some(&ReminderTick::Activated));
    assert!(ticks.contains(&ReminderTick::Interval));

    scheduler.stop();
    assert!(!scheduler.is_running());
    // Nothing arrives after the timer is released
    scheduler.poll();
    std::thread::sleep(Duration::from_millis(60));
    assert!(scheduler.poll().is_empty());
}

#[test]
fn dark_mode_survives_a_restart_and_keeps_comments() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("preferences.toml"),
        "# my settings\n[flags]\n# theme\ndark_mode = false\n",
    )
    .unwrap();

    let mut prefs = TomlPreferences::open(dir.path());
    assert_eq!(prefs.get_flag(DARK_MODE), Some(false));
    prefs.set_flag(DARK_MODE, true).unwrap();

    let reopened = TomlPreferences::open(dir.path());
    assert_eq!(reopened.get_flag(DARK_MODE), Some(true));
    let text = fs::read_to_string(dir.path().join("preferences.toml")).unwrap();
    assert!(text.contains("# my settings"));
    assert!(text.contains("# theme"));
}

#[test]
fn config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[ui]\nshow_key_hints = false\n\n[form]\ndefault_category = \"rugby\"\n",
    )
    .unwrap();
    let config = read_config(dir.path()).unwrap();
    assert!(!config.ui.show_key_hints);
    assert_eq!(config.form.default_category, Category::Rugby);
    assert_eq!(config.reminders.interval_minutes, 60);
}

#[test]
fn broken_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[ui\n").unwrap();
    let err = read_config(dir.path()).unwrap_err();
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn terminal_notifier_is_permission_gated() {
    let mut unsupported = TerminalNotifier::new(Vec::new(), false);
    assert_eq!(unsupported.request_permission(), Permission::Unsupported);
    unsupported.notify("t", "b", "task-1");
    assert!(unsupported.into_inner().is_empty());

    let mut notifier = TerminalNotifier::new(Vec::new(), true);
    notifier.notify("t", "before permission", "task-1");
    assert_eq!(notifier.request_permission(), Permission::Granted);
    notifier.notify("You got this!", "due today", "task-1");
    let out = String::from_utf8(notifier.into_inner()).unwrap();
    assert_eq!(out, "\x1b]9;You got this!: due today\x07");
}
