use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::notifier::{Notifier, Permission};
use crate::io::prefs::{DARK_MODE, MemoryPreferences, PreferenceStore};
use crate::model::{AppConfig, Category, NewTask};
use crate::ops::cheer::QUOTES;
use crate::ops::task_ops::TaskStore;
use crate::tui::app::{App, CalendarState};

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole app at the standard test size
pub fn render_app(app: &mut App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _| crate::tui::render::render(frame, app))
}

/// Wednesday 2025-05-14, 09:30
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, 14)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

/// Notifications sent through a [`RecordingNotifier`]: (title, body, tag)
pub type SentLog = Rc<RefCell<Vec<(String, String, String)>>>;

/// Notifier that records what it was asked to show. A `Default`
/// permission turns into `Granted` when requested.
pub struct RecordingNotifier {
    permission: Permission,
    sent: SentLog,
}

impl Notifier for RecordingNotifier {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn request_permission(&mut self) -> Permission {
        if self.permission == Permission::Default {
            self.permission = Permission::Granted;
        }
        self.permission
    }

    fn notify(&mut self, title: &str, body: &str, tag: &str) {
        self.sent
            .borrow_mut()
            .push((title.to_string(), body.to_string(), tag.to_string()));
    }
}

/// App pinned to [`fixed_now`] with a seeded RNG and the first quote
pub fn build_app(prefs: MemoryPreferences, notifier: Box<dyn Notifier>) -> App {
    let mut app = App::new(TaskStore::new(), AppConfig::default(), Box::new(prefs), notifier);
    app.clock = fixed_now;
    app.calendar = CalendarState::new(fixed_now().date());
    app.rng = StdRng::seed_from_u64(7);
    app.quote = QUOTES[0];
    app
}

pub fn empty_app() -> App {
    build_app(MemoryPreferences::default(), recording(Permission::Denied).0)
}

pub fn app_with_prefs(dark_mode: bool) -> App {
    let mut prefs = MemoryPreferences::default();
    prefs.set_flag(DARK_MODE, dark_mode).unwrap();
    build_app(prefs, recording(Permission::Denied).0)
}

pub fn app_with_recording_notifier(permission: Permission) -> (App, SentLog) {
    let (notifier, log) = recording(permission);
    (build_app(MemoryPreferences::default(), notifier), log)
}

fn recording(permission: Permission) -> (Box<dyn Notifier>, SentLog) {
    let sent = SentLog::default();
    let notifier = RecordingNotifier {
        permission,
        sent: Rc::clone(&sent),
    };
    (Box::new(notifier), sent)
}

/// Four open tasks relative to [`fixed_now`]: one due now (today), one
/// tomorrow, one in five days, one two days overdue. Insertion order puts
/// the two school tasks apart so grouping has something to do.
pub fn seed(app: &mut App) {
    let now = fixed_now();
    let samples = [
        NewTask::new("Submit essay", Category::School, now)
            .with_description("Sustainable business practices, 2000 words")
            .with_tag("Essay"),
        NewTask::new("Rugby training", Category::Rugby, now + Duration::days(1)),
        NewTask::new("Revise exam", Category::School, now + Duration::days(5)),
        NewTask::new("Piano scales", Category::Music, now - Duration::days(2)),
    ];
    for sample in samples {
        app.store.add(sample).unwrap();
    }
}

pub fn sample_app() -> App {
    let mut app = empty_app();
    seed(&mut app);
    app
}
