use std::io;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use crossterm::event::{
    self, DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info, warn};

use crate::io::notifier::{Notifier, Permission};
use crate::io::prefs::{DARK_MODE, PreferenceStore};
use crate::io::scheduler::{ReminderScheduler, ReminderTick};
use crate::model::{AppConfig, Category, Status, Task, TaskId};
use crate::ops::calendar::{self, YearMonth};
use crate::ops::cheer::{self, ConfettiPiece};
use crate::ops::grouping::pending_by_category;
use crate::ops::reminders::reminders_for;
use crate::ops::task_ops::TaskStore;

use super::form::AddTaskForm;
use super::input;
use super::render;
use super::theme::Theme;

/// Delay between activating "complete" and the status change
pub const COMPLETE_DELAY: Duration = Duration::from_millis(300);
/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(5);
/// Confetti pieces in the celebration popup
const CONFETTI_COUNT: usize = 12;

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Calendar,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Add-task popup has focus
    AddTask,
    /// Waiting for y/n on a destructive action
    Confirm,
    /// Celebration popup after completing a task
    Celebrate,
}

/// Action awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask { id: TaskId, title: String },
}

/// Shown after a task is completed
#[derive(Debug, Clone)]
pub struct Celebration {
    pub task_title: String,
    pub message: &'static str,
    pub confetti: Vec<ConfettiPiece>,
}

/// A completion waiting out the animation delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCompletion {
    pub id: TaskId,
    pub fire_at: Instant,
}

/// Transient in-app message
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub expires_at: Instant,
}

/// Calendar view cursor
#[derive(Debug, Clone)]
pub struct CalendarState {
    pub month: YearMonth,
    pub selected: NaiveDate,
    /// Index into the selected day's task list
    pub task_cursor: usize,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        CalendarState {
            month: YearMonth::of(today),
            selected: today,
            task_cursor: 0,
        }
    }

    /// Move the selection, following it into other months
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
        self.month = YearMonth::of(date);
        self.task_cursor = 0;
    }
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub config: AppConfig,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    pub dark_mode: bool,
    pub theme: Theme,
    prefs: Box<dyn PreferenceStore>,
    notifier: Box<dyn Notifier>,
    /// Source of "now"; replaceable for tests
    pub clock: fn() -> NaiveDateTime,
    pub rng: StdRng,
    /// Quote shown under the greeting, picked at startup
    pub quote: &'static str,
    /// Cursor into `pending_task_ids()` for the list view
    pub list_cursor: usize,
    /// Scroll offset (first visible row) for the list view
    pub list_scroll: usize,
    pub calendar: CalendarState,
    pub form: Option<AddTaskForm>,
    pub confirm: Option<ConfirmAction>,
    pub celebration: Option<Celebration>,
    pub pending_completions: Vec<PendingCompletion>,
    pub toasts: Vec<Toast>,
    pub status_message: Option<String>,
    pub show_help: bool,
}

/// Local wall-clock time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl App {
    pub fn new(
        store: TaskStore,
        config: AppConfig,
        prefs: Box<dyn PreferenceStore>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let dark_mode = prefs.get_flag(DARK_MODE).unwrap_or(false);
        let theme = Theme::from_config(&config.ui, dark_mode);
        let mut rng = StdRng::from_entropy();
        let quote = cheer::random_quote(&mut rng);
        let clock: fn() -> NaiveDateTime = local_now;
        let today = clock().date();

        App {
            store,
            config,
            view: View::List,
            mode: Mode::Navigate,
            should_quit: false,
            dark_mode,
            theme,
            prefs,
            notifier,
            clock,
            rng,
            quote,
            list_cursor: 0,
            list_scroll: 0,
            calendar: CalendarState::new(today),
            form: None,
            confirm: None,
            celebration: None,
            pending_completions: Vec::new(),
            toasts: Vec::new(),
            status_message: None,
            show_help: false,
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    pub fn greeting(&self) -> &'static str {
        cheer::greeting(self.now().hour())
    }

    pub fn notification_permission(&self) -> Permission {
        self.notifier.permission()
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Open tasks in list-view order (grouped by category)
    pub fn pending_task_ids(&self) -> Vec<TaskId> {
        pending_by_category(self.store.all())
            .values()
            .flat_map(|group| group.iter().map(|t| t.id))
            .collect()
    }

    /// Open tasks due on the calendar's selected day
    pub fn selected_day_tasks(&self) -> Vec<&Task> {
        calendar::tasks_on(self.store.all(), self.calendar.selected)
    }

    /// Task under the cursor in the current view
    pub fn selected_task_id(&self) -> Option<TaskId> {
        match self.view {
            View::List => {
                let ids = self.pending_task_ids();
                ids.get(self.list_cursor.min(ids.len().saturating_sub(1)))
                    .copied()
            }
            View::Calendar => {
                let tasks = self.selected_day_tasks();
                tasks
                    .get(self.calendar.task_cursor.min(tasks.len().saturating_sub(1)))
                    .map(|t| t.id)
            }
        }
    }

    /// Keep cursors inside their lists after the store changed
    pub fn clamp_cursors(&mut self) {
        let count = self.pending_task_ids().len();
        self.list_cursor = self.list_cursor.min(count.saturating_sub(1));
        let day_count = self.selected_day_tasks().len();
        self.calendar.task_cursor = self.calendar.task_cursor.min(day_count.saturating_sub(1));
    }

    // -----------------------------------------------------------------------
    // Intents
    // -----------------------------------------------------------------------

    pub fn open_add_form(&mut self) {
        let category = self.config.form.default_category;
        let today = match self.view {
            View::Calendar if self.calendar.selected >= self.today() => self.calendar.selected,
            _ => self.today(),
        };
        self.form = Some(AddTaskForm::new(category, today));
        self.mode = Mode::AddTask;
    }

    pub fn close_add_form(&mut self) {
        self.form = None;
        self.mode = Mode::Navigate;
    }

    /// Try to add the task described by the form. On rejection the form
    /// stays open with the reason shown.
    pub fn submit_add_form(&mut self) {
        let today = self.today();
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let new = match form.to_new_task(today) {
            Ok(new) => new,
            Err(e) => {
                form.error = Some(e.to_string());
                return;
            }
        };
        match self.store.add(new) {
            Ok(task) => {
                let title = task.title.clone();
                let id = task.id;
                self.close_add_form();
                self.status_message = Some(format!("added \"{}\"", title));
                self.select_in_list(id);
            }
            Err(e) => {
                form.error = Some(e.to_string());
            }
        }
    }

    fn select_in_list(&mut self, id: TaskId) {
        if let Some(pos) = self.pending_task_ids().iter().position(|t| *t == id) {
            self.list_cursor = pos;
        }
    }

    /// todo → in progress. Other states are left alone.
    pub fn start_task(&mut self, id: TaskId) {
        if self.store.get(id).map(|t| t.status) == Some(Status::Todo) {
            self.store.set_status(id, Status::InProgress);
        }
    }

    /// Queue a completion after the animation delay. A second request for a
    /// task that is already queued (or done) is ignored.
    pub fn request_complete(&mut self, id: TaskId, now: Instant) {
        let Some(task) = self.store.get(id) else {
            return;
        };
        if task.is_done() || self.pending_completions.iter().any(|p| p.id == id) {
            return;
        }
        self.pending_completions.push(PendingCompletion {
            id,
            fire_at: now + COMPLETE_DELAY,
        });
    }

    pub fn is_completing(&self, id: TaskId) -> bool {
        self.pending_completions.iter().any(|p| p.id == id)
    }

    /// Fire queued completions whose delay has elapsed
    pub fn process_pending(&mut self, now: Instant) {
        let (ready, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending_completions)
            .into_iter()
            .partition(|p| p.fire_at <= now);
        self.pending_completions = waiting;
        for pending in ready {
            self.complete_now(pending.id);
        }
    }

    /// Mark done and celebrate
    pub fn complete_now(&mut self, id: TaskId) {
        let Some(task) = self.store.set_status(id, Status::Done) else {
            return;
        };
        let task_title = task.title.clone();
        self.celebration = Some(Celebration {
            task_title,
            message: cheer::random_success_message(&mut self.rng),
            confetti: cheer::confetti(&mut self.rng, CONFETTI_COUNT),
        });
        self.mode = Mode::Celebrate;
        self.clamp_cursors();
    }

    pub fn close_celebration(&mut self) {
        self.celebration = None;
        self.mode = Mode::Navigate;
    }

    /// The forward action for the list view: start a todo task, complete an
    /// in-progress one (after the delay).
    pub fn advance_task(&mut self, id: TaskId, now: Instant) {
        match self.store.get(id).map(|t| t.status) {
            Some(Status::Todo) => self.start_task(id),
            Some(Status::InProgress) => self.request_complete(id, now),
            _ => {}
        }
    }

    /// Calendar entries step forward immediately
    pub fn advance_calendar_task(&mut self, id: TaskId) {
        match self.store.get(id).map(|t| t.status) {
            Some(Status::Todo) => self.start_task(id),
            Some(Status::InProgress) => self.complete_now(id),
            _ => {}
        }
    }

    pub fn ask_delete(&mut self, id: TaskId) {
        if let Some(task) = self.store.get(id) {
            self.confirm = Some(ConfirmAction::DeleteTask {
                id,
                title: task.title.clone(),
            });
            self.mode = Mode::Confirm;
        }
    }

    pub fn confirm_pending_action(&mut self) {
        if let Some(ConfirmAction::DeleteTask { id, title }) = self.confirm.take() {
            if self.store.remove(id).is_some() {
                self.pending_completions.retain(|p| p.id != id);
                self.status_message = Some(format!("deleted \"{}\"", title));
            }
            self.clamp_cursors();
        }
        self.mode = Mode::Navigate;
    }

    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
        self.mode = Mode::Navigate;
    }

    /// Force a theme for this session without touching the stored flag
    pub fn override_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
        self.theme = Theme::from_config(&self.config.ui, dark);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.theme = Theme::from_config(&self.config.ui, self.dark_mode);
        if let Err(e) = self.prefs.set_flag(DARK_MODE, self.dark_mode) {
            warn!(error = %e, "could not save dark mode preference");
            self.status_message = Some(format!("could not save preference: {}", e));
        }
    }

    /// Explicit "enable reminders" request from the user
    pub fn enable_reminders(&mut self) {
        match self.notifier.request_permission() {
            Permission::Granted => {
                self.notifier.notify(
                    "Notifications enabled! \u{1F389}",
                    "You'll now get reminders when tasks are due.",
                    "rally-enabled",
                );
                self.status_message = Some("desktop reminders on".into());
            }
            Permission::Denied => {
                self.status_message = Some("desktop reminders are off; in-app reminders only".into());
            }
            Permission::Unsupported => {
                self.status_message =
                    Some("this terminal can't show desktop notifications; in-app reminders only".into());
            }
            Permission::Default => {}
        }
    }

    // -----------------------------------------------------------------------
    // Reminders
    // -----------------------------------------------------------------------

    /// React to a scheduler tick
    pub fn on_reminder_tick(&mut self, tick: ReminderTick, now: Instant) {
        if tick == ReminderTick::Activated && self.notifier.permission() == Permission::Default {
            let permission = self.notifier.request_permission();
            info!(?permission, "notification permission requested");
        }
        self.run_reminder_check(now);
    }

    /// The hosting view came back to the foreground
    pub fn on_foreground(&mut self, now: Instant) {
        debug!("terminal regained focus");
        self.run_reminder_check(now);
    }

    /// One notification and one toast per open task due today
    pub fn run_reminder_check(&mut self, now: Instant) {
        let reminders = reminders_for(self.store.all(), self.today());
        debug!(count = reminders.len(), "due-today check");
        let desktop =
            self.config.reminders.desktop && self.notifier.permission() == Permission::Granted;
        for reminder in reminders {
            if desktop {
                self.notifier
                    .notify(&reminder.title, &reminder.body, &reminder.dedup_tag);
            }
            self.push_toast(reminder.toast_title, reminder.toast_body, now);
        }
    }

    pub fn push_toast(&mut self, title: String, body: String, now: Instant) {
        self.toasts.push(Toast {
            title,
            body,
            expires_at: now + TOAST_TTL,
        });
    }

    pub fn prune_toasts(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }
}

/// Sample tasks for `--demo`, due relative to `now`
pub fn seed_demo_tasks(store: &mut TaskStore, now: NaiveDateTime) {
    use crate::model::NewTask;
    let days = |n: i64| now + chrono::Duration::days(n);
    let samples = [
        NewTask::new("Submit Business Management Essay", Category::School, days(2))
            .with_description("Final essay on sustainable business practices - 2000 words")
            .with_tag("Online Submission")
            .with_tag("Essay"),
        NewTask::new("Rugby Training Session", Category::Rugby, days(1))
            .with_description("Full team practice at 4 PM - work on lineout throws")
            .with_tag("Team Practice"),
        NewTask::new("Piano Practice - Chopin", Category::Music, now)
            .with_description("Nocturne in E-flat major, focus on dynamics")
            .with_tag("Classical")
            .with_tag("Performance Prep"),
        NewTask::new("Plan Weekend Date Ideas", Category::Personal, days(3))
            .with_description("Research fun activities for Saturday")
            .with_tag("Fun"),
    ];
    for sample in samples {
        if let Err(e) = store.add(sample) {
            warn!(error = %e, "could not seed demo task");
        }
    }
    if let Some(id) = store.all().get(2).map(|t| t.id) {
        store.set_status(id, Status::InProgress);
    }
}

/// Run the TUI application
pub fn run(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    let mut scheduler = ReminderScheduler::start(app.config.reminders.interval())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableFocusChange,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableFocusChange,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app, &scheduler);

    // Deactivation releases the timer before the terminal is restored
    scheduler.stop();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableFocusChange,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    scheduler: &ReminderScheduler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let now = Instant::now();
        for tick in scheduler.poll() {
            app.on_reminder_tick(tick, now);
        }
        app.process_pending(now);
        app.prune_toasts(now);

        terminal.draw(|frame| render::render(frame, app))?;

        // Short poll keeps the completion delay and toast expiry responsive
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key, Instant::now());
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                Event::FocusGained => app.on_foreground(Instant::now()),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_app_reads_dark_mode_flag() {
        let app = app_with_prefs(true);
        assert!(app.dark_mode);
        assert_eq!(app.theme.background, Theme::dark().background);
        let app = app_with_prefs(false);
        assert!(!app.dark_mode);
    }

    #[test]
    fn toggle_dark_mode_persists_flag() {
        let mut app = empty_app();
        app.toggle_dark_mode();
        assert!(app.dark_mode);
        assert_eq!(app.prefs.get_flag(DARK_MODE), Some(true));
        app.toggle_dark_mode();
        assert_eq!(app.prefs.get_flag(DARK_MODE), Some(false));
        assert_eq!(app.theme.background, Theme::light().background);
    }

    #[test]
    fn list_order_follows_category_groups() {
        let app = sample_app();
        let titles: Vec<String> = app
            .pending_task_ids()
            .iter()
            .map(|id| app.store.get(*id).unwrap().title.clone())
            .collect();
        // School first (first appearance), its two tasks together
        assert_eq!(
            titles,
            vec!["Submit essay", "Revise exam", "Rugby training", "Piano scales"]
        );
    }

    #[test]
    fn completion_waits_for_delay() {
        let mut app = sample_app();
        let id = app.pending_task_ids()[0];
        let t0 = Instant::now();
        app.request_complete(id, t0);
        assert!(app.is_completing(id));

        app.process_pending(t0 + Duration::from_millis(100));
        assert_eq!(app.store.get(id).unwrap().status, Status::Todo);

        app.process_pending(t0 + COMPLETE_DELAY);
        assert_eq!(app.store.get(id).unwrap().status, Status::Done);
        assert!(!app.is_completing(id));
        assert_eq!(app.mode, Mode::Celebrate);
        let celebration = app.celebration.as_ref().unwrap();
        assert_eq!(celebration.task_title, "Submit essay");
        assert_eq!(celebration.confetti.len(), CONFETTI_COUNT);
    }

    #[test]
    fn double_activation_queues_once() {
        let mut app = sample_app();
        let id = app.pending_task_ids()[0];
        let t0 = Instant::now();
        app.request_complete(id, t0);
        app.request_complete(id, t0 + Duration::from_millis(10));
        assert_eq!(app.pending_completions.len(), 1);
    }

    #[test]
    fn advance_steps_forward() {
        let mut app = sample_app();
        let id = app.pending_task_ids()[0];
        let t0 = Instant::now();
        app.advance_task(id, t0);
        assert_eq!(app.store.get(id).unwrap().status, Status::InProgress);
        app.advance_task(id, t0);
        assert!(app.is_completing(id));
    }

    #[test]
    fn calendar_advance_completes_immediately() {
        let mut app = sample_app();
        let id = app.pending_task_ids()[0];
        app.advance_calendar_task(id);
        app.advance_calendar_task(id);
        assert_eq!(app.store.get(id).unwrap().status, Status::Done);
        assert!(app.celebration.is_some());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = sample_app();
        let id = app.pending_task_ids()[1];
        app.ask_delete(id);
        assert_eq!(app.mode, Mode::Confirm);
        assert!(app.store.get(id).is_some());

        app.cancel_confirm();
        assert!(app.store.get(id).is_some());

        app.ask_delete(id);
        app.confirm_pending_action();
        assert!(app.store.get(id).is_none());
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.len(), 3);
    }

    #[test]
    fn delete_cancels_pending_completion() {
        let mut app = sample_app();
        let id = app.pending_task_ids()[0];
        app.request_complete(id, Instant::now());
        app.ask_delete(id);
        app.confirm_pending_action();
        assert!(app.pending_completions.is_empty());
    }

    #[test]
    fn submit_rejects_blank_title_and_keeps_form() {
        let mut app = sample_app();
        app.open_add_form();
        app.submit_add_form();
        assert_eq!(app.mode, Mode::AddTask);
        assert_eq!(
            app.form.as_ref().unwrap().error.as_deref(),
            Some("a task needs a title")
        );
        assert_eq!(app.store.len(), 4);
    }

    #[test]
    fn submit_rejects_bad_due_date() {
        let mut app = sample_app();
        app.open_add_form();
        let form = app.form.as_mut().unwrap();
        form.title.set("Something");
        form.due.set("whenever");
        app.submit_add_form();
        assert!(app.form.as_ref().unwrap().error.as_deref().unwrap().contains("whenever"));
        assert_eq!(app.store.len(), 4);
    }

    #[test]
    fn submit_adds_task_and_selects_it() {
        let mut app = sample_app();
        app.open_add_form();
        let form = app.form.as_mut().unwrap();
        form.title.set("Music theory");
        form.category = Category::Music;
        app.submit_add_form();
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.form.is_none());
        let added = app.store.all().last().unwrap();
        assert_eq!(added.title, "Music theory");
        assert_eq!(added.status, Status::Todo);
        assert_eq!(added.due.date(), fixed_now().date());
        assert_eq!(app.selected_task_id(), Some(added.id));
    }

    #[test]
    fn reminder_check_notifies_and_toasts_due_today() {
        let (mut app, log) = app_with_recording_notifier(Permission::Granted);
        seed(&mut app);
        app.run_reminder_check(Instant::now());
        // Only "Submit essay" is due on the fixed "today"
        assert_eq!(app.toasts.len(), 1);
        assert!(app.toasts[0].body.contains("Submit essay"));
        let sent = log.borrow();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].1.contains("Submit essay"));
    }

    #[test]
    fn regaining_focus_repeats_the_check() {
        let (mut app, log) = app_with_recording_notifier(Permission::Granted);
        seed(&mut app);
        let t0 = Instant::now();
        app.on_foreground(t0);
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].2, app.pending_task_ids()[0].to_string());

        // Nothing remembers earlier reminders
        app.on_foreground(t0 + Duration::from_secs(1));
        assert_eq!(app.toasts.len(), 2);
        let sent = log.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
    }

    #[test]
    fn denied_permission_still_toasts() {
        let (mut app, log) = app_with_recording_notifier(Permission::Denied);
        seed(&mut app);
        app.on_reminder_tick(ReminderTick::Activated, Instant::now());
        assert_eq!(app.toasts.len(), 1);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn activation_requests_default_permission() {
        let (mut app, log) = app_with_recording_notifier(Permission::Default);
        seed(&mut app);
        app.on_reminder_tick(ReminderTick::Activated, Instant::now());
        assert_eq!(app.notification_permission(), Permission::Granted);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn toasts_expire() {
        let mut app = empty_app();
        let t0 = Instant::now();
        app.push_toast("a".into(), "b".into(), t0);
        app.prune_toasts(t0 + Duration::from_secs(1));
        assert_eq!(app.toasts.len(), 1);
        app.prune_toasts(t0 + TOAST_TTL);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn demo_seed_adds_four_tasks() {
        let mut store = TaskStore::new();
        seed_demo_tasks(&mut store, fixed_now());
        assert_eq!(store.len(), 4);
        assert_eq!(store.all()[2].status, Status::InProgress);
        assert_eq!(store.all()[0].tags, vec!["Online Submission", "Essay"]);
    }
}
