use chrono::NaiveDateTime;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// How pressing a due date is, relative to a reference moment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Overdue,
    DueToday,
    DueTomorrow,
    /// Due in 2 or 3 days
    DueSoon(u32),
    /// Due in more than 3 days
    DueLater(u32),
}

/// Coarse grouping of urgency bands for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Urgent,
    Warning,
    Relaxed,
}

impl Urgency {
    pub fn label(self) -> String {
        match self {
            Urgency::Overdue => "Overdue!".into(),
            Urgency::DueToday => "Due today".into(),
            Urgency::DueTomorrow => "Due tomorrow".into(),
            Urgency::DueSoon(days) | Urgency::DueLater(days) => format!("Due in {} days", days),
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Urgency::Overdue => "\u{1F631}",
            Urgency::DueToday => "\u{1F62C}",
            Urgency::DueTomorrow => "\u{1F525}",
            Urgency::DueSoon(_) => "\u{23F0}",
            Urgency::DueLater(_) => "\u{1F60C}",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Urgency::Overdue | Urgency::DueToday => Severity::Urgent,
            Urgency::DueTomorrow | Urgency::DueSoon(_) => Severity::Warning,
            Urgency::DueLater(_) => Severity::Relaxed,
        }
    }
}

/// Whole days from `now` until `due`, rounded up: `ceil((due - now) / 1 day)`.
/// Anything later today (or earlier today) is day 0.
pub fn days_until(due: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let millis = (due - now).num_milliseconds();
    // Integer division truncates toward zero, which is already the ceiling
    // for negative values.
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Classify a due date against the current moment
pub fn classify(due: NaiveDateTime, now: NaiveDateTime) -> Urgency {
    match days_until(due, now) {
        d if d < 0 => Urgency::Overdue,
        0 => Urgency::DueToday,
        1 => Urgency::DueTomorrow,
        d @ 2..=3 => Urgency::DueSoon(d as u32),
        d => Urgency::DueLater(u32::try_from(d).unwrap_or(u32::MAX)),
    }
}
