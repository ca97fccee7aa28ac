use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::model::task::Task;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Column headings; weeks start on Sunday
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// `month` is 1-based. Returns `None` for months outside 1..=12 or years
    /// chrono cannot represent.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| YearMonth { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            YearMonth { year: self.year + 1, month: 1 }
        } else {
            YearMonth { year: self.year, month: self.month + 1 }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            YearMonth { year: self.year - 1, month: 12 }
        } else {
            YearMonth { year: self.year, month: self.month - 1 }
        }
    }

    pub fn days_in_month(self) -> u32 {
        let next = self.next();
        match NaiveDate::from_ymd_opt(next.year, next.month, 1) {
            Some(first_of_next) => (first_of_next - self.first_day()).num_days() as u32,
            // December of the last representable year
            None => 31,
        }
    }

    /// Weekday of day 1, counted from Sunday = 0
    pub fn first_weekday(self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// One day of the grid and the open tasks due on it
#[derive(Debug, Clone)]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    /// Tasks due that day that are not done, in store order
    pub tasks: Vec<&'a Task>,
    pub is_today: bool,
    /// Strictly before today (dates only)
    pub is_past: bool,
    /// Past and still has open tasks
    pub overdue_indicator: bool,
}

impl DayBucket<'_> {
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

#[derive(Debug, Clone)]
pub enum CalendarCell<'a> {
    /// Filler before day 1 so the grid aligns to Sunday
    Placeholder,
    Day(DayBucket<'a>),
}

/// A month laid out as a 7-column grid
#[derive(Debug, Clone)]
pub struct CalendarMonth<'a> {
    pub month: YearMonth,
    pub cells: Vec<CalendarCell<'a>>,
}

impl<'a> CalendarMonth<'a> {
    /// Rows of up to 7 cells
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell<'a>]> {
        self.cells.chunks(7)
    }

    /// Bucket for day-of-month `day`
    pub fn day(&self, day: u32) -> Option<&DayBucket<'a>> {
        self.days().find(|b| b.day() == day)
    }

    pub fn days(&self) -> impl Iterator<Item = &DayBucket<'a>> {
        self.cells.iter().filter_map(|c| match c {
            CalendarCell::Day(bucket) => Some(bucket),
            CalendarCell::Placeholder => None,
        })
    }
}

/// Open tasks due on `date`, regardless of time of day
pub fn tasks_on(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| !t.is_done() && t.due.date() == date)
        .collect()
}

/// Lay out `month` with each day's open tasks. `today` drives the
/// today/past flags.
pub fn month_grid(tasks: &[Task], month: YearMonth, today: NaiveDate) -> CalendarMonth<'_> {
    let leading = month.first_weekday() as usize;
    let days = month.days_in_month();
    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend((0..leading).map(|_| CalendarCell::Placeholder));

    for date in month.first_day().iter_days().take(days as usize) {
        let day_tasks = tasks_on(tasks, date);
        let is_past = date < today;
        cells.push(CalendarCell::Day(DayBucket {
            date,
            overdue_indicator: is_past && !day_tasks.is_empty(),
            tasks: day_tasks,
            is_today: date == today,
            is_past,
        }));
    }

    CalendarMonth { month, cells }
}

/// Whole-collection counts shown under the month grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarStats {
    pub pending: usize,
    pub completed: usize,
    /// Open tasks whose due moment has passed, including earlier today
    pub overdue: usize,
}

impl CalendarStats {
    pub fn from_tasks(tasks: &[Task], now: NaiveDateTime) -> Self {
        tasks.iter().fold(CalendarStats::default(), |mut stats, task| {
            if task.is_done() {
                stats.completed += 1;
            } else {
                stats.pending += 1;
                if task.due < now {
                    stats.overdue += 1;
                }
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Category, NewTask, Status};
    use crate::ops::task_ops::TaskStore;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn may() -> YearMonth {
        YearMonth::new(2025, 5).unwrap()
    }

    #[test]
    fn year_month_validation_and_navigation() {
        assert!(YearMonth::new(2025, 0).is_none());
        assert!(YearMonth::new(2025, 13).is_none());
        let dec = YearMonth::new(2024, 12).unwrap();
        assert_eq!(dec.next(), YearMonth::new(2025, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);
        assert_eq!(may().name(), "May");
    }

    #[test]
    fn days_in_month() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2025, 4).unwrap().days_in_month(), 30);
        assert_eq!(YearMonth::new(2025, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn placeholders_align_first_day_to_weekday() {
        // 1 May 2025 is a Thursday
        assert_eq!(may().first_weekday(), 4);
        let grid = month_grid(&[], may(), date(2025, 5, 14));
        let placeholders = grid
            .cells
            .iter()
            .take_while(|c| matches!(c, CalendarCell::Placeholder))
            .count();
        assert_eq!(placeholders, 4);
        assert_eq!(grid.cells.len(), 4 + 31);
        assert_eq!(grid.days().count(), 31);
        assert_eq!(grid.weeks().count(), 5);
    }

    #[test]
    fn task_lands_only_on_its_day_regardless_of_time() {
        let mut store = TaskStore::new();
        for (h, m) in [(0, 0), (23, 59)] {
            store
                .add(NewTask::new(
                    format!("at {h}:{m}"),
                    Category::School,
                    date(2025, 5, 15).and_hms_opt(h, m, 0).unwrap(),
                ))
                .unwrap();
        }
        let grid = month_grid(store.all(), may(), date(2025, 5, 1));
        assert_eq!(grid.day(15).unwrap().tasks.len(), 2);
        assert!(grid.day(14).unwrap().tasks.is_empty());
        assert!(grid.day(16).unwrap().tasks.is_empty());
        let total: usize = grid.days().map(|b| b.tasks.len()).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn other_months_and_done_tasks_are_excluded() {
        let mut store = TaskStore::new();
        let noon = |d: NaiveDate| d.and_hms_opt(12, 0, 0).unwrap();
        store
            .add(NewTask::new("June", Category::Rugby, noon(date(2025, 6, 15))))
            .unwrap();
        store
            .add(NewTask::new("Last year", Category::Rugby, noon(date(2024, 5, 15))))
            .unwrap();
        let done = store
            .add(NewTask::new("Done", Category::Rugby, noon(date(2025, 5, 15))))
            .unwrap()
            .id;
        store.set_status(done, Status::Done);

        let grid = month_grid(store.all(), may(), date(2025, 5, 1));
        assert!(grid.days().all(|b| b.tasks.is_empty()));
    }

    #[test]
    fn today_past_and_overdue_flags() {
        let mut store = TaskStore::new();
        store
            .add(NewTask::new(
                "Late",
                Category::Music,
                date(2025, 5, 10).and_hms_opt(18, 0, 0).unwrap(),
            ))
            .unwrap();
        let grid = month_grid(store.all(), may(), date(2025, 5, 14));

        let today = grid.day(14).unwrap();
        assert!(today.is_today);
        assert!(!today.is_past);

        let tenth = grid.day(10).unwrap();
        assert!(tenth.is_past);
        assert!(tenth.overdue_indicator);

        let ninth = grid.day(9).unwrap();
        assert!(ninth.is_past);
        assert!(!ninth.overdue_indicator);

        let later = grid.day(20).unwrap();
        assert!(!later.is_past && !later.is_today);
    }

    #[test]
    fn stats_count_pending_completed_and_overdue() {
        let now = date(2025, 5, 14).and_hms_opt(15, 0, 0).unwrap();
        let mut store = TaskStore::new();
        let at = |d: u32, h: u32| date(2025, 5, d).and_hms_opt(h, 0, 0).unwrap();
        // Earlier today is already overdue; later today is not
        store.add(NewTask::new("This morning", Category::School, at(14, 9))).unwrap();
        store.add(NewTask::new("Tonight", Category::School, at(14, 20))).unwrap();
        store.add(NewTask::new("Last week", Category::Rugby, at(7, 12))).unwrap();
        let done = store
            .add(NewTask::new("Finished late", Category::Music, at(10, 12)))
            .unwrap()
            .id;
        store.set_status(done, Status::Done);

        let stats = CalendarStats::from_tasks(store.all(), now);
        assert_eq!(
            stats,
            CalendarStats {
                pending: 3,
                completed: 1,
                overdue: 2,
            }
        );
        assert_eq!(CalendarStats::from_tasks(&[], now), CalendarStats::default());
    }
}
