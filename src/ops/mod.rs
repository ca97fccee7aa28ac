pub mod calendar;
pub mod cheer;
pub mod grouping;
pub mod progress;
pub mod reminders;
pub mod task_ops;
pub mod urgency;
