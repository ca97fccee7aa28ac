use chrono::NaiveDate;

use crate::model::task::{Task, TaskId};

/// Open tasks whose due date (date part only) is `today`, in store order
pub fn due_today(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| !t.is_done() && t.due.date() == today)
        .collect()
}

/// What to tell the user about one due-today task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub task_id: TaskId,
    /// Desktop notification title
    pub title: String,
    /// Desktop notification body
    pub body: String,
    /// Identical tags let the notifier suppress repeats
    pub dedup_tag: String,
    pub toast_title: String,
    pub toast_body: String,
}

impl Reminder {
    pub fn for_task(task: &Task) -> Reminder {
        Reminder {
            task_id: task.id,
            title: "Baby, you got this! \u{1F495}".to_string(),
            body: format!(
                "\"{}\" is due today! Time to show this task who's boss! \u{1F451}",
                task.title
            ),
            dedup_tag: task.id.to_string(),
            toast_title: "Task Due Today! \u{1F525}".to_string(),
            toast_body: format!(
                "\"{}\" needs your attention, beautiful! You've got this!",
                task.title
            ),
        }
    }
}

/// Reminders for every open task due today
pub fn reminders_for(tasks: &[Task], today: NaiveDate) -> Vec<Reminder> {
    due_today(tasks, today)
        .into_iter()
        .map(Reminder::for_task)
        .collect()
}
