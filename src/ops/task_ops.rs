use tracing::debug;

use crate::model::task::{NewTask, Status, Task, TaskId, normalize_tags};

/// Error type for task operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("a task needs a title")]
    EmptyTitle,
    #[error("a task needs a due date")]
    MissingDueDate,
}

/// The session's task collection. Owned by one consumer (the UI); nothing
/// here is shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// Next id number. Only ever grows, so ids are never reused.
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    // -----------------------------------------------------------------------
    // Create
    // -----------------------------------------------------------------------

    /// Validate and append a new task with status `todo`.
    /// The store is left untouched when validation fails.
    pub fn add(&mut self, new: NewTask) -> Result<&Task, TaskError> {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let due = new.due.ok_or(TaskError::MissingDueDate)?;

        let description = new
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        self.next_id += 1;
        let task = Task {
            id: TaskId(self.next_id),
            title: title.to_string(),
            description,
            category: new.category,
            due,
            status: Status::Todo,
            tags: normalize_tags(&new.tags),
        };
        debug!(id = %task.id, category = %task.category, "task added");

        let idx = self.tasks.len();
        self.tasks.push(task);
        Ok(&self.tasks[idx])
    }

    // -----------------------------------------------------------------------
    // Update / delete
    // -----------------------------------------------------------------------

    /// Replace the status of the task with `id`. Any status may follow any
    /// other. Returns the updated task, or `None` (and changes nothing) if
    /// the id is unknown.
    pub fn set_status(&mut self, id: TaskId, status: Status) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        if task.status != status {
            debug!(%id, from = ?task.status, to = ?status, "status changed");
            task.status = status;
        }
        Some(task)
    }

    /// Remove the task with `id`, returning it. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        debug!(%id, "task removed");
        Some(self.tasks.remove(idx))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// All tasks in insertion order
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
