use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Opaque task identifier, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub(crate) u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// Task progress state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Todo,
    #[serde(rename = "inprogress")]
    InProgress,
    Done,
}

impl Status {
    /// The forward step the UI offers: todo → in progress → done.
    /// The store accepts any transition; this is only the suggested one.
    pub fn next(self) -> Option<Status> {
        match self {
            Status::Todo => Some(Status::InProgress),
            Status::InProgress => Some(Status::Done),
            Status::Done => None,
        }
    }

    /// Human-readable status text
    pub fn label(self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::InProgress => "In Progress",
            Status::Done => "Completed",
        }
    }

    /// Label for the action that moves the task forward
    pub fn next_action(self) -> &'static str {
        match self {
            Status::Todo => "Start Task",
            Status::InProgress => "Mark Complete",
            Status::Done => "Completed",
        }
    }

    pub fn is_done(self) -> bool {
        self == Status::Done
    }
}

/// The fixed set of task categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    School,
    Rugby,
    Music,
    Personal,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::School,
        Category::Rugby,
        Category::Music,
        Category::Personal,
    ];

    /// Section heading used in the list view
    pub fn label(self) -> &'static str {
        match self {
            Category::School => "School",
            Category::Rugby => "Rugby",
            Category::Music => "Music Practice",
            Category::Personal => "Personal Goals",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Category::School => "\u{1F9E0}",
            Category::Rugby => "\u{1F4AA}",
            Category::Music => "\u{1F3B6}",
            Category::Personal => "\u{1F4BC}",
        }
    }

    /// Short lowercase key (`school`, `rugby`, ...)
    pub fn key(self) -> &'static str {
        match self {
            Category::School => "school",
            Category::Rugby => "rugby",
            Category::Music => "music",
            Category::Personal => "personal",
        }
    }

    /// Cycle through categories in declaration order (wraps)
    pub fn cycle(self, forward: bool) -> Category {
        let idx = Category::ALL.iter().position(|c| *c == self).unwrap_or(0);
        let len = Category::ALL.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        Category::ALL[next]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "school" => Ok(Category::School),
            "rugby" => Ok(Category::Rugby),
            "music" => Ok(Category::Music),
            "personal" => Ok(Category::Personal),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A tracked task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    /// Local wall-clock due moment
    pub due: NaiveDateTime,
    pub status: Status,
    /// Distinct, non-empty, in entry order
    pub tags: Vec<String>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }
}

/// The add-task intent: everything but the id and status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub due: Option<NaiveDateTime>,
    pub tags: Vec<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, category: Category, due: NaiveDateTime) -> Self {
        NewTask {
            title: title.into(),
            description: None,
            category,
            due: Some(due),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        push_tag(&mut self.tags, tag);
        self
    }
}

/// Append a tag unless it is empty or already present (after trimming).
/// Returns true if the tag was added.
pub fn push_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || tags.iter().any(|t| t == tag) {
        return false;
    }
    tags.push(tag.to_string());
    true
}

/// Trim every tag and drop empties and repeats, keeping first occurrences.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut result = Vec::with_capacity(tags.len());
    for tag in tags {
        push_tag(&mut result, tag);
    }
    result
}
