use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::model::task::{Category, NewTask, push_tag};

use super::text_input::TextInput;

/// Error type for due-date input
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DueDateError {
    #[error("pick a due date")]
    Empty,
    #[error("unrecognised date \"{0}\" (try 2025-05-14, today, tomorrow or +3)")]
    Unrecognised(String),
}

/// Parse the due-date field. Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM`,
/// `today`, `tomorrow` and `+N` (days from today). Date-only input means
/// midnight.
pub fn parse_due_date(input: &str, today: NaiveDate) -> Result<NaiveDateTime, DueDateError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DueDateError::Empty);
    }
    let unrecognised = || DueDateError::Unrecognised(s.to_string());

    let date = match s.to_ascii_lowercase().as_str() {
        "today" => Some(today),
        "tomorrow" => today.succ_opt(),
        lower => {
            if let Some(n) = lower.strip_prefix('+') {
                let days: i64 = n.trim().parse().map_err(|_| unrecognised())?;
                today.checked_add_signed(Duration::try_days(days).ok_or_else(unrecognised)?)
            } else if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
                return Ok(dt);
            } else {
                NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
            }
        }
    };

    date.map(|d| d.and_time(NaiveTime::MIN)).ok_or_else(unrecognised)
}

/// Fields of the add-task form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Category,
    Due,
    Description,
    Tags,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Title,
        FormField::Category,
        FormField::Due,
        FormField::Description,
        FormField::Tags,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Task Title",
            FormField::Category => "Category",
            FormField::Due => "Due Date",
            FormField::Description => "Notes (optional)",
            FormField::Tags => "Tags (optional)",
        }
    }

    pub fn next(self) -> FormField {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> FormField {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// State of the add-task popup
#[derive(Debug, Clone)]
pub struct AddTaskForm {
    pub field: FormField,
    pub title: TextInput,
    pub category: Category,
    pub due: TextInput,
    pub description: TextInput,
    /// Tag being typed; Enter moves it into `tags`
    pub tag_input: TextInput,
    pub tags: Vec<String>,
    /// Why the last submit was refused
    pub error: Option<String>,
}

impl AddTaskForm {
    /// Fresh form: default category, due today
    pub fn new(category: Category, today: NaiveDate) -> Self {
        AddTaskForm {
            field: FormField::Title,
            title: TextInput::default(),
            category,
            due: TextInput::new(&today.format("%Y-%m-%d").to_string()),
            description: TextInput::default(),
            tag_input: TextInput::default(),
            tags: Vec::new(),
            error: None,
        }
    }

    /// The text input for the focused field (`None` for the category picker)
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::Category => None,
            FormField::Due => Some(&mut self.due),
            FormField::Description => Some(&mut self.description),
            FormField::Tags => Some(&mut self.tag_input),
        }
    }

    /// Move the typed tag into the tag list. Empty or repeated tags are
    /// ignored (the input is still cleared for repeats).
    pub fn commit_tag(&mut self) -> bool {
        if self.tag_input.is_blank() {
            return false;
        }
        let added = push_tag(&mut self.tags, self.tag_input.value());
        self.tag_input.clear();
        added
    }

    pub fn remove_last_tag(&mut self) -> Option<String> {
        self.tags.pop()
    }

    /// Whether submit is currently allowed
    pub fn can_submit(&self, today: NaiveDate) -> bool {
        !self.title.is_blank() && parse_due_date(self.due.value(), today).is_ok()
    }

    /// Build the add intent. A tag still sitting in the tag input is
    /// included. An empty due field yields `due: None` so the store rejects
    /// it; unparseable text is reported here.
    pub fn to_new_task(&self, today: NaiveDate) -> Result<NewTask, DueDateError> {
        let due = match parse_due_date(self.due.value(), today) {
            Ok(dt) => Some(dt),
            Err(DueDateError::Empty) => None,
            Err(e) => return Err(e),
        };
        let mut tags = self.tags.clone();
        push_tag(&mut tags, self.tag_input.value());
        let description = self.description.value().trim();
        Ok(NewTask {
            title: self.title.value().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            category: self.category,
            due,
            tags,
        })
    }
}
