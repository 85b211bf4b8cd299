use chrono::NaiveDate;
use std::fmt;

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque handle assigned by the store when a task is created. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub(crate) u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    description: String,
    completed: bool,
    due_date: Option<NaiveDate>,
}

impl Task {
    pub(crate) fn new(id: TaskId, description: String, due_date: Option<NaiveDate>) -> Self {
        Self {
            id,
            description,
            completed: false,
            due_date,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }

    /// Prefix match against the rendered form, which is also the display contract.
    pub fn matches(&self, match_text: &str) -> bool {
        self.to_string().starts_with(match_text)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}, Due: ", self.description, self.status_label())?;
        match self.due_date {
            Some(date) => write!(f, "{}", date.format(DUE_DATE_FORMAT)),
            None => write!(f, "No Due Date"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TaskFilter {
    /// Exact, case-sensitive match against the three filter literals.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "completed" => Some(Self::Completed),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    pub fn accepts(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.is_completed(),
            Self::Pending => !task.is_completed(),
        }
    }
}
