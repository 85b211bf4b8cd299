use super::models::DUE_DATE_FORMAT;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DueDateError {
    #[error("Invalid date format '{0}', expected yyyy-MM-dd")]
    InvalidFormat(String),
}

/// Blank input means the task has no due date.
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>, DueDateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
        .map(Some)
        .map_err(|_| DueDateError::InvalidFormat(trimmed.to_string()))
}
