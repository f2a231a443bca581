use chrono::NaiveDate;

use crate::model::store::Store;
use crate::model::task::Task;

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task title cannot be empty")]
    EmptyTitle,
    #[error("unknown project: {0}")]
    UnknownProject(String),
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}

/// Add a task to the store.
///
/// The title is trimmed and must be non-empty, and `project` must name an
/// existing project. `date` may be `None` or blank for an unscheduled task;
/// anything else must parse as `YYYY-MM-DD`.
/// Returns the assigned ID.
pub fn add_task(
    store: &mut Store,
    title: &str,
    date: Option<&str>,
    project: &str,
) -> Result<usize, TaskError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    if !store.has_project(project) {
        return Err(TaskError::UnknownProject(project.to_string()));
    }
    let date = parse_date(date)?;

    let id = store.tasks.len();
    store.tasks.push(Task {
        id,
        title: title.to_string(),
        date,
        project: project.to_string(),
        completed: false,
    });
    Ok(id)
}

/// Flip a task's completed flag. Unknown ids are ignored.
/// Returns whether a task was toggled.
pub fn toggle_task(store: &mut Store, id: usize) -> bool {
    match store.tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// A missing or blank date string means "no date"; anything else must parse.
fn parse_date(date: Option<&str>) -> Result<Option<NaiveDate>, TaskError> {
    let Some(text) = date else {
        return Ok(None);
    };
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| TaskError::InvalidDate(text.to_string()))
}
