use serde::{Deserialize, Serialize};

use super::task::Task;

/// Projects every fresh store starts with
const DEFAULT_PROJECTS: [&str; 2] = ["Personal", "Work"];

/// The owned task and project collections.
///
/// Operations in [`crate::ops`] take the store by `&mut` and queries borrow
/// it; there is no hidden global state. Both collections keep creation
/// order, which is the display order everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    /// All tasks, in creation order
    pub tasks: Vec<Task>,
    /// Project names, in creation order
    pub projects: Vec<String>,
}

impl Store {
    /// An empty store seeded with the default projects
    pub fn new() -> Self {
        Store {
            tasks: Vec::new(),
            projects: DEFAULT_PROJECTS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Tasks not yet checked off, in creation order
    pub fn incomplete(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| !t.completed).collect()
    }

    /// Checked-off tasks, in creation order
    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.completed).collect()
    }

    /// Project names, in creation order
    pub fn project_names(&self) -> &[String] {
        &self.projects
    }

    /// Whether a project with this exact name exists (case-sensitive)
    pub fn has_project(&self, name: &str) -> bool {
        self.projects.iter().any(|p| p == name)
    }

    /// Tasks belonging to the named project, in creation order
    pub fn tasks_for_project(&self, name: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.project == name).collect()
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}
