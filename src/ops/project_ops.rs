use crate::model::store::Store;

/// Add a project name to the store. Blank names and names already present
/// (case-sensitive) are ignored.
/// Returns whether the project was added.
pub fn add_project(store: &mut Store, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || store.has_project(name) {
        return false;
    }
    store.projects.push(name.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::task_ops::add_task;

    #[test]
    fn new_project_is_appended() {
        let mut store = Store::new();
        assert!(add_project(&mut store, "Errands"));
        assert_eq!(store.project_names(), ["Personal", "Work", "Errands"]);
    }

    #[test]
    fn duplicate_name_is_a_no_op() {
        let mut store = Store::new();
        add_project(&mut store, "Errands");
        assert!(!add_project(&mut store, "Errands"));
        assert_eq!(store.project_names().len(), 3);
    }

    #[test]
    fn blank_name_is_a_no_op() {
        let mut store = Store::new();
        assert!(!add_project(&mut store, ""));
        assert!(!add_project(&mut store, "   "));
        assert_eq!(store.project_names().len(), 2);
    }

    #[test]
    fn names_differing_in_case_are_distinct() {
        let mut store = Store::new();
        assert!(add_project(&mut store, "work"));
        assert_eq!(store.project_names(), ["Personal", "Work", "work"]);
    }

    #[test]
    fn tasks_for_project_filters_by_name() {
        let mut store = Store::new();
        add_task(&mut store, "errand", None, "Personal").unwrap();
        add_task(&mut store, "report", None, "Work").unwrap();
        add_task(&mut store, "groceries", None, "Personal").unwrap();

        let personal: Vec<&str> = store
            .tasks_for_project("Personal")
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(personal, ["errand", "groceries"]);
        assert!(store.tasks_for_project("Errands").is_empty());
    }
}
