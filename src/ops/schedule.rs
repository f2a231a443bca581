use chrono::{Local, NaiveDate};
use indexmap::IndexMap;

use crate::model::store::Store;
use crate::model::task::{DateKey, Task};

/// One date bucket in the schedule view
#[derive(Debug, Clone)]
pub struct DateGroup {
    pub key: DateKey,
    /// Long-form heading, e.g. `Monday, January 15, 2024` or `No Date`
    pub heading: String,
    /// Whether this bucket is the current local date
    pub is_today: bool,
    /// Tasks in this bucket, in creation order
    pub tasks: Vec<Task>,
}

/// Group every task in the store by its date key.
///
/// Buckets come back in ascending calendar order with the `No Date` bucket
/// last; within a bucket tasks keep creation order. The today flag is
/// computed against the current local date at call time.
pub fn group_by_date(store: &Store) -> Vec<DateGroup> {
    group_by_date_on(store, Local::now().date_naive())
}

/// Same as [`group_by_date`] with an explicit current date, so the today
/// flag does not depend on the wall clock.
pub fn group_by_date_on(store: &Store, today: NaiveDate) -> Vec<DateGroup> {
    let mut buckets: IndexMap<DateKey, Vec<Task>> = IndexMap::new();
    for task in &store.tasks {
        buckets.entry(task.date_key()).or_default().push(task.clone());
    }
    // DateKey order: ascending dates, sentinel last
    buckets.sort_keys();

    buckets
        .into_iter()
        .map(|(key, tasks)| DateGroup {
            heading: key.heading(),
            is_today: key == DateKey::Scheduled(today),
            key,
            tasks,
        })
        .collect()
}
