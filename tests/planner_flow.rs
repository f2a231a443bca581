use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use slate::model::{DateKey, Store};
use slate::ops::calendar::{Cell, month_grid};
use slate::ops::project_ops::add_project;
use slate::ops::schedule::group_by_date_on;
use slate::ops::task_ops::{add_task, toggle_task};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Schedule view
// ============================================================================

#[test]
fn schedule_groups_dated_tasks_first_and_dateless_last() {
    let mut store = Store::new();
    add_task(&mut store, "A", Some("2024-03-01"), "Personal").unwrap();
    add_task(&mut store, "B", Some("2024-03-15"), "Work").unwrap();
    add_task(&mut store, "C", None, "Personal").unwrap();

    let groups = group_by_date_on(&store, date(2024, 3, 10));

    let keys: Vec<String> = groups.iter().map(|g| g.key.to_string()).collect();
    assert_eq!(keys, ["2024-03-01", "2024-03-15", "No Date"]);

    let last = groups.last().unwrap();
    assert_eq!(last.key, DateKey::Unscheduled);
    assert_eq!(last.tasks.len(), 1);
    assert_eq!(last.tasks[0].title, "C");
}

#[test]
fn schedule_headings_and_today_flag() {
    let mut store = Store::new();
    add_task(&mut store, "standup", Some("2024-01-15"), "Work").unwrap();
    add_task(&mut store, "retro", Some("2024-01-16"), "Work").unwrap();

    let groups = group_by_date_on(&store, date(2024, 1, 15));

    assert_eq!(groups[0].heading, "Monday, January 15, 2024");
    assert!(groups[0].is_today);
    assert!(!groups[1].is_today);
}

// ============================================================================
// Calendar view
// ============================================================================

#[test]
fn march_grid_places_day_31_under_its_iso_key() {
    let mut store = Store::new();
    add_task(&mut store, "month end", Some("2024-03-31"), "Work").unwrap();

    let grid = month_grid(&store, 2, 2024).unwrap();
    let cell = grid.day_cells().find(|d| d.day == 31).unwrap();

    assert_eq!(cell.date_key, "2024-03-31");
    assert_eq!(cell.tasks.len(), 1);
    assert_eq!(cell.tasks[0].title, "month end");
}

#[test]
fn grid_cells_are_row_major_and_cover_the_month_once() {
    let store = Store::new();
    let grid = month_grid(&store, 1, 2024).unwrap();

    let mut seen = Vec::new();
    for row in &grid.rows {
        assert_eq!(row.len(), 7);
        for cell in row {
            if let Cell::Day(day) = cell {
                seen.push(day.day);
            }
        }
    }
    let expected: Vec<u32> = (1..=29).collect();
    assert_eq!(seen, expected);
}

// ============================================================================
// Store lifecycle
// ============================================================================

#[test]
fn full_session_over_a_fresh_store() {
    let mut store = Store::new();
    assert_eq!(store.project_names(), ["Personal", "Work"]);

    assert!(add_project(&mut store, "Errands"));
    assert!(!add_project(&mut store, "Errands"));

    let a = add_task(&mut store, "buy stamps", Some("2024-05-02"), "Errands").unwrap();
    let b = add_task(&mut store, "file taxes", None, "Personal").unwrap();
    assert_eq!((a, b), (0, 1));

    toggle_task(&mut store, a);
    assert_eq!(store.incomplete().len(), 1);
    assert_eq!(store.completed().len(), 1);

    // Toggling back restores the original partition
    toggle_task(&mut store, a);
    assert_eq!(store.incomplete().len(), 2);
    assert!(store.completed().is_empty());

    let errands = store.tasks_for_project("Errands");
    assert_eq!(errands.len(), 1);
    assert_eq!(errands[0].title, "buy stamps");
}
