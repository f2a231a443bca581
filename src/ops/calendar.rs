use chrono::{Datelike, Days, NaiveDate};

use crate::model::store::Store;
use crate::util::unicode::clip_with_ellipsis;

/// Sunday-first column headers for the month grid
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Widest a task label may render inside a day cell
const CELL_LABEL_WIDTH: usize = 15;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Error type for grid generation
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("month index out of range (expected 0-11): {0}")]
    MonthOutOfRange(u32),
    #[error("year out of range: {0}")]
    YearOutOfRange(i32),
}

/// A task as it appears inside a day cell
#[derive(Debug, Clone)]
pub struct CellTask {
    pub id: usize,
    /// Full title, for tooltip/detail use
    pub title: String,
    /// Title clipped for in-cell display
    pub label: String,
    pub completed: bool,
}

/// One square of the month grid
#[derive(Debug, Clone)]
pub enum Cell {
    /// Padding before day 1 or after the last day of the month
    Empty,
    Day(DayCell),
}

/// A concrete day and the tasks scheduled on it
#[derive(Debug, Clone)]
pub struct DayCell {
    /// Day of the month, 1-based
    pub day: u32,
    /// ISO date key, e.g. `2024-03-05`
    pub date_key: String,
    /// Tasks scheduled on this day, in creation order
    pub tasks: Vec<CellTask>,
}

/// A month laid out as rows of seven cells, Sunday first.
///
/// At most six rows; rows after the one containing the last day of the
/// month are not emitted.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    /// Zero-based month index (0 = January)
    pub month: u32,
    pub year: i32,
    pub rows: Vec<Vec<Cell>>,
}

impl MonthGrid {
    /// Caption for the grid, e.g. `March 2024`
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month).unwrap_or(""), self.year)
    }

    /// Day cells in row-major order, skipping padding
    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.rows.iter().flatten().filter_map(|cell| match cell {
            Cell::Day(day) => Some(day),
            Cell::Empty => None,
        })
    }
}

/// Full English month name for a zero-based month index
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month as usize).copied()
}

/// Lay out a month as calendar rows and attach each day's tasks.
///
/// `month` is zero-based (0 = January). Every date of the month appears in
/// exactly one cell; cells are row-major, Sunday first.
pub fn month_grid(store: &Store, month: u32, year: i32) -> Result<MonthGrid, CalendarError> {
    if month > 11 {
        return Err(CalendarError::MonthOutOfRange(month));
    }
    let first = NaiveDate::from_ymd_opt(year, month + 1, 1)
        .ok_or(CalendarError::YearOutOfRange(year))?;
    let days_in_month = days_in_month(first).ok_or(CalendarError::YearOutOfRange(year))?;
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut rows = Vec::new();
    let mut day = 1u32;
    for row in 0..6 {
        let mut cells = Vec::with_capacity(7);
        for col in 0..7 {
            if (row == 0 && col < leading) || day > days_in_month {
                cells.push(Cell::Empty);
            } else {
                let date = first + Days::new(u64::from(day - 1));
                cells.push(Cell::Day(day_cell(store, date, day)));
                day += 1;
            }
        }
        rows.push(cells);
        if day > days_in_month {
            break;
        }
    }

    Ok(MonthGrid { month, year, rows })
}

fn day_cell(store: &Store, date: NaiveDate, day: u32) -> DayCell {
    let tasks = store
        .tasks
        .iter()
        .filter(|t| t.date == Some(date))
        .map(|t| CellTask {
            id: t.id,
            title: t.title.clone(),
            label: clip_with_ellipsis(&t.title, CELL_LABEL_WIDTH),
            completed: t.completed,
        })
        .collect();

    DayCell {
        day,
        date_key: date.format("%Y-%m-%d").to_string(),
        tasks,
    }
}

/// Number of days in the month whose first day is `first`
fn days_in_month(first: NaiveDate) -> Option<u32> {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }?;
    Some(next.signed_duration_since(first).num_days() as u32)
}
