//! Formatting for the terminal view of the zone list: 12-hour times, per-zone
//! date labels, the slider track and the picker grids the widget exposes.

use chrono::NaiveDate;

use crate::catalog;
use crate::engine::{ZoneRow, convert};
use crate::types::{MINUTES_PER_DAY, SLIDER_STEP};

/// Number of marks across the slider track.
pub const SLIDER_MARKS: u32 = 25;

/// Three-hourly tick labels under the track.
pub const TICK_LABELS: [&str; 8] = ["12AM", "3AM", "6AM", "9AM", "12PM", "3PM", "6PM", "9PM"];

/// Evenly spaced mark positions across the day (inclusive of both ends).
pub fn slider_marks() -> Vec<u32> {
    let spacing = MINUTES_PER_DAY / (SLIDER_MARKS - 1);
    (0..SLIDER_MARKS).map(|i| i * spacing).collect()
}

/// One dropdown entry on the 15-minute grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOption {
    pub minutes: u32,
    pub label: String,
}

/// The 96 dropdown options the time picker offers.
pub fn time_options() -> Vec<TimeOption> {
    (0..MINUTES_PER_DAY / SLIDER_STEP)
        .map(|i| {
            let minutes = i * SLIDER_STEP;
            TimeOption {
                minutes,
                label: format_12h(minutes),
            }
        })
        .collect()
}

/// `h:mm AM` rendering of minutes-of-day.
pub fn format_12h(minutes: u32) -> String {
    let hour24 = minutes / 60;
    let minute = minutes % 60;
    let (hour, half) = match hour24 {
        0 => (12, "AM"),
        1..=11 => (hour24, "AM"),
        12 => (12, "PM"),
        _ => (hour24 - 12, "PM"),
    };
    format!("{hour}:{minute:02} {half}")
}

/// `Mon 1, January` date label, as the widget shows per-zone dates.
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%a %-d, %B").to_string()
}

/// One rendered zone row: abbreviation, key, 12-hour time, offset and the
/// zone's own calendar date.
pub fn render_row(row: &ZoneRow) -> String {
    let (abbr, offset) = match convert::compose_naive(row.time.date, row.time.minutes)
        .and_then(|naive| convert::local_to_instant(row.tz, naive))
    {
        Ok(instant) => (
            catalog::zone_abbr(row.tz, instant),
            catalog::offset_label(row.tz, instant),
        ),
        Err(_) => ("?".to_string(), "GMT ?".to_string()),
    };
    format!(
        "{abbr:<6} {:<28} {:>9}  {offset}  {}",
        row.key,
        format_12h(row.time.minutes),
        format_date_label(row.time.date)
    )
}

/// ASCII slider track for a row: a cell per 15-minute step, hourly marks,
/// thumb at the current time.
pub fn render_slider(minutes: u32) -> String {
    let cells = (MINUTES_PER_DAY / SLIDER_STEP) as usize;
    let mut track = vec!['-'; cells + 1];
    for mark in slider_marks() {
        track[(mark / SLIDER_STEP) as usize] = '+';
    }
    track[(minutes / SLIDER_STEP) as usize] = '|';
    track.into_iter().collect()
}

/// Tick labels aligned under the track, one per three hours.
pub fn tick_label_line() -> String {
    let line: String = TICK_LABELS.iter().map(|l| format!("{l:<12}")).collect();
    line.trim_end().to_string()
}
