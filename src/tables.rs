use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::hours::{OpenHoursState, OpenStatus, WeekTime, Weekday};

#[must_use]
pub fn build_schedule_table(state: &OpenHoursState) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();

    let schedule = match state {
        OpenHoursState::Scheduled(schedule) => schedule,
        OpenHoursState::AlwaysOpen => return status_table(table, OpenStatus::AlwaysOpen),
        OpenHoursState::TemporarilyClosed => {
            return status_table(table, OpenStatus::TemporarilyClosed);
        }
        OpenHoursState::PermanentlyClosed => {
            return status_table(table, OpenStatus::PermanentlyClosed);
        }
    };

    table.set_header(vec!["Opens", "", "Closes", "", "Length"]);
    for period in &schedule.periods {
        let span = period.span();
        table.add_row(vec![
            weekday_cell(period.open),
            Cell::new(format_clock(period.open)),
            weekday_cell(period.close)
                .fg(if period.wraps_week() { Color::DarkYellow } else { Color::Reset }),
            Cell::new(format_clock(period.close)),
            Cell::new(format_length(span.end() - span.start())).set_alignment(CellAlignment::Right),
        ]);
    }
    let closed_days = !schedule.opening_weekdays();
    if !closed_days.is_empty() {
        table.add_row(vec![
            Cell::new(format!("Closed: {}", closed_days.iter().join(", ")))
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

fn status_table(mut table: Table, status: OpenStatus) -> Table {
    table.set_header(vec!["Status"]);
    table.add_row(vec![Cell::new(status).fg(status.color())]);
    table
}

fn weekday_cell(time: WeekTime) -> Cell {
    time.weekday().map_or_else(
        || Cell::new(format!("day {}", time.weekday)).fg(Color::Red),
        |weekday: Weekday| Cell::new(weekday),
    )
}

fn format_clock(time: WeekTime) -> String {
    format!("{:02}:{:02}", time.hour, time.minute)
}

fn format_length(minutes: i64) -> String {
    format!("{}h{:02}", minutes / 60, minutes % 60)
}
