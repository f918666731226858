//! Opening-hours model and its flat-token storage format.
//!
//! A place's hours are stored as an array of strings:
//!
//! - `always_opened`, `temporarily_closed` or `permanently_closed` as a single leading marker;
//! - or a weekly schedule: period tokens `weekday:hour:minute-weekday:hour:minute`,
//!   followed by human-readable weekday lines and an optional `note:…` token.
//!
//! Weekdays are numbered from 1 (Sunday) to 7 (Saturday).

mod evaluate;
mod period;
mod state;
mod token;
mod week_time;
mod weekday;

pub use self::{
    evaluate::{OpenStatus, is_open_now, status},
    period::{ParsePeriodError, WeeklyPeriod},
    state::{OpenHoursState, Schedule},
    token::{
        ALWAYS_OPENED,
        NOTE_PREFIX,
        PERMANENTLY_CLOSED,
        TEMPORARILY_CLOSED,
        parse_tokens,
        serialize,
    },
    week_time::WeekTime,
    weekday::Weekday,
};
