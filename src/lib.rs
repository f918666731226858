#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod document;
pub mod hours;
pub mod provider;
pub mod tables;

#[doc(hidden)]
pub mod prelude;

pub use self::hours::{
    OpenHoursState,
    OpenStatus,
    Schedule,
    WeekTime,
    WeeklyPeriod,
    Weekday,
    is_open_now,
    parse_tokens,
    serialize,
    status,
};
