use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use itertools::Itertools;

use crate::hours::{ParsePeriodError, Weekday};

/// Point within a week, as stored in a period token: `weekday:hour:minute`.
///
/// Components are kept as they were read: nothing checks them against their nominal ranges.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct WeekTime {
    /// 1 = Sunday … 7 = Saturday.
    pub weekday: u32,

    pub hour: u32,

    pub minute: u32,
}

impl WeekTime {
    pub const MINUTES_PER_DAY: i64 = 24 * 60;
    pub const MINUTES_PER_WEEK: i64 = 7 * Self::MINUTES_PER_DAY;

    #[must_use]
    pub const fn new(weekday: u32, hour: u32, minute: u32) -> Self {
        Self { weekday, hour, minute }
    }

    /// Wall-clock position of the timestamp within its week, in the timestamp's own time zone.
    #[must_use]
    pub fn at<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Self {
        Self {
            weekday: timestamp.weekday().number_from_sunday(),
            hour: timestamp.hour(),
            minute: timestamp.minute(),
        }
    }

    #[must_use]
    pub fn minutes_since_week_start(self) -> i64 {
        (i64::from(self.weekday) - 1) * Self::MINUTES_PER_DAY
            + i64::from(self.hour) * 60
            + i64::from(self.minute)
    }

    #[must_use]
    pub const fn weekday(self) -> Option<Weekday> {
        Weekday::from_number(self.weekday)
    }
}

impl Display for WeekTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.weekday, self.hour, self.minute)
    }
}

impl FromStr for WeekTime {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (weekday, hour, minute) = s
            .split(':')
            .collect_tuple()
            .ok_or_else(|| ParsePeriodError::MalformedWeekTime(s.to_owned()))?;
        Ok(Self { weekday: weekday.parse()?, hour: hour.parse()?, minute: minute.parse()? })
    }
}
