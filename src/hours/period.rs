use std::{
    fmt::{Display, Formatter},
    num::ParseIntError,
    ops::RangeInclusive,
    str::FromStr,
};

use itertools::Itertools;

use crate::hours::WeekTime;

/// Recurring open interval within a week.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct WeeklyPeriod {
    pub open: WeekTime,

    /// May lie numerically before [`WeeklyPeriod::open`], in which case the period runs
    /// over the end of the week.
    pub close: WeekTime,
}

impl WeeklyPeriod {
    #[must_use]
    pub const fn new(open: WeekTime, close: WeekTime) -> Self {
        Self { open, close }
    }

    /// Minutes since the week start, both ends inclusive.
    ///
    /// A close time which is not strictly after the open time is pushed a week further.
    #[must_use]
    pub fn span(self) -> RangeInclusive<i64> {
        let open = self.open.minutes_since_week_start();
        let mut close = self.close.minutes_since_week_start();
        if self.wraps_week() {
            close += WeekTime::MINUTES_PER_WEEK;
        }
        open..=close
    }

    /// Check whether the point of the week falls into the period, including both ends.
    #[must_use]
    pub fn contains(self, time: WeekTime) -> bool {
        let span = self.span();
        let minute = time.minutes_since_week_start();
        // Early Sunday hours of a period which started on Saturday live in the next week:
        span.contains(&minute)
            || (self.wraps_week() && span.contains(&(minute + WeekTime::MINUTES_PER_WEEK)))
    }

    /// Whether the close time is not after the open time, so the period runs over the week end.
    #[must_use]
    pub fn wraps_week(self) -> bool {
        self.close.minutes_since_week_start() <= self.open.minutes_since_week_start()
    }
}

impl Display for WeeklyPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.open, self.close)
    }
}

impl FromStr for WeeklyPeriod {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains('-') {
            return Err(ParsePeriodError::MissingSeparator);
        }
        let (open, close) = s
            .split('-')
            .collect_tuple()
            .ok_or_else(|| ParsePeriodError::MalformedPeriod(s.to_owned()))?;
        Ok(Self { open: open.parse()?, close: close.parse()? })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParsePeriodError {
    #[error("no `-` separator")]
    MissingSeparator,

    #[error("expected exactly one `-` separator in `{0}`")]
    MalformedPeriod(String),

    #[error("expected `weekday:hour:minute`, got `{0}`")]
    MalformedWeekTime(String),

    #[error("invalid number")]
    InvalidNumber(#[from] ParseIntError),
}
