use bon::Builder;
use enumset::EnumSet;

use crate::hours::{WeekTime, WeeklyPeriod, Weekday};

/// Opening hours of a place.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OpenHoursState {
    /// Open around the clock.
    AlwaysOpen,

    /// Closed until further notice.
    TemporarilyClosed,

    /// Closed for good.
    PermanentlyClosed,

    /// Regular weekly schedule.
    Scheduled(Schedule),
}

impl From<Schedule> for OpenHoursState {
    fn from(schedule: Schedule) -> Self {
        Self::Scheduled(schedule)
    }
}

impl OpenHoursState {
    #[must_use]
    pub const fn schedule(&self) -> Option<&Schedule> {
        match self {
            Self::Scheduled(schedule) => Some(schedule),
            Self::AlwaysOpen | Self::TemporarilyClosed | Self::PermanentlyClosed => None,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Builder)]
pub struct Schedule {
    #[builder(default)]
    pub periods: Vec<WeeklyPeriod>,

    /// Human-readable per-day summary, informational only.
    pub weekday_text: Option<Vec<String>>,

    #[builder(into)]
    pub note: Option<String>,
}

impl Schedule {
    #[must_use]
    pub fn is_open_at(&self, time: WeekTime) -> bool {
        self.periods.iter().any(|period| period.contains(time))
    }

    /// Weekdays on which at least one period opens.
    #[must_use]
    pub fn opening_weekdays(&self) -> EnumSet<Weekday> {
        self.periods.iter().filter_map(|period| period.open.weekday()).collect()
    }
}
