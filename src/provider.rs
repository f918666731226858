//! Place-details payload as returned by the places provider, and its conversion
//! into [`OpenHoursState`].

use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use crate::{
    hours::{OpenHoursState, Schedule, WeekTime, WeeklyPeriod},
    prelude::*,
};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("invalid time `{0}`, expected `HHMM`")]
    InvalidTime(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub business_status: BusinessStatus,

    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub enum BusinessStatus {
    #[default]
    #[serde(rename = "OPERATIONAL")]
    Operational,

    #[serde(rename = "CLOSED_TEMPORARILY")]
    ClosedTemporarily,

    #[serde(rename = "CLOSED_PERMANENTLY")]
    ClosedPermanently,

    /// Treated as operational.
    #[serde(other)]
    Unknown,
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct OpeningHours {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub periods: Vec<Period>,

    #[serde(default)]
    pub weekday_text: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct Period {
    #[serde(default)]
    pub open: Option<Point>,

    #[serde(default)]
    pub close: Option<Point>,
}

#[derive(Debug, Deserialize)]
pub struct Point {
    /// 0 = Sunday … 6 = Saturday.
    #[serde(default)]
    pub day: Option<u32>,

    /// `HHMM`.
    #[serde(default)]
    pub time: Option<String>,
}

impl Point {
    /// Shift the day to the token numbering. Missing components become zeroes.
    fn to_week_time(&self) -> Result<WeekTime, ProviderError> {
        let (hour, minute) = match &self.time {
            Some(time) => parse_time(time)?,
            None => (0, 0),
        };
        Ok(WeekTime::new(self.day.map_or(0, |day| day + 1), hour, minute))
    }

    fn is_week_start(&self) -> bool {
        self.day == Some(0) && self.time.as_deref() == Some("0000")
    }
}

impl PlaceDetails {
    /// Convert the payload into opening hours, attaching the note to a regular schedule.
    #[instrument(skip_all)]
    pub fn into_state(self, note: Option<String>) -> Result<OpenHoursState, ProviderError> {
        match self.business_status {
            BusinessStatus::ClosedTemporarily => return Ok(OpenHoursState::TemporarilyClosed),
            BusinessStatus::ClosedPermanently => return Ok(OpenHoursState::PermanentlyClosed),
            BusinessStatus::Operational | BusinessStatus::Unknown => {}
        }
        let opening_hours = self.opening_hours.unwrap_or_default();

        // The provider marks 24/7 places with a lone period opening on Sunday midnight:
        if let [Period { open: Some(open), close: None }] = opening_hours.periods.as_slice()
            && open.is_week_start()
        {
            return Ok(OpenHoursState::AlwaysOpen);
        }

        let periods = opening_hours
            .periods
            .iter()
            .filter_map(|period| {
                let Some(close) = &period.close else {
                    warn!(open = ?period.open, "skipping a period without the close time");
                    return None;
                };
                Some(to_weekly_period(period.open.as_ref(), close))
            })
            .collect::<Result<Vec<_>, _>>()?;
        info!(n_periods = periods.len(), "converted the opening hours");

        Ok(Schedule::builder()
            .periods(periods)
            .maybe_weekday_text(opening_hours.weekday_text)
            .maybe_note(note)
            .build()
            .into())
    }
}

fn to_weekly_period(open: Option<&Point>, close: &Point) -> Result<WeeklyPeriod, ProviderError> {
    let open = match open {
        Some(open) => open.to_week_time()?,
        None => WeekTime::default(),
    };
    Ok(WeeklyPeriod::new(open, close.to_week_time()?))
}

fn parse_time(time: &str) -> Result<(u32, u32), ProviderError> {
    if time.len() != 4 || !time.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ProviderError::InvalidTime(time.to_owned()));
    }
    let (hour, minute) = time.split_at(2);
    let parse =
        |part: &str| part.parse::<u32>().map_err(|_| ProviderError::InvalidTime(time.to_owned()));
    Ok((parse(hour)?, parse(minute)?))
}
