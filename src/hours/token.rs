use crate::{
    hours::{OpenHoursState, ParsePeriodError, Schedule, WeeklyPeriod},
    prelude::*,
};

pub const ALWAYS_OPENED: &str = "always_opened";
pub const TEMPORARILY_CLOSED: &str = "temporarily_closed";
pub const PERMANENTLY_CLOSED: &str = "permanently_closed";
pub const NOTE_PREFIX: &str = "note:";

/// Flatten the opening hours into the stored token array.
#[must_use]
pub fn serialize(state: &OpenHoursState) -> Vec<String> {
    match state {
        OpenHoursState::AlwaysOpen => vec![ALWAYS_OPENED.to_owned()],
        OpenHoursState::TemporarilyClosed => vec![TEMPORARILY_CLOSED.to_owned()],
        OpenHoursState::PermanentlyClosed => vec![PERMANENTLY_CLOSED.to_owned()],
        OpenHoursState::Scheduled(schedule) => schedule
            .periods
            .iter()
            .map(WeeklyPeriod::to_string)
            .chain(schedule.weekday_text.iter().flatten().cloned())
            .chain(schedule.note.iter().map(|note| format!("{NOTE_PREFIX}{note}")))
            .collect(),
    }
}

/// Rebuild the opening hours from the stored tokens.
///
/// Tokens which are neither periods nor notes become weekday text lines. The format cannot tell
/// a text line from anything else, so a line starting with `note:`, a line which parses as a
/// period, or a marker as the very first token does not come back as text.
#[must_use]
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> OpenHoursState {
    if let Some(state) = tokens.first().and_then(|token| leading_state(token.as_ref())) {
        return state;
    }
    let mut schedule = Schedule::default();
    let mut weekday_text = Vec::new();
    for token in tokens {
        match Token::classify(token.as_ref()) {
            Token::Period(period) => schedule.periods.push(period),
            Token::Note(note) => schedule.note = Some(note.to_owned()),
            Token::Text(text) | Token::Malformed(text, _) => weekday_text.push(text.to_owned()),
        }
    }
    if !weekday_text.is_empty() {
        schedule.weekday_text = Some(weekday_text);
    }
    OpenHoursState::Scheduled(schedule)
}

/// Non-schedule state, if the token is one of the markers.
///
/// Only meaningful for the first token.
pub(super) fn leading_state(token: &str) -> Option<OpenHoursState> {
    match token {
        ALWAYS_OPENED => Some(OpenHoursState::AlwaysOpen),
        TEMPORARILY_CLOSED => Some(OpenHoursState::TemporarilyClosed),
        PERMANENTLY_CLOSED => Some(OpenHoursState::PermanentlyClosed),
        _ => None,
    }
}

pub(super) enum Token<'a> {
    Period(WeeklyPeriod),
    Note(&'a str),

    /// No `-` at all, so not even an attempt of a period.
    Text(&'a str),

    /// Looked like a period but did not parse.
    Malformed(&'a str, ParsePeriodError),
}

impl<'a> Token<'a> {
    pub fn classify(token: &'a str) -> Self {
        if let Some(note) = token.strip_prefix(NOTE_PREFIX) {
            return Self::Note(note);
        }
        match token.parse() {
            Ok(period) => Self::Period(period),
            Err(ParsePeriodError::MissingSeparator) => Self::Text(token),
            Err(error) => Self::Malformed(token, error),
        }
    }

    /// Periods only, logging the malformed ones.
    pub fn periods<S: AsRef<str>>(tokens: &'a [S]) -> impl Iterator<Item = WeeklyPeriod> {
        tokens.iter().filter_map(|token| match Self::classify(token.as_ref()) {
            Token::Period(period) => Some(period),
            Token::Malformed(token, error) => {
                debug!(token, "skipping a malformed period: {error:#}");
                None
            }
            Token::Note(_) | Token::Text(_) => None,
        })
    }
}
