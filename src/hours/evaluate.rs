use chrono::{DateTime, TimeZone};
use comfy_table::Color;

use crate::hours::{
    OpenHoursState,
    WeekTime,
    token::{Token, leading_state},
};

/// Outcome of evaluating the opening hours at some instant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum OpenStatus {
    #[display("Always open")]
    AlwaysOpen,

    Open,

    Closed,

    #[display("Temporarily closed")]
    TemporarilyClosed,

    #[display("Permanently closed")]
    PermanentlyClosed,
}

impl OpenStatus {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::AlwaysOpen | Self::Open)
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::AlwaysOpen | Self::Open => Color::Green,
            Self::Closed => Color::DarkYellow,
            Self::TemporarilyClosed => Color::Magenta,
            Self::PermanentlyClosed => Color::Red,
        }
    }
}

/// Evaluate the stored tokens at the given instant.
///
/// The instant is taken in its own time zone. Unparsable tokens are skipped,
/// and anything that cannot be read defaults to closed.
pub fn status<S: AsRef<str>, Tz: TimeZone>(tokens: &[S], now: &DateTime<Tz>) -> OpenStatus {
    let Some(first) = tokens.first() else {
        return OpenStatus::Closed;
    };
    match leading_state(first.as_ref()) {
        Some(OpenHoursState::AlwaysOpen) => return OpenStatus::AlwaysOpen,
        Some(OpenHoursState::TemporarilyClosed) => return OpenStatus::TemporarilyClosed,
        Some(OpenHoursState::PermanentlyClosed) => return OpenStatus::PermanentlyClosed,
        Some(OpenHoursState::Scheduled(_)) | None => {}
    }
    let now = WeekTime::at(now);
    if Token::periods(tokens).any(|period| period.contains(now)) {
        OpenStatus::Open
    } else {
        OpenStatus::Closed
    }
}

/// Check whether the place is open at the given instant.
pub fn is_open_now<S: AsRef<str>, Tz: TimeZone>(tokens: &[S], now: &DateTime<Tz>) -> bool {
    status(tokens, now).is_open()
}

impl OpenHoursState {
    /// Same as [`status`], but without going through the tokens.
    pub fn status_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> OpenStatus {
        match self {
            Self::AlwaysOpen => OpenStatus::AlwaysOpen,
            Self::TemporarilyClosed => OpenStatus::TemporarilyClosed,
            Self::PermanentlyClosed => OpenStatus::PermanentlyClosed,
            Self::Scheduled(schedule) if schedule.is_open_at(WeekTime::at(now)) => {
                OpenStatus::Open
            }
            Self::Scheduled(_) => OpenStatus::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use chrono_tz::{Europe::Amsterdam, Tz};

    use super::*;
    use crate::hours::{parse_tokens, serialize};

    /// 2025-11-16 is a Sunday.
    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Tz> {
        Amsterdam.with_ymd_and_hms(2025, 11, day, hour, minute, 0).unwrap()
    }

    const SUNDAY: u32 = 16;
    const MONDAY: u32 = 17;
    const FRIDAY: u32 = 21;
    const SATURDAY: u32 = 22;

    #[test]
    fn test_always_open_dominates() {
        for day in SUNDAY..=SATURDAY {
            assert!(is_open_now(&["always_opened", "note:ignored"], &at(day, 4, 0)));
        }
        assert_eq!(
            status(&["always_opened", "2:9:0-2:17:0"], &at(SUNDAY, 0, 0)),
            OpenStatus::AlwaysOpen,
        );
    }

    #[test]
    fn test_terminal_closure() {
        for day in SUNDAY..=SATURDAY {
            assert!(!is_open_now(&["permanently_closed"], &at(day, 12, 0)));
            assert!(!is_open_now(&["temporarily_closed", "2:0:0-2:0:0"], &at(day, 12, 0)));
        }
        let now = at(MONDAY, 12, 0);
        assert_eq!(status(&["permanently_closed"], &now), OpenStatus::PermanentlyClosed);
        assert_eq!(status(&["temporarily_closed"], &now), OpenStatus::TemporarilyClosed);
    }

    #[test]
    fn test_same_day_window() {
        let tokens = ["2:9:0-2:17:0"];
        assert!(is_open_now(&tokens, &at(MONDAY, 12, 0)));
        assert!(!is_open_now(&tokens, &at(MONDAY, 18, 0)));
        assert!(!is_open_now(&tokens, &at(SUNDAY, 12, 0)));
    }

    #[test]
    fn test_overnight_window() {
        let tokens = ["6:22:0-7:2:0"];
        assert!(is_open_now(&tokens, &at(FRIDAY, 23, 30)));
        assert!(is_open_now(&tokens, &at(SATURDAY, 1, 0)));
        assert!(!is_open_now(&tokens, &at(SATURDAY, 3, 0)));
    }

    #[test]
    fn test_week_wrapping_window() {
        let tokens = ["7:22:0-1:2:0"];
        assert!(is_open_now(&tokens, &at(SATURDAY, 23, 0)));
        assert!(is_open_now(&tokens, &at(SUNDAY, 1, 0)));
        assert!(!is_open_now(&tokens, &at(SUNDAY, 3, 0)));
    }

    #[test]
    fn test_out_of_range_weekday_is_closed() {
        let tokens = ["8:0:0-8:0:30"];
        assert!(!is_open_now(&tokens, &at(SUNDAY, 0, 10)));
        assert_eq!(status(&tokens, &at(SUNDAY, 0, 10)), OpenStatus::Closed);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let tokens = ["2:9:0-2:17:0"];
        assert!(is_open_now(&tokens, &at(MONDAY, 9, 0)));
        assert!(is_open_now(&tokens, &at(MONDAY, 17, 0)));
        assert!(!is_open_now(&tokens, &at(MONDAY, 8, 59)));
        assert!(!is_open_now(&tokens, &at(MONDAY, 17, 1)));
    }

    #[test]
    fn test_malformed_tokens_are_skipped() {
        let clean = ["2:9:0-2:17:0"];
        let noisy = ["not-a-period", "2:9:0-2:17:0"];
        for (day, hour) in [(MONDAY, 12), (MONDAY, 18), (SUNDAY, 12), (MONDAY, 9)] {
            let now = at(day, hour, 0);
            assert_eq!(is_open_now(&noisy, &now), is_open_now(&clean, &now));
        }
    }

    #[test]
    fn test_text_and_notes_are_not_periods() {
        let tokens = ["Monday: 9:00 AM – 5:00 PM", "note:1:0:0-7:23:59", "2:9:0-2:17:0"];
        assert!(!is_open_now(&tokens, &at(SUNDAY, 12, 0)));
        assert!(is_open_now(&tokens, &at(MONDAY, 12, 0)));
    }

    #[test]
    fn test_empty_is_closed() {
        assert!(!is_open_now::<&str, _>(&[], &at(MONDAY, 12, 0)));
        assert_eq!(status::<&str, _>(&[], &at(MONDAY, 12, 0)), OpenStatus::Closed);
    }

    #[test]
    fn test_unknown_leading_token_is_closed() {
        assert!(!is_open_now(&["sometimes_open"], &at(MONDAY, 12, 0)));
    }

    #[test]
    fn test_time_zone_is_respected() {
        // Monday 08:30 UTC is Monday 09:30 in Amsterdam.
        let now = Utc.with_ymd_and_hms(2025, 11, 17, 8, 30, 0).unwrap();
        let tokens = ["2:9:0-2:17:0"];
        assert!(!is_open_now(&tokens, &now));
        assert!(is_open_now(&tokens, &now.with_timezone(&Amsterdam)));
    }

    #[test]
    fn test_state_and_tokens_agree() {
        let tokens =
            ["2:9:0-2:17:0", "6:22:0-7:2:0", "7:22:0-1:2:0", "Friday: late", "note:hi"];
        let state = parse_tokens(&tokens);
        assert_eq!(serialize(&state), tokens);
        for day in SUNDAY..=SATURDAY {
            for hour in 0..24 {
                for minute in [0, 30, 59] {
                    let now = at(day, hour, minute);
                    assert_eq!(state.status_at(&now), status(&tokens, &now), "{now}");
                }
            }
        }
    }
}
