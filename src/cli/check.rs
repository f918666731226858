use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use clap::Parser;
use loc_hours::prelude::*;

use crate::cli::TokensArgs;

#[derive(Parser)]
pub struct CheckArgs {
    #[clap(flatten)]
    pub(super) tokens: TokensArgs,

    /// Moment to check, for example `2025-11-17T12:00:00+01:00`. Defaults to now.
    #[clap(long)]
    at: Option<DateTime<FixedOffset>>,

    /// Time zone of the place, for example `Europe/Amsterdam`.
    #[clap(long = "time-zone", env = "LOC_TIME_ZONE", default_value = "UTC")]
    time_zone: Tz,
}

impl CheckArgs {
    #[instrument(skip_all, fields(time_zone = %self.time_zone))]
    pub fn run(self) -> Result {
        let open_hours = self.tokens.read_open_hours()?;
        let now = self
            .at
            .map_or_else(Utc::now, |at| at.with_timezone(&Utc))
            .with_timezone(&self.time_zone);
        let status = open_hours.status_at(&now);
        info!(%now, %status, n_tokens = open_hours.len(), "evaluated");
        println!("{status}");
        Ok(())
    }
}
