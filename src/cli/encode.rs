use clap::Parser;
use loc_hours::{document::OpenHours, prelude::*, provider::PlaceDetails};

use crate::cli::InputArgs;

#[derive(Parser)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub(super) input: InputArgs,

    /// Free-text note to store along with a regular schedule.
    #[clap(long)]
    note: Option<String>,
}

impl EncodeArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let details = serde_json::from_str::<PlaceDetails>(&self.input.read()?)
            .context("failed to parse the place details")?;
        let state = details.into_state(self.note)?;
        let open_hours = OpenHours::from(&state);
        info!(n_tokens = open_hours.len(), "encoded");
        println!("{}", serde_json::to_string_pretty(&open_hours)?);
        Ok(())
    }
}
