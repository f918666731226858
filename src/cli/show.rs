use clap::Parser;
use loc_hours::{prelude::*, tables::build_schedule_table};

use crate::cli::TokensArgs;

#[derive(Parser)]
pub struct ShowArgs {
    #[clap(flatten)]
    pub(super) tokens: TokensArgs,
}

impl ShowArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let state = self.tokens.read_open_hours()?.to_state();
        println!("{}", build_schedule_table(&state));
        if let Some(schedule) = state.schedule() {
            for line in schedule.weekday_text.iter().flatten() {
                println!("{line}");
            }
            if let Some(note) = &schedule.note {
                println!("Note: {note}");
            }
        }
        Ok(())
    }
}
