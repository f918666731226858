mod check;
mod encode;
mod show;

use std::{
    io::{read_to_string, stdin},
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use loc_hours::{
    document::{OpenHours, PlaceDocument},
    prelude::*,
};
use serde::Deserialize;

use crate::cli::{check::CheckArgs, encode::EncodeArgs, show::ShowArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a place-details payload into the stored opening-hours tokens.
    #[clap(name = "encode")]
    Encode(EncodeArgs),

    /// Tell whether the place is open at the given moment.
    #[clap(name = "check")]
    Check(Box<CheckArgs>),

    /// Print the decoded opening hours.
    #[clap(name = "show")]
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct InputArgs {
    /// Place-details JSON file, standard input if omitted.
    #[clap(long, short)]
    input: Option<PathBuf>,
}

impl InputArgs {
    pub fn read(&self) -> Result<String> {
        read_input(self.input.as_deref())
    }
}

#[derive(Parser)]
pub struct TokensArgs {
    /// JSON file with a token array or a whole place document, standard input if omitted.
    #[clap(long, short)]
    tokens: Option<PathBuf>,
}

impl TokensArgs {
    /// Read the stored opening hours: either a bare token array or a whole place document.
    pub fn read_open_hours(&self) -> Result<OpenHours> {
        let input = read_input(self.tokens.as_deref())?;
        let stored = serde_json::from_str::<StoredOpenHours>(&input)
            .context("expected a token array or a place document")?;
        Ok(match stored {
            StoredOpenHours::Tokens(open_hours) => open_hours,
            StoredOpenHours::Document(document) => document.open_hours,
        })
    }
}

#[instrument(skip_all, fields(path = ?path))]
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display())),
        None => read_to_string(stdin()).context("failed to read the standard input"),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredOpenHours {
    Tokens(OpenHours),
    Document(PlaceDocument),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_takes_tokens_file() -> Result {
        let args = Args::try_parse_from([
            "loc-hours",
            "check",
            "--tokens",
            "hours.json",
            "--at",
            "2025-11-17T12:00:00Z",
            "--time-zone",
            "Europe/Amsterdam",
        ])?;
        let Command::Check(args) = args.command else {
            bail!("expected the `check` command");
        };
        assert_eq!(args.tokens.tokens.as_deref(), Some(Path::new("hours.json")));
        Ok(())
    }

    #[test]
    fn test_show_takes_tokens_file() -> Result {
        let args = Args::try_parse_from(["loc-hours", "show", "-t", "place.json"])?;
        let Command::Show(args) = args.command else {
            bail!("expected the `show` command");
        };
        assert_eq!(args.tokens.tokens.as_deref(), Some(Path::new("place.json")));
        Ok(())
    }

    #[test]
    fn test_encode_takes_input_file() -> Result {
        let args = Args::try_parse_from(["loc-hours", "encode", "--input", "details.json"])?;
        let Command::Encode(args) = args.command else {
            bail!("expected the `encode` command");
        };
        assert_eq!(args.input.input.as_deref(), Some(Path::new("details.json")));
        Ok(())
    }

    #[test]
    fn test_check_rejects_input_flag() {
        assert!(Args::try_parse_from(["loc-hours", "check", "--input", "hours.json"]).is_err());
    }
}
