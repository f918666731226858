#![allow(clippy::doc_markdown)]

mod cli;

use clap::{Parser, crate_version};
use loc_hours::prelude::*;

use crate::cli::{Args, Command};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Encode(args) => args.run()?,
        Command::Check(args) => args.run()?,
        Command::Show(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
