#![doc = include_str!("../README.md")]

mod cli;
mod tables;

use clap::{Parser, crate_version};
use srpenergy::prelude::*;

use crate::cli::{Args, Command};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Rate(args) => args.run(),
        Command::Validate(args) => args.validate(),
        Command::Usage(args) => args.run(),
        Command::Replay(args) => args.run(),
    }
}
