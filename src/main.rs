#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use trenadenn::{cli, dispatch, input, utils};

#[macro_use]
extern crate trenadenn;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let packages = match &cli.packages {
        Some(path) => input::load_packages(path)?,
        None => input::DEMO_PACKAGES.clone(),
    };
    dlog!("mode=summarize packages={}", packages.len());

    for p in &packages {
        let training = dispatch::build(&p.code, &p.data)?;
        dlog!("code={} values={}", p.code, p.data.len());
        println!("{}", training.summary().message());
    }

    Ok(())
}
