// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod cli;
mod clock;
mod commands;
mod runner;

#[cfg(test)]
mod tests;

use clap::Parser;
use cli::Args;
use clock::SystemClock;
use color_eyre::eyre::{Result, WrapErr};
use gawake_domain::GawakeConfig;
use gawake_persistence::Persistence;
use runner::DuctRunner;
use std::path::Path;
use tracing::{debug, error};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.log_level().to_string())),
        )
        .without_time()
        .init();

    if let Err(err) = run(&args) {
        error!("{err:#}");
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let mut persistence: Persistence = open_database(&args.database)?;
    let config: GawakeConfig = persistence.get_config()?;
    let clock: SystemClock = SystemClock::now(config.use_localtime)?;
    let mut runner: DuctRunner = DuctRunner::default();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&args.command, &mut persistence, &clock, &mut runner, &mut out)
}

fn open_database(path: &Path) -> Result<Persistence> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("could not create {}", parent.display()))?;
    }

    debug!(database = %path.display(), "Opening database");
    Persistence::new_with_file(path)
        .wrap_err_with(|| format!("could not open database {}", path.display()))
}
