use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod counter;
mod defaults;
mod flow;
mod logging;
mod screens;
mod simulation;
mod timer;
mod ui;

use crate::app::RunOpts;
use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_file.as_deref(), &cli.log_level)?;

    app::run(RunOpts { fps: cli.frame_rate(), stars: cli.star_count(), seed: cli.seed }).await
}
