use clap::Parser;
use std::path::PathBuf;

use crate::defaults::Defaults;

/// WhatIf: a four-screen terminal demo that "generates" a video of the life
/// you might have lived.
#[derive(Parser, Debug)]
#[command(version, about = "WhatIf terminal demo")]
pub struct Cli {
    /// Frames per second (clamped to 1..=120)
    #[arg(long, default_value_t = Defaults::FPS)]
    pub fps: u16,

    /// Number of background stars on the intro and progress screens (at most 1000)
    #[arg(long, default_value_t = Defaults::STARS)]
    pub stars: usize,

    /// Seed for the decorative star field (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file. Without it logs are discarded, since the
    /// terminal belongs to the UI.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = Defaults::LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    pub fn frame_rate(&self) -> u16 {
        self.fps.clamp(1, 120)
    }

    pub fn star_count(&self) -> usize {
        self.stars.min(Defaults::MAX_STARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let cli = Cli::try_parse_from(["whatif"]).unwrap();
        assert_eq!(cli.fps, 30);
        assert_eq!(cli.stars, 50);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_file, None);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn fps_is_clamped() {
        let cli = Cli::try_parse_from(["whatif", "--fps", "0"]).unwrap();
        assert_eq!(cli.frame_rate(), 1);
        let cli = Cli::try_parse_from(["whatif", "--fps", "500"]).unwrap();
        assert_eq!(cli.frame_rate(), 120);
    }

    #[test]
    fn stars_are_capped() {
        let cli = Cli::try_parse_from(["whatif", "--stars", "100000000"]).unwrap();
        assert_eq!(cli.star_count(), 1000);
        let cli = Cli::try_parse_from(["whatif", "--stars", "0"]).unwrap();
        assert_eq!(cli.star_count(), 0);
    }

    #[test]
    fn options_parse() {
        let cli = Cli::try_parse_from([
            "whatif", "--stars", "0", "--seed", "7", "--log-file", "w.log", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(cli.stars, 0);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.log_file, Some(PathBuf::from("w.log")));
        assert_eq!(cli.log_level, "debug");
    }
}
