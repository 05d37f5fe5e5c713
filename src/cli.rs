use std::path::PathBuf;

use clap::Parser;

use crate::constants::AUTOPLAY_PERIOD;

/// Interactive walkthrough of the RESTITUTION reconstruction pipeline
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding images/figures/ and paper.pdf
    #[arg(value_name = "ASSETS", default_value = ".")]
    pub assets: PathBuf,

    /// Start auto-play on launch
    #[arg(short = 'a', long = "autoplay")]
    pub autoplay: bool,

    /// Seconds per step while auto-playing
    #[arg(short = 'p', long = "period", value_name = "SECS", default_value_t = AUTOPLAY_PERIOD)]
    pub period: f32,

    /// Step to open on, clamped to the available steps
    #[arg(short = 's', long = "step", value_name = "N", default_value_t = 0)]
    pub step: usize,

    /// Start in fullscreen mode
    #[arg(short = 'F', long = "fullscreen")]
    pub fullscreen: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
