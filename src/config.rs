use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::data::model::GenderCodes;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Parser, Debug, Default)]
#[command(name = "weight-scores")]
#[command(about = "Weight-change scores and scatter plots for two cohorts", long_about = None)]
pub struct Args {
    /// Experimental group data file (gender:t1:t2 per line)
    #[arg(short, long)]
    pub experimental: Option<PathBuf>,

    /// Control group data file (gender:t1:t2 per line)
    #[arg(short, long)]
    pub control: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Code used for male subjects in the data files
    #[arg(long)]
    pub male_code: Option<String>,

    /// Code used for female subjects in the data files
    #[arg(long)]
    pub female_code: Option<String>,

    /// Print averages only, do not open plot windows
    #[arg(long)]
    pub no_plot: bool,

    /// Print averages as JSON
    #[arg(long)]
    pub json: bool,

    /// Write per-record scores as CSV into this directory
    #[arg(long)]
    pub export_scores: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Config file
// ---------------------------------------------------------------------------

/// Optional JSON settings; every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub experimental: Option<PathBuf>,
    pub control: Option<PathBuf>,
    pub male_code: Option<String>,
    pub female_code: Option<String>,
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

// ---------------------------------------------------------------------------
// Resolved settings
// ---------------------------------------------------------------------------

pub const DEFAULT_EXPERIMENTAL: &str = "experimental.txt";
pub const DEFAULT_CONTROL: &str = "controle.txt";
pub const DEFAULT_WINDOW: [f32; 2] = [1200.0, 600.0];

/// Everything a run needs, after CLI > config file > defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub experimental: PathBuf,
    pub control: PathBuf,
    pub codes: GenderCodes,
    pub window_size: [f32; 2],
    pub plot: bool,
    pub json: bool,
    pub export_dir: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings, reading the config file named by `--config` if any.
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(args, file))
    }

    pub fn merge(args: Args, file: FileConfig) -> Self {
        let defaults = GenderCodes::default();
        Settings {
            experimental: args
                .experimental
                .or(file.experimental)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPERIMENTAL)),
            control: args
                .control
                .or(file.control)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTROL)),
            codes: GenderCodes {
                male: args.male_code.or(file.male_code).unwrap_or(defaults.male),
                female: args
                    .female_code
                    .or(file.female_code)
                    .unwrap_or(defaults.female),
            },
            window_size: [
                file.window_width.unwrap_or(DEFAULT_WINDOW[0]),
                file.window_height.unwrap_or(DEFAULT_WINDOW[1]),
            ],
            plot: !args.no_plot,
            json: args.json,
            export_dir: args.export_scores,
        }
    }
}
