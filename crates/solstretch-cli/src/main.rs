use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use solstretch_cli::EnhanceArgs;

#[derive(Parser)]
#[command(name = "solstretch")]
#[command(version, about = "Rock art photograph enhancer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enhance image(s) to reveal faint pigment
    Enhance {
        /// Input file or directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file or directory
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Preset file with saved parameters
        #[arg(short, long, value_name = "FILE")]
        preset: Option<PathBuf>,

        /// Background-blur standard deviation (0-50, default: 25)
        #[arg(long, value_name = "SIGMA")]
        blur_sigma: Option<f32>,

        /// Low stretch clip percentile (0-20, default: 1)
        #[arg(long, value_name = "PCT")]
        low_percentile: Option<f32>,

        /// High stretch clip percentile (80-100, default: 99)
        #[arg(long, value_name = "PCT")]
        high_percentile: Option<f32>,

        /// Local contrast clip limit (1.0-5.0, default: 2.0)
        #[arg(long, value_name = "LIMIT")]
        clip_limit: Option<f32>,

        /// Equalization tile grid: 4x4, 8x8, or 16x16 (default: 8x8)
        #[arg(long, value_name = "GRID")]
        tile_grid: Option<String>,

        /// Tone-correction gamma (0.5-2.0, default: 1.0)
        #[arg(long, value_name = "GAMMA")]
        gamma: Option<f32>,

        /// Additive brightness (-100 to 100, default: 0)
        #[arg(long, value_name = "VALUE")]
        brightness: Option<f32>,

        /// Contrast about mid-gray (0.1-3.0, default: 1.0)
        #[arg(long, value_name = "FACTOR")]
        contrast: Option<f32>,

        /// Red channel gain (0-2.0, default: 1.0)
        #[arg(long, value_name = "GAIN")]
        r_gain: Option<f32>,

        /// Green channel gain (0-2.0, default: 1.0)
        #[arg(long, value_name = "GAIN")]
        g_gain: Option<f32>,

        /// Blue channel gain (0-2.0, default: 1.0)
        #[arg(long, value_name = "GAIN")]
        b_gain: Option<f32>,

        /// Export format (jpeg or tiff)
        #[arg(long, value_name = "FORMAT", default_value = "jpeg")]
        export: String,

        /// Scan subdirectories when INPUT is a directory
        #[arg(short, long)]
        recursive: bool,

        /// Number of parallel threads for batch processing
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Suppress progress output
        #[arg(long)]
        silent: bool,

        /// Enable verbose output showing intermediate statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Manage parameter presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
}

#[derive(Subcommand)]
enum PresetAction {
    /// Write a preset file with the default parameters
    Init {
        /// Destination path for the preset YAML
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Print the resolved parameters of a preset file
    Show {
        /// Preset file to inspect
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Enhance {
            input,
            out,
            preset,
            blur_sigma,
            low_percentile,
            high_percentile,
            clip_limit,
            tile_grid,
            gamma,
            brightness,
            contrast,
            r_gain,
            g_gain,
            b_gain,
            export,
            recursive,
            threads,
            silent,
            verbose,
        } => {
            let args = EnhanceArgs {
                preset,
                blur_sigma,
                low_percentile,
                high_percentile,
                clip_limit,
                tile_grid,
                gamma,
                brightness,
                contrast,
                r_gain,
                g_gain,
                b_gain,
            };
            commands::cmd_enhance(input, out, args, export, recursive, threads, silent, verbose)
        }
        Commands::Preset { action } => match action {
            PresetAction::Init { path } => commands::cmd_preset_init(path),
            PresetAction::Show { path } => commands::cmd_preset_show(path),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
