//! Command-line argument definitions for the Stratum CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Layout parameters are taken as raw text and converted by
//! [`RawLayoutInput`], so a bad number is reported with the field it came
//! from.

use clap::Parser;

use stratum::input::RawLayoutInput;

/// Command-line arguments for the Stratum layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of vertical grids (labeled 1, 2, ...)
    #[arg(long, allow_hyphen_values = true)]
    pub vert_count: String,

    /// Spacing between vertical grids
    #[arg(long, allow_hyphen_values = true)]
    pub vert_distance: String,

    /// Length of each vertical grid
    #[arg(long, allow_hyphen_values = true)]
    pub vert_range: String,

    /// Number of horizontal grids (labeled A, B, ...)
    #[arg(long, allow_hyphen_values = true)]
    pub hor_count: String,

    /// Spacing between horizontal grids
    #[arg(long, allow_hyphen_values = true)]
    pub hor_distance: String,

    /// Length of each horizontal grid
    #[arg(long, allow_hyphen_values = true)]
    pub hor_range: String,

    /// Number of levels above the ground datum
    #[arg(long, allow_hyphen_values = true)]
    pub level_count: String,

    /// Elevation step between levels
    #[arg(long, allow_hyphen_values = true)]
    pub level_distance: String,

    /// Level range (accepted for compatibility; does not affect elevations)
    #[arg(long, allow_hyphen_values = true, default_value = "1")]
    pub level_range: String,

    /// Path to the output SVG plan preview
    #[arg(short, long, default_value = "layout.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Generate and log the layout without writing any output
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// Collects the nine layout parameters as raw text.
    pub fn raw_input(&self) -> RawLayoutInput {
        RawLayoutInput {
            vert_count: self.vert_count.clone(),
            vert_distance: self.vert_distance.clone(),
            vert_range: self.vert_range.clone(),
            hor_count: self.hor_count.clone(),
            hor_distance: self.hor_distance.clone(),
            hor_range: self.hor_range.clone(),
            level_count: self.level_count.clone(),
            level_distance: self.level_distance.clone(),
            level_range: self.level_range.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let args = Args::try_parse_from([
            "stratum",
            "--vert-count",
            "3",
            "--vert-distance",
            "6000",
            "--vert-range",
            "18000",
            "--hor-count",
            "4",
            "--hor-distance",
            "6000",
            "--hor-range",
            "24000",
            "--level-count",
            "5",
            "--level-distance",
            "3300",
            "-o",
            "plan.svg",
        ])
        .expect("arguments should parse");

        assert_eq!(args.output, "plan.svg");
        assert_eq!(args.log_level, "info");
        assert!(!args.dry_run);
        assert!(args.config.is_none());

        let raw = args.raw_input();
        assert_eq!(raw.hor_range, "24000");
        assert_eq!(raw.level_range, "1");
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let args = Args::try_parse_from([
            "stratum",
            "--vert-count",
            "3",
            "--vert-distance",
            "-5",
            "--vert-range",
            "10",
            "--hor-count",
            "1",
            "--hor-distance",
            "1",
            "--hor-range",
            "1",
            "--level-count",
            "1",
            "--level-distance",
            "1",
        ])
        .expect("negative values are passed through as text");

        assert_eq!(args.vert_distance, "-5");
    }

    #[test]
    fn test_missing_parameter_is_rejected() {
        let result = Args::try_parse_from(["stratum", "--vert-count", "3"]);
        assert!(result.is_err());
    }
}
