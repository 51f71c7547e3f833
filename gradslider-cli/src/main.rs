//! gradslider CLI — inspect slider math without a UI.
//!
//! Commands:
//! - `value-at` — value under a track location
//! - `location-of` — track location of a value
//! - `ramp` — color samples from minimum to maximum
//! - `layout` — track, thumb and mask geometry for given bounds
//! - `check` — validate a TOML config or a JSON archive

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gradslider_core::geometry::{intrinsic_height, FALLBACK_CENTER_MARK};
use gradslider_core::{
    color_for_value, location_for_value, mask_path, thumb_position, value_for_location,
    NullRenderer, Rect, SliderArchive, SliderConfig, SliderLayout, SliderModel,
};

#[derive(Parser)]
#[command(name = "gradslider", about = "gradslider CLI — gradient slider mapping and layout")]
struct Cli {
    /// Slider configuration (TOML). Defaults apply for missing keys.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a track location to a value.
    ValueAt {
        /// Location along the track.
        #[arg(long, allow_hyphen_values = true)]
        x: f64,

        /// Track width.
        #[arg(long)]
        width: f64,

        /// Track left edge.
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        left: f64,
    },
    /// Map a value to a track location.
    LocationOf {
        #[arg(long, allow_hyphen_values = true)]
        value: f64,

        /// Track width.
        #[arg(long)]
        width: f64,

        /// Track left edge.
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        left: f64,
    },
    /// Print evenly spaced `value  #hex` samples from minimum to maximum.
    Ramp {
        /// Number of samples, at least 2.
        #[arg(long, default_value_t = 11)]
        steps: usize,
    },
    /// Print the layout for a control of the given size.
    Layout {
        #[arg(long)]
        width: f64,

        /// Control height. Defaults to the intrinsic height.
        #[arg(long)]
        height: Option<f64>,

        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        value: f64,
    },
    /// Validate a TOML config or a JSON archive (by extension).
    Check {
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::ValueAt { x, width, left } => {
            println!("{}", value_for_location(x, left, width, config.range()));
        }
        Commands::LocationOf { value, width, left } => {
            println!("{}", location_for_value(value, left, width, config.range()));
        }
        Commands::Ramp { steps } => print!("{}", ramp(&config, steps)?),
        Commands::Layout { width, height, value } => {
            let height = height.unwrap_or_else(|| intrinsic_height(&config));
            print!("{}", describe_layout(&config, width, height, value)?);
        }
        Commands::Check { file } => println!("{}", check(&file, &config)?),
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SliderConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            SliderConfig::load(path).with_context(|| format!("loading config {}", path.display()))
        }
        None => Ok(SliderConfig::default()),
    }
}

fn ramp(config: &SliderConfig, steps: usize) -> Result<String> {
    if steps < 2 {
        bail!("--steps must be at least 2 (got {steps})");
    }
    let range = config.range();
    let mut out = String::new();
    for i in 0..steps {
        let value = if i == steps - 1 {
            range.max
        } else {
            range.min + range.span() * i as f64 / (steps - 1) as f64
        };
        out.push_str(&format!("{value:>12.4}  {}\n", color_for_value(value, config)));
    }
    Ok(out)
}

fn describe_layout(config: &SliderConfig, width: f64, height: f64, value: f64) -> Result<String> {
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        bail!("bounds must be finite and non-negative (got {width} × {height})");
    }
    let bounds = Rect::new(0.0, 0.0, width, height);
    let layout = SliderLayout::compute(bounds, config, FALLBACK_CENTER_MARK);
    let value = config.range().clamp(value);
    let thumb = thumb_position(bounds, config, value);
    let mask = mask_path(bounds, config, value);

    let fmt_rect = |r: Rect| {
        format!("x={:.2} y={:.2} w={:.2} h={:.2}", r.min_x(), r.min_y(), r.width(), r.height())
    };
    let points: Vec<String> = mask.points.iter().map(|p| format!("({:.2}, {:.2})", p.x, p.y)).collect();

    Ok(format!(
        "bounds       {}\n\
         track        {}\n\
         center mark  {}\n\
         thumb        center=({:.2}, {:.2}) diameter={:.2}\n\
         mask         {}\n\
         value        {value}\n\
         color        {}\n",
        fmt_rect(bounds),
        fmt_rect(layout.track),
        fmt_rect(layout.center_mark),
        thumb.x,
        thumb.y,
        layout.thumb_size,
        points.join(" "),
        color_for_value(value, config),
    ))
}

fn check(file: &Path, base: &SliderConfig) -> Result<String> {
    let is_json = file.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("reading {}", file.display()))?;
        let archive = SliderArchive::from_json(&content)?;
        let model = SliderModel::restore(&archive, base, NullRenderer, Rect::default())?;
        Ok(format!(
            "{}: archive ok (value {} in [{}, {}])",
            file.display(),
            model.value(),
            model.config().minimum_value,
            model.config().maximum_value
        ))
    } else {
        let config = SliderConfig::load(file)?;
        Ok(format!(
            "{}: config ok (range [{}, {}], continuous {})",
            file.display(),
            config.minimum_value,
            config.maximum_value,
            config.is_continuous
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_config_flag_parses_after_subcommand() {
        let cli = Cli::try_parse_from(["gradslider", "ramp", "--steps", "3", "--config", "s.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("s.toml")));
        assert!(matches!(cli.command, Commands::Ramp { steps: 3 }));
    }

    #[test]
    fn negative_locations_parse() {
        let cli = Cli::try_parse_from(["gradslider", "value-at", "--x", "-5", "--width", "100"]).unwrap();
        assert!(matches!(cli.command, Commands::ValueAt { x, .. } if x == -5.0));
    }

    #[test]
    fn ramp_hits_both_endpoints() {
        let out = ramp(&SliderConfig::default(), 3).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("#0000ff"));
        assert!(lines[2].ends_with("#ff8000"));
        assert!(ramp(&SliderConfig::default(), 1).is_err());
    }

    #[test]
    fn layout_reports_thumb_and_track() {
        let out = describe_layout(&SliderConfig::default(), 200.0, 30.0, 1.0).unwrap();
        assert!(out.contains("track        x=2.00 y=14.00 w=200.00 h=2.00"));
        assert!(out.contains("center=(192.00, 15.00)"));
        assert!(describe_layout(&SliderConfig::default(), -1.0, 30.0, 0.0).is_err());
    }

    #[test]
    fn check_accepts_config_and_archive() {
        let dir = tempfile::tempdir().unwrap();

        let toml = dir.path().join("slider.toml");
        std::fs::write(&toml, "maximum_value = 10.0\nis_continuous = false\n").unwrap();
        assert!(check(&toml, &SliderConfig::default()).unwrap().contains("config ok"));

        let json = dir.path().join("state.json");
        std::fs::write(&json, r#"{ "value": 0.25 }"#).unwrap();
        assert!(check(&json, &SliderConfig::default()).unwrap().contains("value 0.25"));
    }

    #[test]
    fn check_rejects_inverted_range() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("state.json");
        std::fs::write(&json, r#"{ "minimum_value": 3.0, "maximum_value": 1.0 }"#).unwrap();
        assert!(check(&json, &SliderConfig::default()).is_err());
    }
}
