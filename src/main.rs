use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use sundial_layout::{
    layout_dial, read_sample_table, MonthDay, SundialConfig, SundialType, SvgSink,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sundial hour-line layout from sun position tables", long_about = None)]
struct Cli {
    /// Sun position table (date column plus `A HH:MM:SS` / `E HH:MM:SS` columns)
    #[arg(long, value_hint = ValueHint::FilePath)]
    csvfile: PathBuf,

    /// Output SVG path
    #[arg(short, long, default_value = "sundial.svg", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// JSON configuration file; flags below override its values
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Shadow stick length
    #[arg(long)]
    length: Option<f64>,

    /// Generate the folded box layout
    #[arg(long, action = ArgAction::SetTrue)]
    box_mode: bool,

    /// Hour of the day to start
    #[arg(long)]
    day_start: Option<u32>,

    /// Hour of the day to end
    #[arg(long)]
    day_end: Option<u32>,

    /// Which half of the year to draw
    #[arg(long, value_enum)]
    sundial_type: Option<SundialTypeOpt>,

    /// Day of the summer solstice (MM-DD)
    #[arg(long)]
    solstice_summer: Option<MonthDay>,

    /// Day of the winter solstice (MM-DD)
    #[arg(long)]
    solstice_winter: Option<MonthDay>,

    /// X offset of the stick on the paper
    #[arg(long)]
    offset_x: Option<f64>,

    /// Y offset of the stick on the paper
    #[arg(long)]
    offset_y: Option<f64>,

    /// Half-size of the square the curves are cut to
    #[arg(long)]
    bounding_box: Option<f64>,

    /// Only draw samples of this year
    #[arg(long)]
    reference_year: Option<i32>,

    /// Skip the stick reference and cut template
    #[arg(long, action = ArgAction::SetTrue)]
    no_guides: bool,

    /// Verbose logging
    #[arg(long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SundialTypeOpt {
    Both,
    SummerToWinterOnly,
    WinterToSummerOnly,
}

impl From<SundialTypeOpt> for SundialType {
    fn from(value: SundialTypeOpt) -> Self {
        match value {
            SundialTypeOpt::Both => SundialType::Both,
            SundialTypeOpt::SummerToWinterOnly => SundialType::SummerToWinterOnly,
            SundialTypeOpt::WinterToSummerOnly => SundialType::WinterToSummerOnly,
        }
    }
}

fn build_config(cli: &Cli) -> Result<SundialConfig> {
    let mut config = match &cli.config {
        Some(path) => SundialConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SundialConfig::default(),
    };
    if let Some(length) = cli.length {
        config.length = length;
    }
    if cli.box_mode {
        config.box_mode = true;
    }
    if let Some(hour) = cli.day_start {
        config.day_start = hour;
    }
    if let Some(hour) = cli.day_end {
        config.day_end = hour;
    }
    if let Some(kind) = cli.sundial_type {
        config.sundial_type = kind.into();
    }
    if let Some(day) = cli.solstice_summer {
        config.solstice_summer = day;
    }
    if let Some(day) = cli.solstice_winter {
        config.solstice_winter = day;
    }
    if let Some(x) = cli.offset_x {
        config.offset_x = x;
    }
    if let Some(y) = cli.offset_y {
        config.offset_y = y;
    }
    if let Some(size) = cli.bounding_box {
        config.bounding_box = size;
    }
    if cli.reference_year.is_some() {
        config.reference_year = cli.reference_year;
    }
    if cli.no_guides {
        config.guides = false;
    }
    config.validate().context("invalid sundial configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = build_config(&cli)?;
    let table = read_sample_table(&cli.csvfile)
        .with_context(|| format!("failed to read {}", cli.csvfile.display()))?;
    let layout = layout_dial(&table, &config)?;

    let mut sink = SvgSink::for_dial(config.origin(), config.bounding_box);
    layout.render(&mut sink);
    sink.save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!(
        "Wrote {} ({} elements)",
        cli.output.display(),
        sink.element_count()
    );
    Ok(())
}
