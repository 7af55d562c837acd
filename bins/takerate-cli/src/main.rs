//! takerate — Command-line front end for the take-rate pricing model.
//!
//! Evaluates the model over a take-rate sweep and prints either a text summary
//! or the full aligned series as JSON for an external plotting tool.

mod report;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use takerate_core::config::{CurveKind, ModelConfig, Preset};
use takerate_model::MarketModel;
use tracing::info;

use crate::settings::Overrides;

/// Take-rate pricing model for a two-sided ride-hailing marketplace.
#[derive(Parser)]
#[command(name = "takerate")]
#[command(version, about = "Find the take rate that maximizes net revenue.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the model and print the report.
    Run(RunArgs),
    /// Print only the revenue-maximizing take rate.
    Optimum(ModelArgs),
    /// Print the effective configuration as JSON without evaluating.
    Config(ModelArgs),
}

#[derive(Args)]
struct ModelArgs {
    /// Curve and sweep preset (linear or inverse-affine).
    #[arg(short, long, default_value = "inverse-affine")]
    preset: Preset,

    /// Config file (TOML, JSON, or YAML) layered over the preset.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Match-rate curve strategy, overriding the preset.
    #[arg(long)]
    curve: Option<CurveKind>,

    /// Lowest take rate in the sweep, in dollars.
    #[arg(long)]
    lower: Option<f64>,

    /// Highest take rate in the sweep, in dollars.
    #[arg(long)]
    upper: Option<f64>,

    /// Number of sweep points.
    #[arg(long)]
    samples: Option<usize>,
}

impl ModelArgs {
    fn resolve(&self) -> Result<ModelConfig> {
        let overrides = Overrides {
            curve: self.curve,
            lower: self.lower,
            upper: self.upper,
            samples: self.samples,
        };
        settings::resolve(self.preset, self.config.as_deref(), &overrides)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
struct RunArgs {
    #[command(flatten)]
    model: ModelArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Sweep points shown in the text table.
    #[arg(long, default_value = "11")]
    rows: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Optimum(args) => optimum(args),
        Commands::Config(args) => show_config(args),
    }
}

fn build_model(args: &ModelArgs) -> Result<(ModelConfig, MarketModel)> {
    let config = args.resolve()?;
    let model = MarketModel::new(&config).context("invalid model configuration")?;
    info!(
        curve = %model.curve().kind(),
        samples = config.sweep.samples,
        "evaluating take-rate sweep"
    );
    Ok((config, model))
}

fn run(args: RunArgs) -> Result<()> {
    let (config, model) = build_model(&args.model)?;
    let report = model.evaluate().context("model evaluation failed")?;

    match args.format {
        OutputFormat::Text => print!(
            "{}",
            report::render(&report, model.curve().kind(), &config.sweep, args.rows)
        ),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        ),
    }
    Ok(())
}

fn optimum(args: ModelArgs) -> Result<()> {
    let (_, model) = build_model(&args)?;
    let report = model.evaluate().context("model evaluation failed")?;
    println!("{}", report::optimum_annotation(&report.optimum));
    println!("{}", serde_json::to_string(&report.optimum)?);
    Ok(())
}

fn show_config(args: ModelArgs) -> Result<()> {
    let config = args.resolve()?;
    println!("{}", checked_config_json(&config)?);
    Ok(())
}

/// Pretty JSON of a configuration that `run` would accept, calibration included.
fn checked_config_json(config: &ModelConfig) -> Result<String> {
    MarketModel::new(config).context("invalid model configuration")?;
    serde_json::to_string_pretty(config).context("failed to serialize configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_json_for_valid_preset() {
        let json = checked_config_json(&ModelConfig::from_preset(Preset::Linear)).unwrap();
        assert!(json.contains("\"linear\""), "{json}");
    }

    #[test]
    fn config_rejects_unfittable_calibration() {
        let mut config = ModelConfig::default();
        config.curve.high.take_rate = config.curve.low.take_rate;
        assert!(config.validate().is_ok());
        let err = checked_config_json(&config).unwrap_err();
        assert!(format!("{err:#}").contains("invalid model configuration"), "{err:#}");
    }
}
