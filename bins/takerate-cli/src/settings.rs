//! Layered model configuration for the CLI.
//!
//! Sources, lowest precedence first: the selected preset, an optional config
//! file (format from its extension), `TAKERATE__`-prefixed environment
//! variables with `__` nesting (e.g. `TAKERATE__MARKET__RIDERS=2000`), then
//! command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use takerate_core::config::{CurveKind, ModelConfig, Preset};

const ENV_PREFIX: &str = "TAKERATE";
const ENV_SEPARATOR: &str = "__";

/// Command-line overrides applied after every other source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub curve: Option<CurveKind>,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub samples: Option<usize>,
}

impl Overrides {
    pub fn apply(&self, config: &mut ModelConfig) {
        if let Some(kind) = self.curve {
            config.curve.kind = kind;
        }
        if let Some(lower) = self.lower {
            config.sweep.lower = lower;
        }
        if let Some(upper) = self.upper {
            config.sweep.upper = upper;
        }
        if let Some(samples) = self.samples {
            config.sweep.samples = samples;
        }
    }
}

/// Merge the preset, optional file, and environment into one configuration.
pub fn load(preset: Preset, file: Option<&Path>) -> Result<ModelConfig> {
    let defaults = ModelConfig::from_preset(preset);
    let mut builder = config::Config::builder().add_source(
        config::Config::try_from(&defaults).context("failed to serialize preset defaults")?,
    );

    if let Some(path) = file {
        builder = builder.add_source(config::File::from(path));
    }

    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    );

    let merged = builder
        .build()
        .with_context(|| match file {
            Some(path) => format!("failed to read config file {}", path.display()),
            None => "failed to build configuration".to_string(),
        })?;

    merged
        .try_deserialize::<ModelConfig>()
        .context("invalid model configuration")
}

/// [`load`] followed by command-line overrides.
pub fn resolve(preset: Preset, file: Option<&Path>, overrides: &Overrides) -> Result<ModelConfig> {
    let mut config = load(preset, file)?;
    overrides.apply(&mut config);
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}
