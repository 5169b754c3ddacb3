//! Configuration loading from benchtable.toml
//!
//! benchtable configuration can be specified in a `benchtable.toml` file in the
//! project root. The configuration is automatically discovered by walking up
//! from the current directory.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Name of the configuration file looked up by [`BenchtableConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "benchtable.toml";

/// benchtable configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BenchtableConfig {
    /// Terminal output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Table layout configuration
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Overrides for the detected execution context
    #[serde(default)]
    pub context: ContextOverrides,
}

/// When to write ANSI color codes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ColorChoice {
    /// Color when writing to a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorChoice {
    /// Install this choice as `colored`'s global override
    pub fn apply(self) {
        match self {
            ColorChoice::Auto => colored::control::unset_override(),
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}

/// Terminal output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Color mode: "auto", "always" or "never"
    #[serde(default)]
    pub color: ColorChoice,
}

/// Table layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Floor for the benchmark name column width
    #[serde(default = "default_min_name_width")]
    pub min_name_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_name_width: default_min_name_width(),
        }
    }
}

fn default_min_name_width() -> usize {
    benchtable_report::MIN_NAME_FIELD_WIDTH
}

/// Values that replace detected machine properties
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContextOverrides {
    #[serde(default)]
    pub num_cpus: Option<u32>,
    #[serde(default)]
    pub mhz_per_cpu: Option<f64>,
    #[serde(default)]
    pub cpu_scaling_enabled: Option<bool>,
}

impl BenchtableConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for [`CONFIG_FILE_NAME`]
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        warn!(path = %config_path.display(), "Ignoring invalid config: {}", e);
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# benchtable Configuration

[output]
# Color mode: auto, always, never
color = "auto"

[layout]
# Minimum width of the benchmark name column
min_name_width = 10

[context]
# Override detected machine properties (uncomment to enable)
# num_cpus = 8
# mhz_per_cpu = 3200.0
# cpu_scaling_enabled = false
"#
        .to_string()
    }
}
