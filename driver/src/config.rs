use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use utos_cast::IntWidth;
use common::log_info;

use crate::{render::OutputFormat, CONFIG_ENV_PREFIX};

const CONFIG_FILENAME: &str = "utos_config";

#[derive(Debug, Clone, Deserialize)]
pub struct UtosConfig {
    /// Width used when a command does not name one.
    #[serde(default = "default_width")]
    pub default_width: IntWidth,
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Where `bless` looks for case files when no directory is given.
    #[serde(default = "default_bless_dir")]
    pub bless_dir: PathBuf,
}

impl UtosConfig {
    const F_DEFAULT_WIDTH: &'static str = "default_width";
    const F_OUTPUT_FORMAT: &'static str = "output_format";
    const F_BLESS_DIR: &'static str = "bless_dir";
}

impl Default for UtosConfig {
    fn default() -> Self {
        Self {
            default_width: default_width(),
            output_format: OutputFormat::default(),
            bless_dir: default_bless_dir(),
        }
    }
}

fn default_width() -> IntWidth {
    IntWidth::W64
}

fn default_bless_dir() -> PathBuf {
    PathBuf::from("tests/bless")
}

pub fn load_config() -> Result<UtosConfig, ConfigError> {
    common::config::load_config(CONFIG_FILENAME, CONFIG_ENV_PREFIX, |b| {
        b.set_default(
            UtosConfig::F_DEFAULT_WIDTH,
            i64::from(default_width().bits()),
        )?
        .set_default(UtosConfig::F_OUTPUT_FORMAT, "text")?
        .set_default(
            UtosConfig::F_BLESS_DIR,
            default_bless_dir().to_string_lossy().to_string(),
        )
    })?
    .try_deserialize()
    .inspect(|c| log_info!("Loaded configurations: {:?}", c))
}
