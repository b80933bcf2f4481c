//! Configuration model loaded from external sources.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::errors::GeneratorResult;

/// Where the generated server config is written unless overridden.
pub const DEFAULT_OUTPUT_PATH: &str = "server-config.json";

/// Optional settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "generator.yaml";

/// Prefix of environment variables overriding the settings file.
pub const ENV_PREFIX: &str = "GENERATOR";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Settings controlling where the generator reads its template and writes
/// the result.
pub struct GeneratorSettings {
    pub output_path: PathBuf,
    /// Template file used instead of the built-in one.
    pub template_path: Option<PathBuf>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            template_path: None,
        }
    }
}

impl GeneratorSettings {
    /// Loads [`SETTINGS_FILE`] if present, then applies `GENERATOR_*`
    /// environment overrides.
    pub fn load() -> GeneratorResult<Self> {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    pub fn load_from(file: &Path) -> GeneratorResult<Self> {
        let settings = Config::builder()
            .add_source(File::from(file).format(FileFormat::Yaml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
