//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config <path>`
//! 2. `$LMS_AR_CONFIG` environment variable
//! 3. `./lms_ar.toml`
//! 4. Built-in defaults (everything is optional)
//!
//! A file named by 1. or 2. must exist.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lms_ar::RawParams;
use serde::Deserialize;

const CONFIG_ENV: &str = "LMS_AR_CONFIG";
const LOCAL_CONFIG: &str = "lms_ar.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

/// Simulation parameters, given as TOML numbers or strings. Strings reach the
/// generated code verbatim. Numbers are re-formatted (`0.10` becomes `0.1`,
/// `1e-2` becomes `0.01`), so quote values that must appear exactly as written.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub n: Option<ParamValue>,
    pub u1: Option<ParamValue>,
    pub u2: Option<ParamValue>,
    pub mu: Option<ParamValue>,
    /// Noise seed. Unseeded noise when absent.
    pub seed: Option<u64>,
}

/// Output file settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where `code` writes the generated Octave source.
    pub code_path: PathBuf,
    /// Where `run` writes chart data, if set.
    pub chart_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    pub fn to_text(&self) -> String {
        match self {
            ParamValue::Integer(value) => value.to_string(),
            ParamValue::Float(value) => value.to_string(),
            ParamValue::Text(value) => value.clone(),
        }
    }
}

// --- Defaults ---

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            code_path: PathBuf::from(lms_ar::codegen::DEFAULT_FILE_NAME),
            chart_path: None,
        }
    }
}

impl SimulationConfig {
    /// The configured parameters, with built-in defaults for missing values.
    pub fn raw_params(&self) -> RawParams {
        let defaults = RawParams::default();
        let text = |value: &Option<ParamValue>, default: String| match value {
            Some(value) => value.to_text(),
            None => default,
        };
        RawParams {
            n: text(&self.n, defaults.n),
            u1: text(&self.u1, defaults.u1),
            u2: text(&self.u2, defaults.u2),
            mu: text(&self.mu, defaults.mu),
        }
    }
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let (path, required) = config_path(explicit);
    if !required && !path.exists() {
        return Ok(Config::default());
    }
    read_config(&path)
}

pub fn read_config(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Resolve the config file path and whether it must exist.
fn config_path(explicit: Option<&Path>) -> (PathBuf, bool) {
    if let Some(p) = explicit {
        return (p.to_path_buf(), true);
    }

    if let Ok(p) = std::env::var(CONFIG_ENV) {
        return (PathBuf::from(p), true);
    }

    (PathBuf::from(LOCAL_CONFIG), false)
}
