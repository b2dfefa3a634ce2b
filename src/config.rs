use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Top-level Hypnos configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HypnosConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Session geometry.
    #[serde(default)]
    pub session: SessionToml,

    /// Markov chain settings.
    #[serde(default)]
    pub chain: ChainToml,

    /// Renderer settings.
    #[serde(default)]
    pub render: RenderToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionToml {
    #[serde(default = "default_epoch_minutes")]
    pub epoch_minutes: u32,
    #[serde(default = "default_duration_hours")]
    pub duration_hours: u32,
    #[serde(default = "default_initial_stage")]
    pub initial_stage: String,
}

impl Default for SessionToml {
    fn default() -> Self {
        Self {
            epoch_minutes: default_epoch_minutes(),
            duration_hours: default_duration_hours(),
            initial_stage: default_initial_stage(),
        }
    }
}

fn default_epoch_minutes() -> u32 {
    5
}
fn default_duration_hours() -> u32 {
    8
}
fn default_initial_stage() -> String {
    "Awake".to_string()
}

/// Transition rows keyed by stage name; omitted targets default to 0.
///
/// When the table is absent entirely, a built-in illustrative matrix is
/// used instead.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ChainToml {
    #[serde(default)]
    pub transitions: Option<BTreeMap<String, BTreeMap<String, f64>>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RenderToml {
    #[serde(default)]
    pub hypnogram: HypnogramToml,
    #[serde(default)]
    pub art: ArtToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HypnogramToml {
    #[serde(default = "default_hypnogram_output")]
    pub output: PathBuf,
    #[serde(default = "default_width_px")]
    pub width_px: u32,
    #[serde(default = "default_height_px")]
    pub height_px: u32,
    #[serde(default = "default_caption")]
    pub caption: String,
}

impl Default for HypnogramToml {
    fn default() -> Self {
        Self {
            output: default_hypnogram_output(),
            width_px: default_width_px(),
            height_px: default_height_px(),
            caption: default_caption(),
        }
    }
}

fn default_hypnogram_output() -> PathBuf {
    PathBuf::from("hypnogram.svg")
}
fn default_width_px() -> u32 {
    1000
}
fn default_height_px() -> u32 {
    400
}
fn default_caption() -> String {
    "Simulated Sleep Hypnogram".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtToml {
    #[serde(default = "default_art_output")]
    pub output: PathBuf,
    #[serde(default = "default_cols")]
    pub cols: usize,
    #[serde(default = "default_cell_px")]
    pub cell_px: u32,
    #[serde(default = "default_pad")]
    pub pad: f64,
    #[serde(default = "default_jitter")]
    pub jitter: f64,
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for ArtToml {
    fn default() -> Self {
        Self {
            output: default_art_output(),
            cols: default_cols(),
            cell_px: default_cell_px(),
            pad: default_pad(),
            jitter: default_jitter(),
            background: default_background(),
        }
    }
}

fn default_art_output() -> PathBuf {
    PathBuf::from("sleep_art.svg")
}
fn default_cols() -> usize {
    12
}
fn default_cell_px() -> u32 {
    64
}
fn default_pad() -> f64 {
    0.12
}
fn default_jitter() -> f64 {
    0.10
}
fn default_background() -> String {
    "#0F0F10".to_string()
}

/// Loads the TOML configuration, falling back to built-in defaults when the
/// file does not exist.
pub fn load(path: &Path) -> Result<HypnosConfig> {
    if !path.exists() {
        info!(path = %path.display(), "config file not found, using defaults");
        return Ok(HypnosConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    Ok(config)
}
