use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sidekick_core::{CipherFormat, EnvSource, KdfParams};

/// Token length used when neither the flag nor the config sets one.
pub const DEFAULT_TOKEN_LENGTH: usize = 10;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SidekickConfig {
    pub cipher: CipherSection,
    pub token: TokenSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherSection {
    pub format: FormatSetting,
    pub kdf_memory_kib: u32,
    pub kdf_iterations: u32,
    pub kdf_parallelism: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSection {
    pub length: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FormatSetting {
    #[default]
    Envelope,
    Age,
}

impl Default for CipherSection {
    fn default() -> Self {
        let params = KdfParams::default();
        Self {
            format: FormatSetting::default(),
            kdf_memory_kib: params.memory_kib,
            kdf_iterations: params.iterations,
            kdf_parallelism: params.parallelism,
        }
    }
}

impl CipherSection {
    pub fn kdf_params(&self) -> KdfParams {
        KdfParams::new(
            self.kdf_memory_kib,
            self.kdf_iterations,
            self.kdf_parallelism,
        )
    }
}

impl Default for TokenSection {
    fn default() -> Self {
        Self {
            length: DEFAULT_TOKEN_LENGTH,
        }
    }
}

impl From<FormatSetting> for CipherFormat {
    fn from(value: FormatSetting) -> Self {
        match value {
            FormatSetting::Envelope => CipherFormat::Envelope,
            FormatSetting::Age => CipherFormat::Age,
        }
    }
}

pub fn default_config_path(env: &dyn EnvSource) -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir(env)?.join("config.toml"))
}

/// Read a config file; a missing file yields the defaults.
pub fn read_config_or_default(path: &Path) -> anyhow::Result<SidekickConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(SidekickConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<SidekickConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    let config: SidekickConfig = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))?;
    config
        .cipher
        .kdf_params()
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
    Ok(config)
}

pub fn write_config(path: &Path, config: &SidekickConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir(env: &dyn EnvSource) -> anyhow::Result<PathBuf> {
    if let Some(value) = env.get("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("sidekick"));
        }
    }
    Ok(home_dir(env)?.join(".config").join("sidekick"))
}

fn home_dir(env: &dyn EnvSource) -> anyhow::Result<PathBuf> {
    let home = env
        .get("HOME")
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
