use serde::{Deserialize, Serialize};
use sieve_filter::{DEFAULT_MASK, FilterOptions};
use std::path::{Path, PathBuf};

/// Configuration for sieve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Input limits applied by the command line before filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    #[serde(default = "default_truncate_chars")]
    pub truncate_chars: usize,

    #[serde(default = "default_true")]
    pub truncate: bool,

    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_mask")]
    pub mask: char,

    #[serde(default)]
    pub extra_words: Vec<String>,

    #[serde(default)]
    pub allowed_words: Vec<String>,

    #[serde(default)]
    pub extra_false_positives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default tracing filter, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            truncate_chars: default_truncate_chars(),
            truncate: true,
            ellipsis: default_ellipsis(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            mask: default_mask(),
            extra_words: Vec::new(),
            allowed_words: Vec::new(),
            extra_false_positives: Vec::new(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_max_input_chars() -> usize {
    100_000
}

fn default_truncate_chars() -> usize {
    5_000
}

fn default_true() -> bool {
    true
}

fn default_ellipsis() -> String {
    "...".to_string()
}

fn default_mask() -> char {
    DEFAULT_MASK
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl FilterConfig {
    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            mask: self.mask,
            extra_words: self.extra_words.clone(),
            allowed_words: self.allowed_words.clone(),
            extra_false_positives: self.extra_false_positives.clone(),
        }
    }
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            config.save_to(&path)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file, which must exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let mask = self.filter.mask;
        if mask.is_alphanumeric() || mask == '_' {
            anyhow::bail!("filter.mask must not be a letter, digit or '_' (got '{}')", mask);
        }
        if self.limits.max_input_chars == 0 {
            anyhow::bail!("limits.max_input_chars must be greater than zero");
        }
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "sieve", "sieve") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.sieve/config.toml")
        }
    }
}
