use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::MatchLimits;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub candidate_limit: Option<usize>,
    pub recent_limit: Option<usize>,
    pub nearby_limit: Option<usize>,
}

impl MatchingSettings {
    pub fn limits(&self) -> MatchLimits {
        let defaults = MatchLimits::default();
        MatchLimits {
            candidate_limit: self.candidate_limit.unwrap_or(defaults.candidate_limit),
            recent_limit: self.recent_limit.unwrap_or(defaults.recent_limit),
            nearby_limit: self.nearby_limit.unwrap_or(defaults.nearby_limit),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_age_weight")]
    pub age: u32,
    #[serde(default = "default_height_weight")]
    pub height: u32,
    #[serde(default = "default_religion_weight")]
    pub religion: u32,
    #[serde(default = "default_caste_weight")]
    pub caste: u32,
    #[serde(default = "default_education_weight")]
    pub education: u32,
    #[serde(default = "default_occupation_weight")]
    pub occupation: u32,
    #[serde(default = "default_location_weight")]
    pub location: u32,
    #[serde(default = "default_marital_status_weight")]
    pub marital_status: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            age: default_age_weight(),
            height: default_height_weight(),
            religion: default_religion_weight(),
            caste: default_caste_weight(),
            education: default_education_weight(),
            occupation: default_occupation_weight(),
            location: default_location_weight(),
            marital_status: default_marital_status_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(value: &WeightsConfig) -> Self {
        Self {
            age: value.age,
            height: value.height,
            religion: value.religion,
            caste: value.caste,
            education: value.education,
            occupation: value.occupation,
            location: value.location,
            marital_status: value.marital_status,
        }
    }
}

fn default_age_weight() -> u32 { 20 }
fn default_height_weight() -> u32 { 10 }
fn default_religion_weight() -> u32 { 15 }
fn default_caste_weight() -> u32 { 10 }
fn default_education_weight() -> u32 { 15 }
fn default_occupation_weight() -> u32 { 10 }
fn default_location_weight() -> u32 { 15 }
fn default_marital_status_weight() -> u32 { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MATRIMONY)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATRIMONY__MATCHING__CANDIDATE_LIMIT -> matching.candidate_limit
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("MATRIMONY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
