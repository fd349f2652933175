use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// Cube analytics API configuration, handed to the fetch layer explicitly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub url: String,
    pub api_key: String,
    pub timeout_seconds: u64,
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
    /// Cube relative date range, e.g. "last 30 days"
    pub date_range: String,
    pub volume_limit: usize,
    pub daily_limit: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: "https://cube.torque.so/cubejs-api/v1/load".to_string(),
            api_key: String::new(),
            timeout_seconds: 120,
            max_retries: 3,
            initial_backoff_ms: 500,
            backoff_multiplier: 2.0,
            max_backoff_seconds: 30,
            date_range: "last 30 days".to_string(),
            volume_limit: 10_000,
            daily_limit: 50_000,
        }
    }
}

/// Tuning knobs for the segmentation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub max_elbow_points: usize,
    pub min_elbow_sample: usize,
    pub elbow_resample_points: usize,
    pub density_bins: usize,
    pub max_natural_boundaries: usize,
    pub min_active_days: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_elbow_points: 5,
            min_elbow_sample: 100,
            elbow_resample_points: 1000,
            density_bins: 50,
            max_natural_boundaries: 5,
            min_active_days: 7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub results_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: PathBuf::from("./power_user_analysis_results.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let api = ApiConfig::default();
        let analysis = AnalysisConfig::default();
        let output = OutputConfig::default();
        let config = Config::builder()
            .set_default("api.url", api.url)?
            .set_default("api.api_key", api.api_key)?
            .set_default("api.timeout_seconds", api.timeout_seconds)?
            .set_default("api.max_retries", api.max_retries as i64)?
            .set_default("api.initial_backoff_ms", api.initial_backoff_ms)?
            .set_default("api.backoff_multiplier", api.backoff_multiplier)?
            .set_default("api.max_backoff_seconds", api.max_backoff_seconds)?
            .set_default("api.date_range", api.date_range)?
            .set_default("api.volume_limit", api.volume_limit as i64)?
            .set_default("api.daily_limit", api.daily_limit as i64)?
            .set_default("analysis.max_elbow_points", analysis.max_elbow_points as i64)?
            .set_default("analysis.min_elbow_sample", analysis.min_elbow_sample as i64)?
            .set_default(
                "analysis.elbow_resample_points",
                analysis.elbow_resample_points as i64,
            )?
            .set_default("analysis.density_bins", analysis.density_bins as i64)?
            .set_default(
                "analysis.max_natural_boundaries",
                analysis.max_natural_boundaries as i64,
            )?
            .set_default("analysis.min_active_days", analysis.min_active_days as i64)?
            .set_default(
                "output.results_path",
                output.results_path.to_string_lossy().to_string(),
            )?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // CUBE_API__URL style overrides for nested keys
            .add_source(
                config::Environment::with_prefix("CUBE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        if let Ok(key) = env::var("CUBE_API_KEY") {
            app_config.api.api_key = key;
        }

        if let Ok(url) = env::var("CUBE_API_URL") {
            app_config.api.url = url;
        }

        if app_config.api.timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "api.timeout_seconds must be greater than zero".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Result<Self, ConfigError> {
        match Self::load() {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::debug!("Falling back to built-in configuration: {}", e);
                Ok(Self {
                    api: ApiConfig::default(),
                    analysis: AnalysisConfig::default(),
                    output: OutputConfig::default(),
                })
            }
        }
    }
}
