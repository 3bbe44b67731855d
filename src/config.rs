use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub image_search: ImageSearchConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Exposes internal error details in 500 responses.
    #[serde(default)]
    pub development: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    #[serde(default = "default_original_count")]
    pub original_count: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            original_count: default_original_count(),
            page_size: default_page_size(),
        }
    }
}

fn default_original_count() -> usize {
    6
}

fn default_page_size() -> usize {
    6
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    #[serde(default = "default_generate_ttl_secs")]
    pub generate_ttl_secs: u64,
    #[serde(default = "default_external_ttl_secs")]
    pub external_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            generate_ttl_secs: default_generate_ttl_secs(),
            external_ttl_secs: default_external_ttl_secs(),
        }
    }
}

impl CacheConfig {
    pub fn generate_ttl(&self) -> Duration {
        Duration::from_secs(self.generate_ttl_secs)
    }

    pub fn external_ttl(&self) -> Duration {
        Duration::from_secs(self.external_ttl_secs)
    }
}

fn default_generate_ttl_secs() -> u64 {
    30 * 60
}

fn default_external_ttl_secs() -> u64 {
    60 * 60
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageSearchConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_image_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub access_key: String,
    #[serde(default = "default_image_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_image_endpoint(),
            access_key: String::new(),
            timeout_secs: default_image_timeout_secs(),
        }
    }
}

impl ImageSearchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_image_endpoint() -> String {
    "https://api.unsplash.com/search/photos".to_string()
}

fn default_image_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourcesConfig {
    #[serde(default = "default_true")]
    pub catalog: bool,
    /// User recipe store; a missing file simply yields no community recipes.
    #[serde(default = "default_community_path")]
    pub community_path: PathBuf,
    #[serde(default)]
    pub mealdb: MealDbConfig,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            catalog: true,
            community_path: default_community_path(),
            mealdb: MealDbConfig::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_community_path() -> PathBuf {
    PathBuf::from("data/user-recipes.json")
}

#[derive(Debug, Deserialize, Clone)]
pub struct MealDbConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_mealdb_url")]
    pub base_url: String,
    #[serde(default = "default_mealdb_limit")]
    pub limit: usize,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_mealdb_url(),
            limit: default_mealdb_limit(),
        }
    }
}

fn default_mealdb_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_mealdb_limit() -> usize {
    6
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (VIRALCARROT__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.development", false)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("VIRALCARROT")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(key) = env::var("UNSPLASH_ACCESS_KEY") {
            builder = builder.set_override("image_search.access_key", key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.generation.page_size < 1 {
            return Err("Generation page_size must be at least 1".to_string());
        }
        if self.image_search.enabled && self.image_search.access_key.is_empty() {
            return Err("Image search requires an access key".to_string());
        }
        if self.image_search.timeout_secs == 0 {
            return Err("Image search timeout must be at least 1 second".to_string());
        }
        if !matches!(self.observability.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format '{}', expected pretty or json",
                self.observability.format
            ));
        }
        Ok(())
    }

    /// Development mode is on when configured or when `ENVIRONMENT=development`.
    pub fn is_development(&self) -> bool {
        self.server.development
            || env::var("ENVIRONMENT")
                .map(|env| env == "development")
                .unwrap_or(false)
    }
}
