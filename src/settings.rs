use config::{Config, ConfigError, Environment, File};
use dotenv::dotenv;
use serde::Deserialize;
use std::{env, fmt, str::FromStr};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    /// Directory served under /assets (profile photo, thesis images, CSS).
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Profile-Site".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_assets_dir() -> String {
    "public".to_string()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            port: default_port(),
            host: default_host(),
            worker_count: default_worker_count(),
            assets_dir: default_assets_dir(),
            cors_allowed_origins: default_cors_origins(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(Environment::with_prefix("APP").separator("_").ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("APP_NAME cannot be empty");
        }
        if self.assets_dir.trim().is_empty() {
            errors.push("APP_ASSETS_DIR cannot be empty");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}
