//! # Configuration
//!
//! The base URL is resolved once, from an [`Environment`], by the pure function
//! [`resolve_base_url`]. Priority:
//!
//! 1. an enabled, non-blank override host, on every platform
//! 2. in development, the platform's loopback address as seen from its emulator
//! 3. otherwise [`PRODUCTION_BASE_URL`]
//!
//! [`Config`] gathers the environment and the remaining knobs from an optional
//! TOML file and command-line flags (flags win):
//!
//! ```toml
//! [environment]
//! platform = "android"
//! development = true
//!
//! [api]
//! override_host = "192.168.1.20"
//! override_enabled = true
//! timeout_secs = 10
//!
//! [fallback]
//! enabled = true
//! ```

use crate::model::{RecipeId, UserId, Visibility};
use anyhow::{ensure, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::net::Ipv6Addr;
use std::path::PathBuf;
use std::time::Duration;

/// Android emulators reach the host machine through this alias.
pub const ANDROID_EMULATOR_BASE_URL: &str = "http://10.0.2.2:8000/api";
pub const IOS_SIMULATOR_BASE_URL: &str = "http://localhost:8000/api";
pub const LOCAL_BASE_URL: &str = "http://localhost:8000/api";
pub const PRODUCTION_BASE_URL: &str = "http://localhost:8000/api";

const DEFAULT_API_PORT: u16 = 8000;

/// The target the client runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    Web,
    #[default]
    Other,
}

/// Everything base-URL resolution depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub platform: Platform,
    pub development: bool,
    /// Only set when the override is enabled.
    pub override_host: Option<String>,
}

/// Resolves the API base URL. Deterministic, no I/O.
///
/// A bare override host (`192.168.1.20`) is expanded to
/// `http://192.168.1.20:8000/api`; one that carries a port keeps it. IPv6
/// literals are bracketed (`::1` becomes `http://[::1]:8000/api`), or may be
/// given as `[::1]:9000`. A value with a scheme is taken as the full base URL.
pub fn resolve_base_url(env: &Environment) -> String {
    let override_host = env
        .override_host
        .as_deref()
        .map(str::trim)
        .filter(|host| !host.is_empty());

    if let Some(host) = override_host {
        return if host.contains("://") {
            host.trim_end_matches('/').to_string()
        } else if host.parse::<Ipv6Addr>().is_ok() {
            format!("http://[{host}]:{DEFAULT_API_PORT}/api")
        } else if host.contains(':') {
            format!("http://{host}/api")
        } else {
            format!("http://{host}:{DEFAULT_API_PORT}/api")
        };
    }

    if !env.development {
        return PRODUCTION_BASE_URL.to_string();
    }

    match env.platform {
        Platform::Android => ANDROID_EMULATOR_BASE_URL,
        Platform::Ios => IOS_SIMULATOR_BASE_URL,
        Platform::Web | Platform::Other => LOCAL_BASE_URL,
    }
    .to_string()
}

#[derive(Parser, Debug)]
#[command(name = "recipe-client", about = "Browse and post to the recipe-sharing API")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Platform the client pretends to run on
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Use development defaults
    #[arg(long, conflicts_with = "release_mode")]
    pub dev: bool,

    /// Use production defaults
    #[arg(long)]
    pub release_mode: bool,

    /// Host (or full base URL) every platform should use
    #[arg(long)]
    pub api_host: Option<String>,

    /// Surface read failures instead of showing bundled data
    #[arg(long)]
    pub no_fallback: bool,

    /// Per-request deadline
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Recipe feed, newest first
    Feed,
    /// Food status stories
    Stories,
    /// Friendships and known users
    Friends,
    /// Current user and their recipes
    Profile,
    /// One recipe
    Recipe { id: RecipeId },
    /// One user
    User { id: UserId },
    /// Create a recipe
    Publish {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        ingredients: String,
        #[arg(long, default_value = "")]
        instructions: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        prep_time: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long, default_value_t = Visibility::Friends)]
        visibility: Visibility,
    },
    /// Change fields of a recipe
    Edit {
        id: RecipeId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        ingredients: Option<String>,
        #[arg(long)]
        instructions: Option<String>,
        #[arg(long)]
        prep_time: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        visibility: Option<Visibility>,
    },
    /// Delete a recipe
    Delete { id: RecipeId },
    /// Post a food status
    Post {
        content: String,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long, default_value_t = Visibility::Friends)]
        visibility: Visibility,
    },
    /// Send a friendship request
    Befriend { user_id: UserId },
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub environment: EnvironmentConfig,
    pub api: ApiConfig,
    pub fallback: FallbackConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub platform: Platform,
    pub development: bool,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub override_host: Option<String>,
    pub override_enabled: bool,
    pub timeout_secs: u64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FallbackConfig {
    pub enabled: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            development: cfg!(debug_assertions),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            override_host: None,
            override_enabled: true,
            timeout_secs: api_framework::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                Self::from_toml(&content)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => Config::default(),
        };

        // CLI overrides
        if let Some(platform) = cli.platform {
            config.environment.platform = platform;
        }
        if cli.dev {
            config.environment.development = true;
        }
        if cli.release_mode {
            config.environment.development = false;
        }
        if let Some(ref host) = cli.api_host {
            config.api.override_host = Some(host.clone());
            config.api.override_enabled = true;
        }
        if cli.no_fallback {
            config.fallback.enabled = false;
        }
        if let Some(secs) = cli.timeout_secs {
            config.api.timeout_secs = secs;
        }

        ensure!(config.api.timeout_secs > 0, "timeout_secs must be at least 1");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn environment(&self) -> Environment {
        let override_host = self
            .api
            .override_host
            .clone()
            .filter(|_| self.api.override_enabled);
        Environment {
            platform: self.environment.platform,
            development: self.environment.development,
            override_host,
        }
    }

    pub fn base_url(&self) -> String {
        resolve_base_url(&self.environment())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }
}
