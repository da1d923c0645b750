use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Command-line flags. Only flags that were actually given are merged over
/// the file and environment layers.
#[derive(Parser, Serialize, Clone, Debug, Default)]
#[command(name = "fellowship-server", version, about = "Fellowship website content API")]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "FELLOWSHIP_PORT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Bind address
    #[arg(long, env = "FELLOWSHIP_BIND_ADDRESS")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_address: Option<String>,

    /// Path to TOML config file
    #[arg(long, default_value = "./fellowship.toml")]
    #[serde(skip)]
    pub config: String,

    /// Enable structured JSON logging (for Docker/production)
    #[arg(long)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub json_logs: bool,

    /// Output a commented TOML config template and exit
    #[arg(long)]
    #[serde(skip)]
    pub generate_config: bool,
}

/// Resolved server configuration.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub json_logs: bool,

    /// Contact form settings (loaded from [contact] section in TOML)
    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(skip)]
    pub generate_config: bool,
}

/// Rate limiting for the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    /// Whether POST /api/contact is rate limited per client IP (default: true)
    #[serde(default = "default_rate_limit_enabled")]
    pub rate_limit_enabled: bool,

    /// Seconds to earn back one request (default: 12, i.e. 5 per minute)
    #[serde(default = "default_rate_limit_period")]
    pub rate_limit_period_secs: u64,

    /// Requests allowed in a burst before limiting kicks in (default: 5)
    #[serde(default = "default_rate_limit_burst")]
    pub rate_limit_burst: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            rate_limit_enabled: true,
            rate_limit_period_secs: 12,
            rate_limit_burst: 5,
        }
    }
}

fn default_rate_limit_enabled() -> bool {
    true
}

fn default_rate_limit_period() -> u64 {
    12
}

fn default_rate_limit_burst() -> u32 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "0.0.0.0".to_string(),
            json_logs: false,
            contact: ContactConfig::default(),
            generate_config: false,
        }
    }
}

impl Config {
    /// Load config with layered precedence:
    /// built-in defaults < TOML file < env vars (FELLOWSHIP_*) < CLI args
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(Cli::parse())
    }

    pub fn load_from(cli: Cli) -> Result<Self, figment::Error> {
        let config_path = cli.config.clone();
        let generate_config = cli.generate_config;

        let mut config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("FELLOWSHIP_").split("__"))
            .merge(Serialized::defaults(cli))
            .extract()?;
        config.generate_config = generate_config;
        Ok(config)
    }
}

/// Generate a commented TOML config template
pub fn generate_config_template() -> String {
    r#"# Fellowship Server Configuration
# Place this file at ./fellowship.toml or specify with --config <path>
# All settings can be overridden via environment variables (FELLOWSHIP_PORT, etc.)
# or CLI flags (--port, etc.). Nested keys use a double underscore:
# FELLOWSHIP_CONTACT__RATE_LIMIT_BURST=10

# Server port (default: 5000)
# port = 5000

# Bind address (default: 0.0.0.0, all interfaces)
# bind_address = "0.0.0.0"

# Enable structured JSON logging for Docker/production
# json_logs = false

# ---- Contact Form ----
# [contact]

# Rate limit POST /api/contact per client IP (default: true)
# rate_limit_enabled = true

# Seconds to replenish one request (default: 12, i.e. 5 per minute)
# rate_limit_period_secs = 12

# Burst size before limiting starts (default: 5)
# rate_limit_burst = 5
"#
    .to_string()
}
