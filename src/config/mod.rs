//! Configuration module for the BearHug gateway
//!
//! This module handles server configuration from various sources: .env files, YAML files,
//! and environment variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//! - `utils`: Utility functions for configuration parsing
//!
//! # Example
//! ```rust,no_run
//! use bearhug_gateway::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::catalog::RecordingSettings;

mod env;
mod merge;
mod utils;
mod validation;
mod yaml;

/// Default table holding one row per stored call
pub const DEFAULT_CALLS_TABLE: &str = "calls";

/// TLS configuration for HTTPS
#[derive(Debug, Clone)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Server configuration
///
/// Contains all configuration needed to run the gateway, including:
/// - Server settings (host, port, TLS)
/// - Supabase credentials and the calls table name
/// - Recording bucket settings handed to the voice bot pipeline
/// - Security settings (CORS, rate limiting)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    // Supabase settings
    /// Project URL, e.g. `https://xyzcompany.supabase.co`
    pub supabase_url: Option<String>,
    /// Service or anon key sent as both `apikey` and bearer token
    pub supabase_key: Option<String>,
    /// Table receiving call records
    pub calls_table: String,
    /// Transport timeout for store requests
    pub store_timeout_seconds: u64,

    // Recording bucket settings
    pub recording_role_arn: Option<String>,
    pub recording_bucket: Option<String>,
    pub recording_region: Option<String>,

    // Security configuration
    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: None (CORS disabled, same-origin only)
    pub cors_allowed_origins: Option<String>,

    // Rate limiting configuration
    /// Maximum requests per second per IP address
    /// Default: 60
    pub rate_limit_requests_per_second: u32,
    /// Maximum burst size for rate limiting
    /// Default: 10
    pub rate_limit_burst_size: u32,
}

/// Clear the Supabase key from memory when the configuration goes away.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.supabase_key {
            key.zeroize();
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables only
    ///
    /// The .env file is loaded in main.rs before this is called, so values from it
    /// are already visible as environment variables.
    ///
    /// # Errors
    /// Returns an error if numeric variables cannot be parsed or validation fails.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = merge::merge_config(None)?;
        validation::validate_tls(&config.tls)?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    /// - Configuration validation fails
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        let config = merge::merge_config(Some(yaml_config))?;
        validation::validate_tls(&config.tls)?;
        Ok(config)
    }

    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if TLS is enabled
    pub fn is_tls_enabled(&self) -> bool {
        self.tls.is_some()
    }

    /// Returns true when both the Supabase URL and key are present and non-empty
    pub fn has_supabase_credentials(&self) -> bool {
        self.supabase_credentials().is_some()
    }

    /// Supabase URL and key, or None when either is missing or empty
    pub fn supabase_credentials(&self) -> Option<(&str, &str)> {
        let url = self.supabase_url.as_deref().filter(|v| !v.trim().is_empty())?;
        let key = self.supabase_key.as_deref().filter(|v| !v.trim().is_empty())?;
        Some((url, key))
    }

    /// Raw-track recording settings handed to the bot orchestrator
    pub fn recording_settings(&self) -> RecordingSettings {
        RecordingSettings::from_config(self)
    }
}
