use serde::Deserialize;
use std::path::PathBuf;

/// Complete YAML configuration structure
///
/// This structure represents the full configuration that can be loaded from a YAML file.
/// All fields are optional to allow partial configuration. Any value set here overrides
/// the corresponding environment variable.
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 3001
///   tls:
///     enabled: true
///     cert_path: "/etc/bearhug/cert.pem"
///     key_path: "/etc/bearhug/key.pem"
///
/// supabase:
///   url: "https://xyzcompany.supabase.co"
///   key: "your-service-key"
///   calls_table: "calls"
///   timeout_seconds: 10
///
/// recording:
///   role_arn: "arn:aws:iam::123456789012:role/daily-recordings"
///   bucket: "bearhug-recordings"
///   region: "us-west-2"
///
/// security:
///   cors_allowed_origins: "https://app.example.com"
///   rate_limit_requests_per_second: 60
///   rate_limit_burst_size: 10
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: Option<ServerYaml>,
    pub supabase: Option<SupabaseYaml>,
    pub recording: Option<RecordingYaml>,
    pub security: Option<SecurityYaml>,
}

/// Server configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYaml {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tls: Option<TlsYaml>,
}

/// TLS configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TlsYaml {
    pub enabled: Option<bool>,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

/// Supabase connection settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SupabaseYaml {
    pub url: Option<String>,
    pub key: Option<String>,
    pub calls_table: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Recording bucket settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RecordingYaml {
    pub role_arn: Option<String>,
    pub bucket: Option<String>,
    pub region: Option<String>,
}

/// Security configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SecurityYaml {
    /// CORS allowed origins (comma-separated list or "*" for all)
    pub cors_allowed_origins: Option<String>,
    /// Maximum requests per second per IP address
    pub rate_limit_requests_per_second: Option<u32>,
    /// Maximum burst size for rate limiting
    pub rate_limit_burst_size: Option<u32>,
}

impl YamlConfig {
    /// Load YAML configuration from a file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The YAML is malformed
    /// - Required fields have invalid types
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;

        let config: YamlConfig = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse YAML config: {e}"))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_config_full() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8080

supabase:
  url: "https://project.supabase.co"
  key: "service-key"
  calls_table: "calls_v2"
  timeout_seconds: 5

recording:
  role_arn: "arn:aws:iam::123456789012:role/recordings"
  bucket: "my-recordings"
  region: "us-east-1"

security:
  cors_allowed_origins: "*"
  rate_limit_requests_per_second: 100
"#;

        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            config.server.as_ref().unwrap().host,
            Some("127.0.0.1".to_string())
        );
        assert_eq!(config.server.as_ref().unwrap().port, Some(8080));
        let supabase = config.supabase.as_ref().unwrap();
        assert_eq!(supabase.url, Some("https://project.supabase.co".to_string()));
        assert_eq!(supabase.key, Some("service-key".to_string()));
        assert_eq!(supabase.calls_table, Some("calls_v2".to_string()));
        assert_eq!(supabase.timeout_seconds, Some(5));
        assert_eq!(
            config.recording.as_ref().unwrap().bucket,
            Some("my-recordings".to_string())
        );
        let security = config.security.as_ref().unwrap();
        assert_eq!(security.cors_allowed_origins, Some("*".to_string()));
        assert_eq!(security.rate_limit_requests_per_second, Some(100));
        assert!(security.rate_limit_burst_size.is_none());
    }

    #[test]
    fn test_yaml_config_empty() {
        let config: YamlConfig = serde_yaml::from_str("").unwrap();

        assert!(config.server.is_none());
        assert!(config.supabase.is_none());
        assert!(config.recording.is_none());
        assert!(config.security.is_none());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        fs::write(&config_path, "server:\n  host: \"localhost\"\n  port: 3000\n").unwrap();

        let config = YamlConfig::from_file(&config_path).unwrap();

        assert_eq!(
            config.server.as_ref().unwrap().host,
            Some("localhost".to_string())
        );
        assert_eq!(config.server.as_ref().unwrap().port, Some(3000));
    }

    #[test]
    fn test_from_file_not_found() {
        let path = PathBuf::from("/nonexistent/config.yaml");
        let result = YamlConfig::from_file(&path);

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }

    #[test]
    fn test_from_file_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("invalid.yaml");

        fs::write(&config_path, "invalid: yaml: content:").unwrap();

        let result = YamlConfig::from_file(&config_path);

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse YAML")
        );
    }
}
