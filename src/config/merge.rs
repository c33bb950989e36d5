use std::path::PathBuf;

use super::env::load_from_env;
use super::yaml::YamlConfig;
use super::{ServerConfig, TlsConfig};

/// Start from the environment and let any YAML values win.
pub(super) fn merge_config(
    yaml: Option<YamlConfig>,
) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let mut config = load_from_env()?;

    let Some(yaml) = yaml else {
        return Ok(config);
    };

    if let Some(server) = yaml.server {
        if let Some(host) = server.host {
            config.host = host;
        }
        if let Some(port) = server.port {
            config.port = port;
        }
        if let Some(tls) = server.tls {
            match tls.enabled {
                Some(false) => config.tls = None,
                Some(true) => {
                    let cert_path = tls
                        .cert_path
                        .or_else(|| {
                            config
                                .tls
                                .as_ref()
                                .map(|t| t.cert_path.display().to_string())
                        })
                        .ok_or("server.tls.enabled is true but cert_path is not set")?;
                    let key_path = tls
                        .key_path
                        .or_else(|| {
                            config
                                .tls
                                .as_ref()
                                .map(|t| t.key_path.display().to_string())
                        })
                        .ok_or("server.tls.enabled is true but key_path is not set")?;
                    config.tls = Some(TlsConfig {
                        cert_path: PathBuf::from(cert_path),
                        key_path: PathBuf::from(key_path),
                    });
                }
                None => {}
            }
        }
    }

    if let Some(supabase) = yaml.supabase {
        if supabase.url.is_some() {
            config.supabase_url = supabase.url;
        }
        if supabase.key.is_some() {
            config.supabase_key = supabase.key;
        }
        if let Some(table) = supabase.calls_table {
            config.calls_table = table;
        }
        if let Some(timeout) = supabase.timeout_seconds {
            config.store_timeout_seconds = timeout;
        }
    }

    if let Some(recording) = yaml.recording {
        if recording.role_arn.is_some() {
            config.recording_role_arn = recording.role_arn;
        }
        if recording.bucket.is_some() {
            config.recording_bucket = recording.bucket;
        }
        if recording.region.is_some() {
            config.recording_region = recording.region;
        }
    }

    if let Some(security) = yaml.security {
        if security.cors_allowed_origins.is_some() {
            config.cors_allowed_origins = security.cors_allowed_origins;
        }
        if let Some(rps) = security.rate_limit_requests_per_second {
            config.rate_limit_requests_per_second = rps;
        }
        if let Some(burst) = security.rate_limit_burst_size {
            config.rate_limit_burst_size = burst;
        }
    }

    Ok(config)
}
