use std::path::PathBuf;

use super::utils::{env_var, env_var_any, parse_bool, parse_env};
use super::{DEFAULT_CALLS_TABLE, ServerConfig, TlsConfig};

/// Build a configuration from the process environment plus defaults.
///
/// The Supabase credentials are read under the public names used by the web
/// frontend first, then under the plain server-side names.
pub(super) fn load_from_env() -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let host = env_var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
    let port = parse_env::<u16>("PORT", 3001)?;

    let tls_enabled = match env_var("TLS_ENABLED") {
        Some(raw) => parse_bool(&raw).ok_or_else(|| format!("Invalid TLS_ENABLED value: {raw}"))?,
        None => false,
    };
    let tls = if tls_enabled {
        let cert_path = env_var("TLS_CERT_PATH")
            .ok_or("TLS_ENABLED is true but TLS_CERT_PATH is not set")?;
        let key_path =
            env_var("TLS_KEY_PATH").ok_or("TLS_ENABLED is true but TLS_KEY_PATH is not set")?;
        Some(TlsConfig {
            cert_path: PathBuf::from(cert_path),
            key_path: PathBuf::from(key_path),
        })
    } else {
        None
    };

    Ok(ServerConfig {
        host,
        port,
        tls,
        supabase_url: env_var_any(&["NEXT_PUBLIC_SUPABASE_URL", "SUPABASE_URL"]),
        supabase_key: env_var_any(&["NEXT_PUBLIC_SUPABASE_ANON_KEY", "SUPABASE_KEY"]),
        calls_table: env_var("SUPABASE_CALLS_TABLE")
            .unwrap_or_else(|| DEFAULT_CALLS_TABLE.to_string()),
        store_timeout_seconds: parse_env::<u64>("SUPABASE_TIMEOUT_SECONDS", 10)?,
        recording_role_arn: env_var("AWS_ROLE"),
        recording_bucket: env_var("S3_BUCKET"),
        recording_region: env_var("BUCKET_REGION"),
        cors_allowed_origins: env_var("CORS_ALLOWED_ORIGINS"),
        rate_limit_requests_per_second: parse_env::<u32>("RATE_LIMIT_REQUESTS_PER_SECOND", 60)?,
        rate_limit_burst_size: parse_env::<u32>("RATE_LIMIT_BURST_SIZE", 10)?,
    })
}
