use std::str::FromStr;

/// Read an environment variable, treating unset and blank values the same
pub(super) fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read the first non-empty variable out of `names`
pub(super) fn env_var_any(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| env_var(name))
}

/// Parse an environment variable into `T`, falling back to `default` when unset
pub(super) fn parse_env<T: FromStr>(
    name: &str,
    default: T,
) -> Result<T, Box<dyn std::error::Error>> {
    match env_var(name) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| format!("Invalid {name} value: {raw}").into()),
        None => Ok(default),
    }
}

/// Accepts the usual spellings of a boolean flag
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
