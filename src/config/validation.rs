use super::TlsConfig;

/// Validate that the configured TLS certificate and key files exist
pub(super) fn validate_tls(tls: &Option<TlsConfig>) -> Result<(), Box<dyn std::error::Error>> {
    let Some(tls) = tls else {
        return Ok(());
    };

    if !tls.cert_path.exists() {
        return Err(format!(
            "TLS certificate file not found: {}",
            tls.cert_path.display()
        )
        .into());
    }
    if !tls.key_path.exists() {
        return Err(format!("TLS key file not found: {}", tls.key_path.display()).into());
    }

    Ok(())
}
