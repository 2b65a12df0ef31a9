//! TLS configuration and certificate loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;

/// Load TLS configuration from certificate and key files.
pub async fn load_tls_config(cert_path: &Path, key_path: &Path) -> Result<RustlsConfig, std::io::Error> {
    if !cert_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Certificate file not found: {:?}", cert_path),
        ));
    }
    if !key_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Private key file not found: {:?}", key_path),
        ));
    }

    RustlsConfig::from_pem_file(cert_path, key_path).await
}

/// Load every certificate from a PEM bundle as a client trust root.
///
/// Fails if the file cannot be read or holds no certificate.
pub fn load_ca_certificates(path: &Path) -> Result<Vec<reqwest::Certificate>, std::io::Error> {
    let mut reader = BufReader::new(File::open(path)?);

    let mut roots = Vec::new();
    for der in rustls_pemfile::certs(&mut reader) {
        let der = der?;
        let cert = reqwest::Certificate::from_der(&der)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        roots.push(cert);
    }

    if roots.is_empty() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("No certificates found in {:?}", path),
        ));
    }

    Ok(roots)
}
