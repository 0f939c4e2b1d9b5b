// crates/roster-daemon/src/config.rs
//
// Runtime configuration for the Roster daemon.
// Loaded from a TOML file or populated with sensible defaults; the auth
// token has no default and must be supplied.

use serde::Deserialize;
use std::fs;

/// Runtime configuration for the daemon.
#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    /// Host address for the RPC listener.
    #[serde(default = "default_rpc_host")]
    pub rpc_host: String,

    /// Port for the RPC listener.
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// Host address for the HTTP gateway.
    #[serde(default = "default_http_host")]
    pub http_host: String,

    /// Port for the HTTP gateway.
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Path to the PEM server certificate for the RPC listener.
    #[serde(default = "default_cert_path")]
    pub tls_cert_path: String,

    /// Path to the PEM private key for the RPC listener.
    #[serde(default = "default_key_path")]
    pub tls_key_path: String,

    /// Path to the PEM certificate (or issuing CA) the gateway trusts
    /// when dialing the RPC listener. Defaults to the server certificate
    /// itself, which covers the self-signed case.
    #[serde(default)]
    pub rpc_ca_path: Option<String>,

    /// Domain name the server certificate was issued for; the gateway
    /// uses it for TLS verification when dialing by IP.
    #[serde(default = "default_tls_domain")]
    pub tls_domain: String,

    /// Shared-secret bearer token the RPC listener requires on every
    /// call. Must be set; there is no default.
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_rpc_host() -> String {
    "127.0.0.1".to_string()
}

fn default_rpc_port() -> u16 {
    50051
}

fn default_http_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    8080
}

fn default_cert_path() -> String {
    "~/.roster/server-cert.pem".to_string()
}

fn default_key_path() -> String {
    "~/.roster/server-key.pem".to_string()
}

fn default_tls_domain() -> String {
    "localhost".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            rpc_host: default_rpc_host(),
            rpc_port: default_rpc_port(),
            http_host: default_http_host(),
            http_port: default_http_port(),
            tls_cert_path: default_cert_path(),
            tls_key_path: default_key_path(),
            rpc_ca_path: None,
            tls_domain: default_tls_domain(),
            auth_token: None,
            log_level: default_log_level(),
        }
    }
}

impl DaemonConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: DaemonConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// The certificate the gateway trusts when dialing the listener.
    pub fn rpc_ca_path(&self) -> &str {
        self.rpc_ca_path.as_deref().unwrap_or(&self.tls_cert_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: DaemonConfig = toml::from_str("auth_token = \"secret\"").unwrap();
        assert_eq!(config.rpc_port, 50051);
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.tls_domain, "localhost");
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_auth_token_has_no_default() {
        let config: DaemonConfig = toml::from_str("").unwrap();
        assert_eq!(config.auth_token, None);
    }

    #[test]
    fn test_ca_path_falls_back_to_server_cert() {
        let config: DaemonConfig =
            toml::from_str("tls_cert_path = \"/etc/roster/cert.pem\"").unwrap();
        assert_eq!(config.rpc_ca_path(), "/etc/roster/cert.pem");

        let config: DaemonConfig =
            toml::from_str("rpc_ca_path = \"/etc/roster/ca.pem\"").unwrap();
        assert_eq!(config.rpc_ca_path(), "/etc/roster/ca.pem");
    }
}
