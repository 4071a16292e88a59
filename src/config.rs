use std::net::IpAddr;

use clap::Parser;

/// Startup configuration.
///
/// All three values are required; a missing or malformed one is fatal
/// before the listener is ever created. The parsed config is immutable for
/// the lifetime of the process and shared read-only with every connection.
#[derive(Debug, Clone, Parser)]
#[command(name = "minihttpd")]
#[command(about = "Minimal single-request-per-connection HTTP file server")]
#[command(version)]
pub struct Config {
    /// IP address to bind
    #[arg(short = 'H', long, env = "MINIHTTPD_HOST")]
    pub host: IpAddr,

    /// TCP port to bind (1-65535)
    #[arg(short, long, env = "MINIHTTPD_PORT")]
    pub port: u16,

    /// Directory served files are resolved under
    #[arg(short, long = "dir", env = "MINIHTTPD_DIR")]
    pub directory: String,

    /// Stay attached to the terminal instead of detaching
    #[arg(long)]
    pub foreground: bool,
}

impl Config {
    /// Parses CLI arguments (with env fallbacks), validates them and
    /// normalizes the root directory.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = Config::parse();
        cfg.validate().map_err(anyhow::Error::msg)?;
        cfg.directory = normalize_root(cfg.directory);
        Ok(cfg)
    }

    /// Bind endpoint in `host:port` form.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Checks the values clap's type parsing alone cannot reject.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Invalid port: 0".to_string());
        }
        if self.directory.is_empty() {
            return Err("Root directory must not be empty".to_string());
        }
        Ok(())
    }
}

/// Appends the separator request paths are joined onto, once.
fn normalize_root(dir: String) -> String {
    if dir.ends_with('/') { dir } else { dir + "/" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(port: u16, dir: &str) -> Config {
        Config {
            host: "127.0.0.1".parse().unwrap(),
            port,
            directory: dir.to_string(),
            foreground: true,
        }
    }

    #[test]
    fn normalize_appends_separator() {
        assert_eq!(normalize_root("/srv/www".to_string()), "/srv/www/");
    }

    #[test]
    fn normalize_does_not_double_separator() {
        assert_eq!(normalize_root("/srv/www/".to_string()), "/srv/www/");
    }

    #[test]
    fn endpoint_joins_host_and_port() {
        assert_eq!(config(8080, "/srv/www").endpoint(), "127.0.0.1:8080");
    }

    #[test]
    fn validate_rejects_port_zero() {
        assert!(config(0, "/srv/www").validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_directory() {
        assert!(config(8080, "").validate().is_err());
    }

    #[test]
    fn validate_accepts_usual_values() {
        assert!(config(8080, "/srv/www").validate().is_ok());
    }
}
