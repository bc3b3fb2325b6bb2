use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::professionals::readiness::{PolicyError, ReadinessPolicy};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub readiness: ReadinessConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            readiness: ReadinessConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Activation policy plus the data-access budget handlers impose on evaluations.
#[derive(Debug, Clone)]
pub struct ReadinessConfig {
    pub policy: ReadinessPolicy,
    pub fetch_timeout: Duration,
}

impl ReadinessConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let activation_threshold = match env::var("READINESS_ACTIVATION_THRESHOLD") {
            Ok(raw) => parse_threshold("READINESS_ACTIVATION_THRESHOLD", &raw)?,
            Err(_) => return Err(ConfigError::MissingActivationThreshold),
        };

        let mut policy = ReadinessPolicy::new(activation_threshold);

        if let Ok(raw) = env::var("READINESS_REVIEW_THRESHOLD") {
            policy.review_threshold = parse_threshold("READINESS_REVIEW_THRESHOLD", &raw)?;
        }
        if let Ok(raw) = env::var("READINESS_REQUIRE_IDENTITY_VERIFICATION") {
            policy.require_identity_verification =
                parse_flag("READINESS_REQUIRE_IDENTITY_VERIFICATION", &raw)?;
        }
        if let Ok(raw) = env::var("READINESS_REQUIRE_QUALIFICATION_VERIFICATION") {
            policy.require_qualification_verification =
                parse_flag("READINESS_REQUIRE_QUALIFICATION_VERIFICATION", &raw)?;
        }
        policy.validate().map_err(ConfigError::Policy)?;

        let fetch_timeout_ms = env::var("READINESS_FETCH_TIMEOUT_MS")
            .unwrap_or_else(|_| "2000".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        Ok(Self {
            policy,
            fetch_timeout: Duration::from_millis(fetch_timeout_ms),
        })
    }
}

fn parse_threshold(name: &'static str, raw: &str) -> Result<u8, ConfigError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|value| *value <= 100)
        .ok_or(ConfigError::InvalidThreshold { name })
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    MissingActivationThreshold,
    InvalidThreshold { name: &'static str },
    InvalidFlag { name: &'static str },
    InvalidTimeout,
    Policy(PolicyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::MissingActivationThreshold => {
                write!(f, "READINESS_ACTIVATION_THRESHOLD must be set")
            }
            ConfigError::InvalidThreshold { name } => {
                write!(f, "{name} must be an integer between 0 and 100")
            }
            ConfigError::InvalidFlag { name } => write!(f, "{name} must be true or false"),
            ConfigError::InvalidTimeout => {
                write!(f, "READINESS_FETCH_TIMEOUT_MS must be a number of milliseconds")
            }
            ConfigError::Policy(err) => write!(f, "invalid readiness policy: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::Policy(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "READINESS_ACTIVATION_THRESHOLD",
            "READINESS_REVIEW_THRESHOLD",
            "READINESS_REQUIRE_IDENTITY_VERIFICATION",
            "READINESS_REQUIRE_QUALIFICATION_VERIFICATION",
            "READINESS_FETCH_TIMEOUT_MS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_only_threshold_set() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("READINESS_ACTIVATION_THRESHOLD", "80");
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.readiness.policy.activation_threshold, 80);
        assert_eq!(config.readiness.policy.review_threshold, 80);
        assert!(config.readiness.policy.require_identity_verification);
        assert!(!config.readiness.policy.require_qualification_verification);
        assert_eq!(config.readiness.fetch_timeout, Duration::from_millis(2000));
    }

    #[test]
    fn activation_threshold_is_required() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::MissingActivationThreshold)
        ));
    }

    #[test]
    fn rejects_review_threshold_above_activation() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("READINESS_ACTIVATION_THRESHOLD", "70");
        env::set_var("READINESS_REVIEW_THRESHOLD", "90");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::Policy(PolicyError::ReviewAboveActivation { .. }))
        ));
    }

    #[test]
    fn rejects_out_of_range_threshold_and_bad_flags() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("READINESS_ACTIVATION_THRESHOLD", "101");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidThreshold { .. })
        ));

        env::set_var("READINESS_ACTIVATION_THRESHOLD", "100");
        env::set_var("READINESS_REQUIRE_IDENTITY_VERIFICATION", "maybe");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }

    #[test]
    fn reads_policy_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("READINESS_ACTIVATION_THRESHOLD", "100");
        env::set_var("READINESS_REVIEW_THRESHOLD", "60");
        env::set_var("READINESS_REQUIRE_IDENTITY_VERIFICATION", "false");
        env::set_var("READINESS_REQUIRE_QUALIFICATION_VERIFICATION", "yes");
        env::set_var("READINESS_FETCH_TIMEOUT_MS", "250");
        let config = AppConfig::load().expect("config loads");
        let policy = &config.readiness.policy;
        assert_eq!(policy.review_threshold, 60);
        assert!(!policy.require_identity_verification);
        assert!(policy.require_qualification_verification);
        assert_eq!(config.readiness.fetch_timeout, Duration::from_millis(250));
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("READINESS_ACTIVATION_THRESHOLD", "100");
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }
}
