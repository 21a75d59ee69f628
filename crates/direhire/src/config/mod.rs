use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::i18n::Locale;
use crate::listing::{ListingSettings, PriceBounds, DEFAULT_PAGE_SIZE};

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

/// Top-level configuration for the storefront service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub listing: ListingSettings,
    pub default_locale: Locale,
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("DIREHIRE_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("DIREHIRE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("DIREHIRE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("DIREHIRE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let page_size = match env::var("DIREHIRE_PAGE_SIZE") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidPageSize { value: raw })?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let floor = price_var("DIREHIRE_PRICE_FLOOR", PriceBounds::DEFAULT_FLOOR)?;
        let ceiling = price_var("DIREHIRE_PRICE_CEILING", PriceBounds::DEFAULT_CEILING)?;
        if floor > ceiling {
            return Err(ConfigError::InvertedPriceBounds { floor, ceiling });
        }

        let default_locale = match env::var("DIREHIRE_DEFAULT_LOCALE") {
            Ok(raw) => Locale::parse(&raw).ok_or(ConfigError::InvalidLocale { value: raw })?,
            Err(_) => Locale::default(),
        };

        let catalog_path = env::var("DIREHIRE_CATALOG_PATH")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            listing: ListingSettings {
                page_size,
                price_bounds: PriceBounds::new(floor, ceiling),
            },
            default_locale,
            catalog_path,
        })
    }
}

fn price_var(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidPrice { name, value: raw }),
        Err(_) => Ok(default),
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPageSize { value: String },
    InvalidPrice { name: &'static str, value: String },
    InvertedPriceBounds { floor: u32, ceiling: u32 },
    InvalidLocale { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "DIREHIRE_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "DIREHIRE_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPageSize { value } => {
                write!(f, "DIREHIRE_PAGE_SIZE must be a positive integer (got '{value}')")
            }
            ConfigError::InvalidPrice { name, value } => {
                write!(f, "{name} must be a non-negative integer (got '{value}')")
            }
            ConfigError::InvertedPriceBounds { floor, ceiling } => write!(
                f,
                "DIREHIRE_PRICE_FLOOR ({floor}) must not exceed DIREHIRE_PRICE_CEILING ({ceiling})"
            ),
            ConfigError::InvalidLocale { value } => {
                write!(f, "DIREHIRE_DEFAULT_LOCALE must be 'hi' or 'en' (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidPageSize { .. }
            | ConfigError::InvalidPrice { .. }
            | ConfigError::InvertedPriceBounds { .. }
            | ConfigError::InvalidLocale { .. } => None,
        }
    }
}
