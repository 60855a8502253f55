use shared_types::{AppConfig, FeatureFlags};
use std::fmt;
use std::sync::OnceLock;
use std::time::Duration;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();
static ENV: OnceLock<EnvConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Environment variables that must hold absolute http(s) URLs before the
/// server may start.
pub const REQUIRED_URL_VARS: [&str; 7] = [
    "BACKEND_URL",
    "FRONTEND_URL",
    "API_URL",
    "AUTH_URL",
    "INTERNAL_API_URL",
    "NEXT_PUBLIC_API_URL",
    "NEXT_PUBLIC_AUTH_CLIENT",
];

const TIMEOUT_VAR: &str = "UPSTREAM_TIMEOUT_SECS";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Read `config.toml`, parse feature flags, and store them in the global
/// `OnceLock`. Only the first call has effect.
///
/// If the file is missing or unparseable, all flags default to `false`.
pub fn load_feature_flags() {
    FLAGS.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config: AppConfig = toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(error = %e, path = CONFIG_PATH, "Failed to parse config, all flags off");
                AppConfig::default()
            });
            tracing::info!(flags = ?config.features, "Feature flags loaded");
            config.features
        }
        Err(e) => {
            tracing::info!(error = %e, path = CONFIG_PATH, "No config file, all flags off");
            FeatureFlags::default()
        }
    });
}

/// Get the loaded feature flags. All-false until `load_feature_flags()` runs.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        telemetry: false,
        auth_proxy: false,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}

/// Validated upstream locations. Trailing slashes are stripped from every URL.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    pub backend_url: String,
    pub frontend_url: String,
    pub api_url: String,
    pub auth_url: String,
    /// Backend base used for server-side calls.
    pub internal_api_url: String,
    pub public_api_url: String,
    pub public_auth_client: String,
    pub upstream_timeout: Duration,
}

/// Every problem found while validating the environment, reported together.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub problems: Vec<String>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid environment: {}", self.problems.join("; "))
    }
}

impl std::error::Error for ConfigError {}

impl EnvConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut problems = Vec::new();
        let mut urls = Vec::with_capacity(REQUIRED_URL_VARS.len());

        for name in REQUIRED_URL_VARS {
            match lookup(name) {
                None => problems.push(format!("{name} is not set")),
                Some(raw) => match validate_url(&raw) {
                    Ok(url) => urls.push(url),
                    Err(reason) => problems.push(format!("{name} {reason}")),
                },
            }
        }

        let upstream_timeout = match lookup(TIMEOUT_VAR) {
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    problems.push(format!("{TIMEOUT_VAR} must be a positive integer, got {raw:?}"));
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
                }
            },
        };

        if !problems.is_empty() {
            return Err(ConfigError { problems });
        }

        let [backend_url, frontend_url, api_url, auth_url, internal_api_url, public_api_url, public_auth_client]: [String; 7] =
            urls.try_into().map_err(|_| ConfigError {
                problems: vec!["environment validation lost a variable".to_string()],
            })?;

        Ok(Self {
            backend_url,
            frontend_url,
            api_url,
            auth_url,
            internal_api_url,
            public_api_url,
            public_auth_client,
            upstream_timeout,
        })
    }
}

fn validate_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("is empty".to_string());
    }
    let url = reqwest::Url::parse(trimmed).map_err(|e| format!("is not a valid URL ({e})"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("must use http or https, got {}", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("has no host".to_string());
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Load `.env` if present. A missing file is normal in deployed
/// environments; any other problem is logged and startup continues with the
/// process environment.
pub fn load_dotenv() {
    if let Some(problem) = dotenv_problem(dotenvy::dotenv()) {
        tracing::warn!(error = %problem, "Ignoring unreadable .env file");
    }
}

fn dotenv_problem<T>(result: Result<T, dotenvy::Error>) -> Option<dotenvy::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}

/// Load `.env`, validate the environment, and keep the result for the
/// process lifetime. Callers must abort startup on `Err`.
pub fn load_env_config() -> Result<&'static EnvConfig, ConfigError> {
    if let Some(config) = ENV.get() {
        return Ok(config);
    }
    load_dotenv();
    let config = EnvConfig::from_env()?;
    Ok(ENV.get_or_init(|| config))
}
