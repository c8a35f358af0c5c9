use crate::{Error, DEFAULT_SERVICE_URL};
use cloud_api_framework::{
    reqwest::header::{HeaderMap, HeaderName, HeaderValue},
    Authenticator, BearerTokenAuthenticator, HttpApiClientConfig, NoAuthAuthenticator,
};
use reqwest_middleware::Middleware;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::{collections::BTreeMap, fmt, fmt::Formatter, sync::Arc, time::Duration};

/// Prefix of the environment variables read by [`Config::build`].
pub const ENV_PREFIX: &str = "CATALOG_MANAGEMENT";

#[serde_as]
#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::url")]
    pub url: url::Url,
    /// Static IAM bearer token. Requests are sent unauthenticated when not set.
    #[serde(default)]
    pub bearer_token: Option<String>,
    /// The maximum time limit for an API request. If a request takes longer than this, it will be
    /// cancelled. Defaults to 30 seconds.
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "defaults::http_timeout")]
    pub http_timeout: Duration,
    /// Retries of transient failures. `0` disables retries.
    #[serde(default)]
    pub max_retries: u32,
    /// Upper bound of the backoff between retries.
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "defaults::retry_interval")]
    pub retry_interval: Duration,
    #[serde(default)]
    pub enable_gzip: bool,
    #[serde(default)]
    pub probe_url: bool,
    /// Headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(skip_deserializing)]
    pub middlewares: Vec<Arc<dyn Middleware>>,
}

// We have to derive `Debug` manually as we need to skip middlewares field which does not implement it.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct ConfigDebug<'a> {
            url: &'a url::Url,
            bearer_token: Option<&'static str>,
            http_timeout: &'a Duration,
            max_retries: &'a u32,
            retry_interval: &'a Duration,
            enable_gzip: &'a bool,
            probe_url: &'a bool,
            headers: &'a BTreeMap<String, String>,
        }
        let Config {
            url,
            bearer_token,
            http_timeout,
            max_retries,
            retry_interval,
            enable_gzip,
            probe_url,
            headers,
            middlewares: _,
        } = self;
        fmt::Debug::fmt(
            &ConfigDebug {
                url,
                bearer_token: bearer_token.as_ref().map(|_| "<redacted>"),
                http_timeout,
                max_retries,
                retry_interval,
                enable_gzip,
                probe_url,
                headers,
            },
            f,
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(defaults::url())
    }
}

impl Config {
    pub fn new(url: url::Url) -> Self {
        Self {
            url,
            bearer_token: None,
            http_timeout: defaults::http_timeout(),
            max_retries: 0,
            retry_interval: defaults::retry_interval(),
            enable_gzip: false,
            probe_url: false,
            headers: BTreeMap::new(),
            middlewares: vec![],
        }
    }

    /// Loads the config from the file named by `CATALOG_MANAGEMENT__CONFIG` (if any),
    /// overridden by `CATALOG_MANAGEMENT__*` environment variables.
    pub fn build() -> Result<Self, Error> {
        let config_path_name = format!("{ENV_PREFIX}__CONFIG");

        let mut builder = config::Config::builder();
        if let Ok(config_path) = std::env::var(&config_path_name) {
            builder = builder.add_source(config::File::with_name(&config_path));
        };
        // Use `__` so that it would be possible to address keys with underscores in names (e.g. `bearer_token`)
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .ignore_empty(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    pub fn with_retries(mut self, max_retries: u32, retry_interval: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_interval = retry_interval;
        self
    }

    pub fn with_middleware<M: Middleware>(self, middleware: M) -> Self {
        self.with_arc_middleware(Arc::new(middleware))
    }

    pub fn with_arc_middleware<M: Middleware>(mut self, middleware: Arc<M>) -> Self {
        self.middlewares.push(middleware);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn probe_url(mut self, value: bool) -> Self {
        self.probe_url = value;
        self
    }

    pub fn bearer_token(mut self, bearer_token: Option<String>) -> Self {
        self.bearer_token = bearer_token;
        self
    }

    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn enable_gzip(mut self, value: bool) -> Self {
        self.enable_gzip = value;
        self
    }

    /// Settings of the underlying http client.
    pub fn http_client_config(&self) -> Result<HttpApiClientConfig, Error> {
        let authenticator: Arc<dyn Authenticator> = match &self.bearer_token {
            Some(token) => Arc::new(BearerTokenAuthenticator::new(token)?),
            None => Arc::new(NoAuthAuthenticator),
        };

        Ok(HttpApiClientConfig {
            http_timeout: self.http_timeout,
            default_headers: header_map(&self.headers)?,
            middlewares: self.middlewares.clone(),
            authenticator,
            max_retries: self.max_retries,
            retry_interval: self.retry_interval,
            enable_gzip: self.enable_gzip,
        })
    }
}

fn header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, Error> {
    let invalid_header = |name: &str, err: &dyn fmt::Display| {
        Error::from(cloud_api_framework::Error::InvalidArgument {
            arg: format!("headers.{name}"),
            error: err.to_string(),
        })
    };

    let mut header_map = HeaderMap::new();
    for (name, value) in headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|err| invalid_header(name, &err))?;
        let header_value = HeaderValue::from_str(value).map_err(|err| invalid_header(name, &err))?;
        header_map.insert(header_name, header_value);
    }
    Ok(header_map)
}

mod defaults {
    use std::time::Duration;

    pub fn url() -> url::Url {
        url::Url::parse(super::DEFAULT_SERVICE_URL).expect("default service url is valid")
    }

    pub fn http_timeout() -> Duration {
        Duration::from_secs(30)
    }

    pub fn retry_interval() -> Duration {
        Duration::from_secs(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(config.url.as_str(), DEFAULT_SERVICE_URL);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.retry_interval, Duration::from_secs(30));
        assert_eq!(config.max_retries, 0);
        assert!(config.bearer_token.is_none());
        assert!(!config.enable_gzip);
    }

    #[test]
    fn deserialize_durations_in_seconds() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "url": "http://localhost:8080/api/v1-beta",
            "http_timeout": 5,
            "max_retries": 3,
            "retry_interval": 2,
            "headers": {"x-custom": "value"}
        }))
        .unwrap();
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.retry_interval, Duration::from_secs(2));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.headers.get("x-custom").map(String::as_str), Some("value"));
    }

    #[test]
    fn build_reads_environment() {
        std::env::set_var("CATALOG_MANAGEMENT__HTTP_TIMEOUT", "7");
        std::env::set_var("CATALOG_MANAGEMENT__PROBE_URL", "true");
        let config = Config::build().unwrap();
        std::env::remove_var("CATALOG_MANAGEMENT__HTTP_TIMEOUT");
        std::env::remove_var("CATALOG_MANAGEMENT__PROBE_URL");

        assert_eq!(config.http_timeout, Duration::from_secs(7));
        assert!(config.probe_url);
        assert_eq!(config.url.as_str(), DEFAULT_SERVICE_URL);
    }

    #[test]
    fn debug_hides_bearer_token() {
        let config = Config::default().bearer_token(Some("secret-token".to_string()));
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn http_client_config_from_config() {
        let config = Config::default()
            .bearer_token(Some("token".to_string()))
            .with_header("x-custom", "value")
            .with_retries(2, Duration::from_secs(1))
            .enable_gzip(true);
        let http_config = config.http_client_config().unwrap();
        assert_eq!(http_config.authenticator.authentication_type(), "bearerToken");
        assert_eq!(http_config.default_headers["x-custom"], "value");
        assert_eq!(http_config.max_retries, 2);
        assert_eq!(http_config.retry_interval, Duration::from_secs(1));
        assert!(http_config.enable_gzip);
    }

    #[test]
    fn invalid_header_is_rejected() {
        let config = Config::default().with_header("bad header", "value");
        assert!(config.http_client_config().is_err());
    }

    #[test]
    fn empty_bearer_token_is_rejected() {
        let config = Config::default().bearer_token(Some(String::new()));
        assert!(config.http_client_config().is_err());
    }
}
