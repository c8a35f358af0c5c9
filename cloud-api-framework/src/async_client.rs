use crate::{
    endpoint::{Endpoint, ResponseFormat},
    Authenticator, NoAuthAuthenticator,
};
use bytes::Bytes;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Response, StatusCode,
};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::{
    de::{value, Visitor},
    Deserialize, Deserializer,
};
use serde_json::Value;
use std::{fmt, sync::Arc, time::Duration};
use url::Url;

const TRACE_HEADERS: [&str; 2] = ["x-correlation-id", "x-request-id"];

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {arg} - {error}")]
    InvalidArgument { arg: String, error: String },
    #[error("authentication error: {0}")]
    Authentication(String),
    #[error("error with the middleware occurred while sending request: {0:#}")]
    Middleware(anyhow::Error),
    #[error("error occurred while sending request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response deserialization failed: {0}")]
    Deserialization(#[from] serde_path_to_error::Error<serde_json::Error>),
    #[error("invalid response body: {0}")]
    InvalidResponseBody(String),
    #[error("{status_code}: {message}")]
    Api {
        status_code: StatusCode,
        message: String,
        trace: Option<String>,
    },
}

impl Error {
    /// Returns the HTTP status of an error response returned by the service.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Middleware(err) => Error::Middleware(err),
            reqwest_middleware::Error::Reqwest(err) => Error::Request(err),
        }
    }
}

/// Configuration for the API client. Allows users to customize its behaviour.
#[derive(Clone)]
pub struct HttpApiClientConfig {
    /// The maximum time limit for an API request. If a request takes longer than this, it will be
    /// cancelled.
    pub http_timeout: Duration,
    /// A default set of HTTP headers which will be sent with each API request.
    pub default_headers: HeaderMap,
    /// Middlewares that will process each API request before the request is actually sent.
    pub middlewares: Vec<Arc<dyn Middleware>>,
    pub authenticator: Arc<dyn Authenticator>,
    /// Retries of transient failures. `0` disables retries.
    pub max_retries: u32,
    /// Upper bound of the exponential backoff between retries.
    pub retry_interval: Duration,
    pub enable_gzip: bool,
}

impl Default for HttpApiClientConfig {
    fn default() -> Self {
        HttpApiClientConfig {
            http_timeout: Duration::from_secs(30),
            default_headers: HeaderMap::default(),
            middlewares: Vec::new(),
            authenticator: Arc::new(NoAuthAuthenticator),
            max_retries: 0,
            retry_interval: Duration::from_secs(30),
            enable_gzip: false,
        }
    }
}

impl fmt::Debug for HttpApiClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpApiClientConfig")
            .field("http_timeout", &self.http_timeout)
            .field("default_headers", &self.default_headers)
            .field("middlewares", &self.middlewares.len())
            .field(
                "authenticator",
                &self.authenticator.authentication_type(),
            )
            .field("max_retries", &self.max_retries)
            .field("retry_interval", &self.retry_interval)
            .field("enable_gzip", &self.enable_gzip)
            .finish()
    }
}

/// A successful response together with its status and headers.
#[derive(Clone, Debug)]
pub struct DetailedResponse<T> {
    pub status_code: StatusCode,
    pub headers: HeaderMap,
    pub result: T,
}

/// A response body kept as raw bytes. Use it as the response of
/// [`ResponseFormat::Binary`] endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawBody(pub Bytes);

impl<'de> Deserialize<'de> for RawBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawBodyVisitor;

        impl Visitor<'_> for RawBodyVisitor {
            type Value = RawBody;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("raw bytes")
            }

            fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                Ok(RawBody(Bytes::copy_from_slice(v)))
            }

            fn visit_byte_buf<E: serde::de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
                Ok(RawBody(Bytes::from(v)))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(RawBody(Bytes::copy_from_slice(v.as_bytes())))
            }
        }

        deserializer.deserialize_bytes(RawBodyVisitor)
    }
}

#[derive(Clone)]
pub struct HttpApiClient {
    base_url: Url,
    http_client: ClientWithMiddleware,
    config: HttpApiClientConfig,
}

impl HttpApiClient {
    pub fn new(base_url: Url, config: HttpApiClientConfig) -> Result<Self, Error> {
        let http_client = build_http_client(&config)?;
        Ok(Self {
            base_url,
            http_client,
            config,
        })
    }

    pub fn service_url(&self) -> &Url {
        &self.base_url
    }

    pub fn set_service_url(&mut self, base_url: Url) {
        self.base_url = base_url;
    }

    /// Retries transient failures (connection errors, 5xx, 429) with exponential
    /// backoff bounded by `max_interval`.
    pub fn enable_retries(
        &mut self,
        max_retries: u32,
        max_interval: Duration,
    ) -> Result<(), Error> {
        self.config.max_retries = max_retries;
        self.config.retry_interval = max_interval;
        self.rebuild()
    }

    pub fn disable_retries(&mut self) -> Result<(), Error> {
        self.config.max_retries = 0;
        self.rebuild()
    }

    pub fn set_enable_gzip(&mut self, enable_gzip: bool) -> Result<(), Error> {
        self.config.enable_gzip = enable_gzip;
        self.rebuild()
    }

    pub fn is_gzip_enabled(&self) -> bool {
        self.config.enable_gzip
    }

    pub fn config(&self) -> &HttpApiClientConfig {
        &self.config
    }

    pub async fn request<EndpointType: Endpoint>(
        &self,
        endpoint: &EndpointType,
    ) -> Result<<EndpointType as Endpoint>::Response, Error> {
        self.request_detailed(endpoint)
            .await
            .map(|response| response.result)
    }

    pub async fn request_detailed<EndpointType: Endpoint>(
        &self,
        endpoint: &EndpointType,
    ) -> Result<DetailedResponse<<EndpointType as Endpoint>::Response>, Error> {
        endpoint.validate()?;

        let method = endpoint.method();
        let url = endpoint.url(&self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value("Accept", &endpoint.accept())?);
        if let Some(endpoint_headers) = endpoint.headers() {
            headers.extend(endpoint_headers);
        }
        let body = endpoint.body();
        if body.is_some() {
            headers.insert(
                CONTENT_TYPE,
                header_value("Content-Type", &endpoint.content_type())?,
            );
        }
        self.config.authenticator.authenticate(&mut headers).await?;

        tracing::debug!(%method, %url, "sending request");
        let mut request = self.http_client.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }
        let response = request.send().await?;

        process_api_response(response, endpoint.response_format()).await
    }

    fn rebuild(&mut self) -> Result<(), Error> {
        self.http_client = build_http_client(&self.config)?;
        Ok(())
    }
}

fn build_http_client(config: &HttpApiClientConfig) -> Result<ClientWithMiddleware, Error> {
    let reqwest_client = reqwest::Client::builder()
        .default_headers(config.default_headers.clone())
        .timeout(config.http_timeout)
        .gzip(config.enable_gzip)
        .build()?;

    let mut client_builder = ClientBuilder::new(reqwest_client);
    for middleware in &config.middlewares {
        client_builder = client_builder.with_arc(middleware.clone());
    }
    if config.max_retries > 0 {
        let min_interval = Duration::from_secs(1).min(config.retry_interval);
        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(min_interval, config.retry_interval)
            .build_with_max_retries(config.max_retries);
        client_builder =
            client_builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
    }
    Ok(client_builder.build())
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|err| Error::InvalidArgument {
        arg: name.to_string(),
        error: err.to_string(),
    })
}

async fn process_api_response<T: for<'a> Deserialize<'a>>(
    response: Response,
    format: ResponseFormat,
) -> Result<DetailedResponse<T>, Error> {
    let status_code = response.status();
    let headers = response.headers().clone();
    let raw_value = response.bytes().await?;

    if !status_code.is_success() {
        let err = api_error(status_code, &headers, &raw_value);
        tracing::warn!(%status_code, err = %err, "request failed");
        return Err(err);
    }

    let result = decode_body(&raw_value, format)?;
    Ok(DetailedResponse {
        status_code,
        headers,
        result,
    })
}

fn decode_body<T: for<'a> Deserialize<'a>>(
    raw_value: &[u8],
    format: ResponseFormat,
) -> Result<T, Error> {
    match format {
        ResponseFormat::Json => {
            let raw_value = if raw_value.iter().all(u8::is_ascii_whitespace) {
                b"null".as_slice()
            } else {
                raw_value
            };
            let deserializer = &mut serde_json::Deserializer::from_slice(raw_value);
            serde_path_to_error::deserialize(deserializer).map_err(|err| {
                tracing::debug!(path = %err.path(), "cannot deserialize response");
                Error::from(err)
            })
        }
        ResponseFormat::Text => {
            let text = std::str::from_utf8(raw_value)
                .map_err(|err| Error::InvalidResponseBody(err.to_string()))?;
            T::deserialize(value::StrDeserializer::<value::Error>::new(text))
                .map_err(|err| Error::InvalidResponseBody(err.to_string()))
        }
        ResponseFormat::Binary => {
            T::deserialize(value::BytesDeserializer::<value::Error>::new(raw_value))
                .map_err(|err| Error::InvalidResponseBody(err.to_string()))
        }
    }
}

fn api_error(status_code: StatusCode, headers: &HeaderMap, body: &[u8]) -> Error {
    let json = serde_json::from_slice::<Value>(body).ok();

    let message = match &json {
        Some(json) => error_message(json),
        None => Some(String::from_utf8_lossy(body).trim().to_string()).filter(|s| !s.is_empty()),
    }
    .unwrap_or_else(|| {
        status_code
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    });

    let trace = json
        .as_ref()
        .and_then(|json| json.get("trace"))
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
        .or_else(|| {
            TRACE_HEADERS.iter().find_map(|name| {
                headers
                    .get(*name)
                    .and_then(|value| value.to_str().ok())
                    .map(ToOwned::to_owned)
            })
        });

    Error::Api {
        status_code,
        message,
        trace,
    }
}

fn error_message(json: &Value) -> Option<String> {
    json.get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
        .or_else(|| json.get("error").and_then(Value::as_str))
        .or_else(|| json.get("message").and_then(Value::as_str))
        .or_else(|| json.get("errorMessage").and_then(Value::as_str))
        .map(ToOwned::to_owned)
}
