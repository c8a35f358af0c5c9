//! Base service layer shared by the typed REST API clients: request assembly,
//! authentication, retries, gzip and response decoding.

mod async_client;
mod authenticator;
mod endpoint;

pub use async_client::{DetailedResponse, Error, HttpApiClient, HttpApiClientConfig, RawBody};
pub use authenticator::{
    Authenticator, BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator,
};
pub use endpoint::{
    encode_path_segment, require_non_empty, serialize_body, serialize_query, Endpoint,
    ResponseFormat,
};

pub use reqwest;
