//! Client for the IBM Cloud Catalog Management v1 API.
//!
//! Every API operation is a request struct in [`endpoints`] sent through a [`Client`]:
//!
//! ```no_run
//! use catalog_management_v1::{endpoints::GetCatalog, Client, Config};
//!
//! # async fn run() -> Result<(), catalog_management_v1::Error> {
//! let config = Config::build()?;
//! let client = Client::new(config).await?;
//! let catalog = client
//!     .request(&GetCatalog {
//!         catalog_identifier: "my-catalog".to_string(),
//!     })
//!     .await?;
//! println!("{:?}", catalog.label);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;

pub mod endpoints;
pub mod models;
pub mod pagination;

pub use client::{Client, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL};
pub use crate::config::{Config, ENV_PREFIX};
pub use error::Error;
pub use pagination::Pager;

pub use cloud_api_framework::{
    Authenticator, BasicAuthenticator, BearerTokenAuthenticator, DetailedResponse, Endpoint,
    NoAuthAuthenticator, RawBody,
};
