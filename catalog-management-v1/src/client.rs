use crate::{
    config::Config,
    endpoints::GetCatalogAccount,
    pagination::{Paginated, PaginatedEndpoint, Pager},
    Error,
};
use cloud_api_framework::{DetailedResponse, Endpoint, HttpApiClient};
use std::time::Duration;
use url::Url;

pub const DEFAULT_SERVICE_URL: &str = "https://cm.globalcatalog.cloud.ibm.com/api/v1-beta";
pub const DEFAULT_SERVICE_NAME: &str = "catalog_management";

#[derive(Clone)]
pub struct Client {
    http_client: HttpApiClient,
}

impl Client {
    pub async fn new(config: Config) -> Result<Self, Error> {
        let http_client_config = config.http_client_config()?;
        let http_client = HttpApiClient::new(config.url, http_client_config)?;

        let client = Self { http_client };

        if config.probe_url {
            client
                .request(&GetCatalogAccount::default())
                .await
                .inspect_err(|err| {
                    tracing::error!(
                        url = %client.service_url(),
                        err = %err,
                        "cannot establish a connection with the catalog management service"
                    )
                })?;
        }

        Ok(client)
    }

    pub fn from_http_client(http_client: HttpApiClient) -> Self {
        Self { http_client }
    }

    pub async fn request<EndpointType: Endpoint>(
        &self,
        endpoint: &EndpointType,
    ) -> Result<<EndpointType as Endpoint>::Response, Error> {
        Ok(self.http_client.request(endpoint).await?)
    }

    pub async fn request_detailed<EndpointType: Endpoint>(
        &self,
        endpoint: &EndpointType,
    ) -> Result<DetailedResponse<<EndpointType as Endpoint>::Response>, Error> {
        Ok(self.http_client.request_detailed(endpoint).await?)
    }

    /// Walks a paginated list endpoint page by page.
    pub fn pager<EndpointType>(&self, endpoint: EndpointType) -> Result<Pager<EndpointType>, Error>
    where
        EndpointType: PaginatedEndpoint,
        EndpointType::Response: Paginated,
    {
        Pager::new(self.clone(), endpoint)
    }

    pub fn service_url(&self) -> &Url {
        self.http_client.service_url()
    }

    pub fn set_service_url(&mut self, url: Url) {
        self.http_client.set_service_url(url)
    }

    pub fn enable_retries(
        &mut self,
        max_retries: u32,
        max_interval: Duration,
    ) -> Result<(), Error> {
        Ok(self.http_client.enable_retries(max_retries, max_interval)?)
    }

    pub fn disable_retries(&mut self) -> Result<(), Error> {
        Ok(self.http_client.disable_retries()?)
    }

    pub fn set_enable_gzip(&mut self, enable_gzip: bool) -> Result<(), Error> {
        Ok(self.http_client.set_enable_gzip(enable_gzip)?)
    }

    pub fn http_client(&self) -> &HttpApiClient {
        &self.http_client
    }
}
