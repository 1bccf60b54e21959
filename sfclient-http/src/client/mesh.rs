use async_trait::async_trait;
use http::Method;
use tracing::debug;

use sfclient_types::mesh::{NetworkResourceDescription, ServiceResourceDescription};
use sfclient_types::paged::PagedData;

use crate::client::{read_optional_json, Client};
use crate::error::ClientError;
use crate::routes;

/// Network resources of the mesh resource model.
#[async_trait]
pub trait MeshNetworksClient {
    /// Returns the stored network, or `None` when the cluster accepted the request without a body.
    async fn create_or_update_network(&self, network_name: &str, description: &NetworkResourceDescription) -> Result<Option<NetworkResourceDescription>, ClientError>;
    async fn get_network(&self, network_name: &str) -> Result<NetworkResourceDescription, ClientError>;
    async fn delete_network(&self, network_name: &str) -> Result<(), ClientError>;
    async fn list_networks(&self) -> Result<PagedData<NetworkResourceDescription>, ClientError>;
}

/// Services of a mesh application.
#[async_trait]
pub trait MeshServicesClient {
    async fn get_service(&self, application_name: &str, service_name: &str) -> Result<ServiceResourceDescription, ClientError>;
    async fn list_services(&self, application_name: &str) -> Result<PagedData<ServiceResourceDescription>, ClientError>;
}

#[async_trait]
impl MeshNetworksClient for Client {

    #[tracing::instrument(skip(self, description), level="trace")]
    async fn create_or_update_network(&self, network_name: &str, description: &NetworkResourceDescription) -> Result<Option<NetworkResourceDescription>, ClientError> {
        let url = routes::network(Clone::clone(&self.base_url), network_name);

        let response = self.send_json(Method::PUT, url, description).await?;
        let status = response.status();

        let result = read_optional_json(response).await?;
        debug!("Network '{network_name}' was stored with status code '{status}'.");

        Ok(result)
    }

    #[tracing::instrument(skip(self), level="trace")]
    async fn get_network(&self, network_name: &str) -> Result<NetworkResourceDescription, ClientError> {
        let url = routes::network(Clone::clone(&self.base_url), network_name);

        self.fetch(url).await
    }

    #[tracing::instrument(skip(self), level="trace")]
    async fn delete_network(&self, network_name: &str) -> Result<(), ClientError> {
        let url = routes::network(Clone::clone(&self.base_url), network_name);

        let request = reqwest::Request::new(Method::DELETE, url);

        self.execute(request).await?;
        debug!("Deleted network '{network_name}'.");

        Ok(())
    }

    #[tracing::instrument(skip(self), level="trace")]
    async fn list_networks(&self) -> Result<PagedData<NetworkResourceDescription>, ClientError> {
        let url = routes::networks(Clone::clone(&self.base_url));

        self.fetch(url).await
    }
}

#[async_trait]
impl MeshServicesClient for Client {

    #[tracing::instrument(skip(self), level="trace")]
    async fn get_service(&self, application_name: &str, service_name: &str) -> Result<ServiceResourceDescription, ClientError> {
        let url = routes::service(Clone::clone(&self.base_url), application_name, service_name);

        self.fetch(url).await
    }

    #[tracing::instrument(skip(self), level="trace")]
    async fn list_services(&self, application_name: &str) -> Result<PagedData<ServiceResourceDescription>, ClientError> {
        let url = routes::services(Clone::clone(&self.base_url), application_name);

        self.fetch(url).await
    }
}
