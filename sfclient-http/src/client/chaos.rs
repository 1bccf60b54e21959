use async_trait::async_trait;

use sfclient_types::chaos::Chaos;

use crate::client::Client;
use crate::error::ClientError;
use crate::routes;

#[async_trait]
pub trait ChaosClient {
    async fn get_chaos(&self) -> Result<Chaos, ClientError>;
}

#[async_trait]
impl ChaosClient for Client {

    #[tracing::instrument(skip(self), level="trace")]
    async fn get_chaos(&self) -> Result<Chaos, ClientError> {
        let url = routes::chaos(Clone::clone(&self.base_url));

        self.fetch(url).await
    }
}
