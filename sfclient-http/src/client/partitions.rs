use async_trait::async_trait;

use sfclient_types::ids::{PartitionId, ServiceId};
use sfclient_types::partition::UnplacedReplicaInformation;

use crate::client::Client;
use crate::error::ClientError;
use crate::routes;

#[async_trait]
pub trait PartitionsClient {
    /// Explains why replicas of the service could not be placed. Without a `partition_id`,
    /// all partitions of the service are queried.
    async fn get_unplaced_replica_information(
        &self,
        service_id: &ServiceId,
        partition_id: Option<PartitionId>,
        only_query_primaries: bool,
    ) -> Result<UnplacedReplicaInformation, ClientError>;
}

#[async_trait]
impl PartitionsClient for Client {

    #[tracing::instrument(skip(self), level="trace")]
    async fn get_unplaced_replica_information(
        &self,
        service_id: &ServiceId,
        partition_id: Option<PartitionId>,
        only_query_primaries: bool,
    ) -> Result<UnplacedReplicaInformation, ClientError> {
        let mut url = routes::unplaced_replica_information(Clone::clone(&self.base_url), service_id);
        {
            let mut query = url.query_pairs_mut();
            if let Some(partition_id) = partition_id {
                query.append_pair("PartitionId", &partition_id.to_string());
            }
            query.append_pair("OnlyQueryPrimaries", &only_query_primaries.to_string());
        }

        self.fetch(url).await
    }
}
