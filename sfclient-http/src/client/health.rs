use async_trait::async_trait;
use http::Method;
use tracing::debug;

use sfclient_types::health::{HealthInformation, HealthStateFilter, PartitionHealth, ReplicaHealthReportServiceKind};
use sfclient_types::ids::{NodeName, PartitionId, ReplicaId};
use sfclient_types::json::WireEnum;

use crate::client::Client;
use crate::error::ClientError;
use crate::routes;

/// Queries against and reports to the health store.
#[async_trait]
pub trait HealthClient {
    async fn get_partition_health(&self, partition_id: PartitionId, events_health_state_filter: HealthStateFilter) -> Result<PartitionHealth, ClientError>;
    /// With `immediate`, the report bypasses the batching of the gateway and is sent to the health store right away.
    async fn report_replica_health(
        &self,
        partition_id: PartitionId,
        replica_id: &ReplicaId,
        service_kind: ReplicaHealthReportServiceKind,
        information: &HealthInformation,
        immediate: bool,
    ) -> Result<(), ClientError>;
    async fn report_node_health(&self, node_name: &NodeName, information: &HealthInformation, immediate: bool) -> Result<(), ClientError>;
}

#[async_trait]
impl HealthClient for Client {

    #[tracing::instrument(skip(self), level="trace")]
    async fn get_partition_health(&self, partition_id: PartitionId, events_health_state_filter: HealthStateFilter) -> Result<PartitionHealth, ClientError> {
        let mut url = routes::partition_health(Clone::clone(&self.base_url), &partition_id);
        url.query_pairs_mut()
            .append_pair("EventsHealthStateFilter", &events_health_state_filter.0.to_string());

        self.fetch(url).await
    }

    #[tracing::instrument(skip(self, information), level="trace")]
    async fn report_replica_health(
        &self,
        partition_id: PartitionId,
        replica_id: &ReplicaId,
        service_kind: ReplicaHealthReportServiceKind,
        information: &HealthInformation,
        immediate: bool,
    ) -> Result<(), ClientError> {
        let service_kind = service_kind.to_wire()?;

        let mut url = routes::report_replica_health(Clone::clone(&self.base_url), &partition_id, replica_id);
        url.query_pairs_mut()
            .append_pair("ServiceKind", service_kind)
            .append_pair("Immediate", &immediate.to_string());

        self.send_json(Method::POST, url, information).await?;
        debug!("Reported health of replica <{replica_id}> in partition <{partition_id}>.");

        Ok(())
    }

    #[tracing::instrument(skip(self, information), level="trace")]
    async fn report_node_health(&self, node_name: &NodeName, information: &HealthInformation, immediate: bool) -> Result<(), ClientError> {
        let mut url = routes::report_node_health(Clone::clone(&self.base_url), node_name);
        url.query_pairs_mut()
            .append_pair("Immediate", &immediate.to_string());

        self.send_json(Method::POST, url, information).await?;
        debug!("Reported health of node '{node_name}'.");

        Ok(())
    }
}
