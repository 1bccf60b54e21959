use async_trait::async_trait;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use url::Url;

use sfclient_types::event::ReplicaEvent;
use sfclient_types::ids::{PartitionId, ReplicaId};
use sfclient_types::json::ConversionError;

use crate::client::Client;
use crate::error::ClientError;
use crate::routes;

/// Events recorded by the EventStore service.
#[async_trait]
pub trait EventsStoreClient {
    async fn get_replica_event_list(
        &self,
        partition_id: PartitionId,
        replica_id: &ReplicaId,
        start_time_utc: OffsetDateTime,
        end_time_utc: OffsetDateTime,
    ) -> Result<Vec<ReplicaEvent>, ClientError>;
    /// Events of all replicas of the partition.
    async fn get_replicas_event_list(
        &self,
        partition_id: PartitionId,
        start_time_utc: OffsetDateTime,
        end_time_utc: OffsetDateTime,
    ) -> Result<Vec<ReplicaEvent>, ClientError>;
}

#[async_trait]
impl EventsStoreClient for Client {

    #[tracing::instrument(skip(self), level="trace")]
    async fn get_replica_event_list(
        &self,
        partition_id: PartitionId,
        replica_id: &ReplicaId,
        start_time_utc: OffsetDateTime,
        end_time_utc: OffsetDateTime,
    ) -> Result<Vec<ReplicaEvent>, ClientError> {
        let url = routes::replica_events(Clone::clone(&self.base_url), &partition_id, replica_id);
        let url = with_time_range(url, start_time_utc, end_time_utc)?;

        self.fetch(url).await
    }

    #[tracing::instrument(skip(self), level="trace")]
    async fn get_replicas_event_list(
        &self,
        partition_id: PartitionId,
        start_time_utc: OffsetDateTime,
        end_time_utc: OffsetDateTime,
    ) -> Result<Vec<ReplicaEvent>, ClientError> {
        let url = routes::replicas_events(Clone::clone(&self.base_url), &partition_id);
        let url = with_time_range(url, start_time_utc, end_time_utc)?;

        self.fetch(url).await
    }
}

fn with_time_range(mut url: Url, start_time_utc: OffsetDateTime, end_time_utc: OffsetDateTime) -> Result<Url, ConversionError> {
    let start_time_utc = format_timestamp(start_time_utc)?;
    let end_time_utc = format_timestamp(end_time_utc)?;

    url.query_pairs_mut()
        .append_pair("StartTimeUtc", &start_time_utc)
        .append_pair("EndTimeUtc", &end_time_utc);
    Ok(url)
}

fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, ConversionError> {
    timestamp.format(&Rfc3339)
        .map_err(|cause| ConversionError::InvalidValue {
            expected: "RFC 3339 date-time",
            value: timestamp.to_string(),
            cause: cause.to_string(),
        })
}
