use async_trait::async_trait;
use http::Method;
use reqwest::Request;
use tracing::debug;
use uuid::Uuid;

use sfclient_types::ids::{NodeInstanceId, NodeName};
use sfclient_types::json::WireEnum;
use sfclient_types::node::{NodeTransitionProgress, NodeTransitionType, RestartNodeDescription};

use crate::client::Client;
use crate::error::ClientError;
use crate::routes;

/// Fault operations on cluster nodes.
#[async_trait]
pub trait NodesClient {
    async fn restart_node(&self, node_name: &NodeName, description: &RestartNodeDescription) -> Result<(), ClientError>;
    /// Starts or stops a node. Progress is tracked with [`NodesClient::get_node_transition_progress`] under the given `operation_id`.
    async fn start_node_transition(
        &self,
        node_name: &NodeName,
        operation_id: Uuid,
        transition_type: NodeTransitionType,
        node_instance_id: &NodeInstanceId,
        stop_duration_in_seconds: i32,
    ) -> Result<(), ClientError>;
    async fn get_node_transition_progress(&self, node_name: &NodeName, operation_id: Uuid) -> Result<NodeTransitionProgress, ClientError>;
}

#[async_trait]
impl NodesClient for Client {

    #[tracing::instrument(skip(self), level="trace")]
    async fn restart_node(&self, node_name: &NodeName, description: &RestartNodeDescription) -> Result<(), ClientError> {
        let url = routes::restart_node(Clone::clone(&self.base_url), node_name);

        self.send_json(Method::POST, url, description).await?;
        debug!("Requested restart of node '{node_name}'.");

        Ok(())
    }

    #[tracing::instrument(skip(self), level="trace")]
    async fn start_node_transition(
        &self,
        node_name: &NodeName,
        operation_id: Uuid,
        transition_type: NodeTransitionType,
        node_instance_id: &NodeInstanceId,
        stop_duration_in_seconds: i32,
    ) -> Result<(), ClientError> {
        let transition = transition_type.to_wire()?;

        let mut url = routes::start_node_transition(Clone::clone(&self.base_url), node_name);
        url.query_pairs_mut()
            .append_pair("OperationId", &operation_id.to_string())
            .append_pair("NodeTransitionType", transition)
            .append_pair("NodeInstanceId", node_instance_id.value())
            .append_pair("StopDurationInSeconds", &stop_duration_in_seconds.to_string());

        self.execute(Request::new(Method::POST, url)).await?;
        debug!("Started transition '{transition}' of node '{node_name}' with operation ID <{operation_id}>.");

        Ok(())
    }

    #[tracing::instrument(skip(self), level="trace")]
    async fn get_node_transition_progress(&self, node_name: &NodeName, operation_id: Uuid) -> Result<NodeTransitionProgress, ClientError> {
        let mut url = routes::node_transition_progress(Clone::clone(&self.base_url), node_name);
        url.query_pairs_mut()
            .append_pair("OperationId", &operation_id.to_string());

        self.fetch(url).await
    }
}
