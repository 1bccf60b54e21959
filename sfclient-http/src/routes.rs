use url::Url;

use sfclient_types::ids::{NodeName, PartitionId, ReplicaId, ServiceId};

const MESH_API_VERSION: &str = "6.4-preview";
const FAULTS_API_VERSION: &str = "6.0";
const HEALTH_API_VERSION: &str = "6.0";
const EVENTS_STORE_API_VERSION: &str = "6.4";
const PLACEMENT_API_VERSION: &str = "6.4";
const CHAOS_API_VERSION: &str = "6.2";

pub fn networks(base_url: Url) -> Url {
    versioned(join(base_url, &["Resources", "Networks"]), MESH_API_VERSION)
}

pub fn network(base_url: Url, network_name: &str) -> Url {
    versioned(join(base_url, &["Resources", "Networks", network_name]), MESH_API_VERSION)
}

pub fn services(base_url: Url, application_name: &str) -> Url {
    versioned(join(base_url, &["Resources", "Applications", application_name, "Services"]), MESH_API_VERSION)
}

pub fn service(base_url: Url, application_name: &str, service_name: &str) -> Url {
    versioned(join(base_url, &["Resources", "Applications", application_name, "Services", service_name]), MESH_API_VERSION)
}

pub fn restart_node(base_url: Url, node_name: &NodeName) -> Url {
    versioned(join(base_url, &["Nodes", node_name.value(), "$", "Restart"]), FAULTS_API_VERSION)
}

pub fn start_node_transition(base_url: Url, node_name: &NodeName) -> Url {
    versioned(join(base_url, &["Faults", "Nodes", node_name.value(), "$", "StartTransition", ""]), FAULTS_API_VERSION)
}

pub fn node_transition_progress(base_url: Url, node_name: &NodeName) -> Url {
    versioned(join(base_url, &["Faults", "Nodes", node_name.value(), "$", "GetTransitionProgress"]), FAULTS_API_VERSION)
}

pub fn report_node_health(base_url: Url, node_name: &NodeName) -> Url {
    versioned(join(base_url, &["Nodes", node_name.value(), "$", "ReportHealth"]), HEALTH_API_VERSION)
}

pub fn unplaced_replica_information(base_url: Url, service_id: &ServiceId) -> Url {
    versioned(join(base_url, &["Services", service_id.value(), "$", "GetUnplacedReplicaInformation"]), PLACEMENT_API_VERSION)
}

pub fn partition_health(base_url: Url, partition_id: &PartitionId) -> Url {
    let partition_id = partition_id.to_string();
    versioned(join(base_url, &["Partitions", &partition_id, "$", "GetHealth"]), HEALTH_API_VERSION)
}

pub fn report_replica_health(base_url: Url, partition_id: &PartitionId, replica_id: &ReplicaId) -> Url {
    let partition_id = partition_id.to_string();
    versioned(join(base_url, &["Partitions", &partition_id, "$", "GetReplicas", replica_id.value(), "$", "ReportHealth"]), HEALTH_API_VERSION)
}

pub fn replica_events(base_url: Url, partition_id: &PartitionId, replica_id: &ReplicaId) -> Url {
    let partition_id = partition_id.to_string();
    versioned(join(base_url, &["EventsStore", "Partitions", &partition_id, "$", "Replicas", replica_id.value(), "$", "Events"]), EVENTS_STORE_API_VERSION)
}

pub fn replicas_events(base_url: Url, partition_id: &PartitionId) -> Url {
    let partition_id = partition_id.to_string();
    versioned(join(base_url, &["EventsStore", "Partitions", &partition_id, "$", "Replicas", "Events"]), EVENTS_STORE_API_VERSION)
}

pub fn chaos(base_url: Url) -> Url {
    versioned(join(base_url, &["Tools", "Chaos"]), CHAOS_API_VERSION)
}

/// Appends the segments to the path of `base_url`. Base URLs which cannot be a base
/// are rejected when the client is created, so these are left unchanged here.
fn join(mut base_url: Url, segments: &[&str]) -> Url {
    if let Ok(mut path_segments) = base_url.path_segments_mut() {
        path_segments
            .pop_if_empty()
            .extend(segments);
    }
    base_url
}

fn versioned(mut url: Url, api_version: &str) -> Url {
    url.query_pairs_mut()
        .append_pair("api-version", api_version);
    url
}
