//! Resources of the Service Fabric mesh resource model.

use crate::wire_enum;

pub use network::{LocalNetworkResourceProperties, NetworkKind, NetworkResourceCommon, NetworkResourceDescription, NetworkResourceProperties};
pub use service::{ContainerCodePackageProperties, NetworkRef, OperatingSystemType, ResourceLimits, ResourceRequests, ResourceRequirements, ServiceResourceDescription, ServiceResourceProperties};

mod network;
mod service;

wire_enum! {
    /// Provisioning status of a mesh resource, as reported by the cluster.
    pub enum ResourceStatus {
        #[default]
        Unknown => "Unknown",
        Ready => "Ready",
        Upgrading => "Upgrading",
        Creating => "Creating",
        Deleting => "Deleting",
        Failed => "Failed",
    }
}
