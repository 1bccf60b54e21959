use crate::health::HealthState;
use crate::json::{ConversionError, JsonObject, ObjectReader, ObjectWriter};
use crate::mesh::ResourceStatus;
use crate::scaling::AutoScalingPolicy;
use crate::wire_enum;

wire_enum! {
    pub enum OperatingSystemType {
        #[default]
        Linux => "Linux",
        Windows => "Windows",
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceResourceDescription {
    pub name: Option<String>,
    pub properties: Option<ServiceResourceProperties>,
}

impl JsonObject for ServiceResourceDescription {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut description = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("name") {
                description.name = property.read()?;
            } else if property.is("properties") {
                description.properties = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(description)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_required("name", self.name.as_ref())?;
        writer.write_required("properties", self.properties.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceResourceProperties {
    pub os_type: Option<OperatingSystemType>,
    pub code_packages: Option<Vec<ContainerCodePackageProperties>>,
    pub network_refs: Option<Vec<NetworkRef>>,
    pub description: Option<String>,
    pub replica_count: Option<i32>,
    pub auto_scaling_policies: Option<Vec<AutoScalingPolicy>>,
    pub status: Option<ResourceStatus>,
    pub status_details: Option<String>,
    pub health_state: Option<HealthState>,
    pub unhealthy_evaluation: Option<String>,
}

impl JsonObject for ServiceResourceProperties {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut properties = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("osType") {
                properties.os_type = property.read()?;
            } else if property.is("codePackages") {
                properties.code_packages = property.read()?;
            } else if property.is("networkRefs") {
                properties.network_refs = property.read()?;
            } else if property.is("description") {
                properties.description = property.read()?;
            } else if property.is("replicaCount") {
                properties.replica_count = property.read()?;
            } else if property.is("autoScalingPolicies") {
                properties.auto_scaling_policies = property.read()?;
            } else if property.is("status") {
                properties.status = property.read()?;
            } else if property.is("statusDetails") {
                properties.status_details = property.read()?;
            } else if property.is("healthState") {
                properties.health_state = property.read()?;
            } else if property.is("unhealthyEvaluation") {
                properties.unhealthy_evaluation = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(properties)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_required("osType", self.os_type.as_ref())?;
        writer.write_required("codePackages", self.code_packages.as_ref())?;
        writer.write_optional("networkRefs", self.network_refs.as_ref())?;
        writer.write_optional("description", self.description.as_ref())?;
        writer.write_optional("replicaCount", self.replica_count.as_ref())?;
        writer.write_optional("autoScalingPolicies", self.auto_scaling_policies.as_ref())?;
        writer.write_optional("status", self.status.as_ref())?;
        writer.write_optional("statusDetails", self.status_details.as_ref())?;
        writer.write_optional("healthState", self.health_state.as_ref())?;
        writer.write_optional("unhealthyEvaluation", self.unhealthy_evaluation.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContainerCodePackageProperties {
    pub name: Option<String>,
    pub image: Option<String>,
    pub entrypoint: Option<String>,
    pub commands: Option<Vec<String>>,
    pub resources: Option<ResourceRequirements>,
}

impl JsonObject for ContainerCodePackageProperties {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut code_package = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("name") {
                code_package.name = property.read()?;
            } else if property.is("image") {
                code_package.image = property.read()?;
            } else if property.is("entrypoint") {
                code_package.entrypoint = property.read()?;
            } else if property.is("commands") {
                code_package.commands = property.read()?;
            } else if property.is("resources") {
                code_package.resources = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(code_package)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_required("name", self.name.as_ref())?;
        writer.write_required("image", self.image.as_ref())?;
        writer.write_optional("entrypoint", self.entrypoint.as_ref())?;
        writer.write_optional("commands", self.commands.as_ref())?;
        writer.write_required("resources", self.resources.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkRef {
    pub name: Option<String>,
}

impl JsonObject for NetworkRef {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut network_ref = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("name") {
                network_ref.name = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(network_ref)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_optional("name", self.name.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceRequirements {
    pub requests: Option<ResourceRequests>,
    pub limits: Option<ResourceLimits>,
}

impl JsonObject for ResourceRequirements {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut requirements = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("requests") {
                requirements.requests = property.read()?;
            } else if property.is("limits") {
                requirements.limits = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(requirements)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_required("requests", self.requests.as_ref())?;
        writer.write_optional("limits", self.limits.as_ref())
    }
}

/// Resources reserved for a code package.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceRequests {
    pub memory_in_gb: Option<f64>,
    pub cpu: Option<f64>,
}

impl JsonObject for ResourceRequests {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut requests = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("memoryInGB") {
                requests.memory_in_gb = property.read()?;
            } else if property.is("cpu") {
                requests.cpu = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(requests)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_required("memoryInGB", self.memory_in_gb.as_ref())?;
        writer.write_required("cpu", self.cpu.as_ref())
    }
}

/// Upper bound of the resources a code package may consume.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceLimits {
    pub memory_in_gb: Option<f64>,
    pub cpu: Option<f64>,
}

impl JsonObject for ResourceLimits {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut limits = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("memoryInGB") {
                limits.memory_in_gb = property.read()?;
            } else if property.is("cpu") {
                limits.cpu = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(limits)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_optional("memoryInGB", self.memory_in_gb.as_ref())?;
        writer.write_optional("cpu", self.cpu.as_ref())
    }
}


#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use crate::json::{JsonValue, Value};
    use crate::scaling::{AddRemoveReplicaScalingMechanism, AutoScalingMechanism};

    use super::*;

    fn service_payload(trigger_kind: &str) -> Value {
        json!({
            "name": "helloWorldService",
            "properties": {
                "osType": "linux",
                "codePackages": [{
                    "name": "helloWorldCode",
                    "image": "seabreeze/sbz-helloworld:1.0-alpine",
                    "endpoints": [{ "name": "helloWorldListener", "port": 80 }],
                    "resources": { "requests": { "memoryInGB": 1, "cpu": 1 } },
                }],
                "replicaCount": 1,
                "autoScalingPolicies": [{
                    "name": "cpu",
                    "trigger": {
                        "kind": trigger_kind,
                        "metric": { "kind": "Resource", "name": "cpu" },
                        "lowerLoadThreshold": 0.3,
                        "upperLoadThreshold": 0.8,
                        "scaleIntervalInSeconds": 60,
                    },
                    "mechanism": { "kind": "AddRemoveReplica", "minInstanceCount": 1, "maxInstanceCount": 3, "scaleIncrement": 1 },
                }],
                "status": "Ready",
                "healthState": "Ok",
            },
        })
    }

    #[test]
    fn should_read_a_service_with_autoscaling_policies() -> anyhow::Result<()> {
        let service = ServiceResourceDescription::from_json(service_payload("AverageLoad"))?;

        let properties = service.properties.unwrap_or_default();
        assert_that!(properties.os_type, some(eq(OperatingSystemType::Linux)));
        assert_that!(properties.status, some(eq(ResourceStatus::Ready)));

        let code_packages = properties.code_packages.unwrap_or_default();
        assert_that!(code_packages.len(), eq(1));
        assert_that!(code_packages[0].resources.clone(), some(eq(ResourceRequirements {
            requests: Some(ResourceRequests { memory_in_gb: Some(1.0), cpu: Some(1.0) }),
            limits: None,
        })));

        let policies = properties.auto_scaling_policies.unwrap_or_default();
        assert_that!(policies.len(), eq(1));
        assert_that!(policies[0].mechanism.clone(), some(eq(AutoScalingMechanism::AddRemoveReplica(AddRemoveReplicaScalingMechanism {
            min_instance_count: Some(1),
            max_instance_count: Some(3),
            scale_increment: Some(1),
        }))));
        Ok(())
    }

    #[test]
    fn should_fail_the_whole_service_for_an_unknown_trigger_kind() {
        let result = ServiceResourceDescription::from_json(service_payload("PeakLoad"));

        assert!(matches!(result, Err(ConversionError::UnknownVariant { kind, .. }) if kind == "PeakLoad"));
    }

    #[test]
    fn should_write_required_resource_requests() -> anyhow::Result<()> {
        let requirements = ResourceRequirements {
            requests: Some(ResourceRequests { memory_in_gb: Some(0.5), cpu: None }),
            limits: Some(ResourceLimits::default()),
        };

        assert_that!(requirements.to_json()?, eq(json!({
            "requests": { "memoryInGB": 0.5, "cpu": null },
            "limits": {},
        })));
        Ok(())
    }
}
