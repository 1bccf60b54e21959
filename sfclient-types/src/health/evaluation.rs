use crate::health::{HealthEvent, HealthState};
use crate::ids::{PartitionId, ReplicaId};
use crate::json::{read_discriminated, write_discriminated, ConversionError, Discriminated, FieldGroup, JsonObject, ObjectReader, ObjectWriter, Property, Variant};
use crate::wire_enum;

wire_enum! {
    pub enum HealthEvaluationKind {
        #[default]
        Invalid => "Invalid",
        Event => "Event",
        Replicas => "Replicas",
        Partitions => "Partitions",
        DeployedServicePackages => "DeployedServicePackages",
        DeployedApplications => "DeployedApplications",
        Services => "Services",
        Nodes => "Nodes",
        Applications => "Applications",
        SystemApplication => "SystemApplication",
        UpgradeDomainDeployedApplications => "UpgradeDomainDeployedApplications",
        UpgradeDomainNodes => "UpgradeDomainNodes",
        Replica => "Replica",
        Partition => "Partition",
        DeployedServicePackage => "DeployedServicePackage",
        DeployedApplication => "DeployedApplication",
        Service => "Service",
        Node => "Node",
        Application => "Application",
        DeltaNodesCheck => "DeltaNodesCheck",
        UpgradeDomainDeltaNodesCheck => "UpgradeDomainDeltaNodesCheck",
        ApplicationTypeApplications => "ApplicationTypeApplications",
    }
}

/// Explains why an entity's aggregated health state is what it is.
#[derive(Clone, Debug, PartialEq)]
pub enum HealthEvaluation {
    Event(EventHealthEvaluation),
    Partition(PartitionHealthEvaluation),
    Replicas(ReplicasHealthEvaluation),
    Replica(ReplicaHealthEvaluation),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HealthEvaluationCommon {
    pub aggregated_health_state: Option<HealthState>,
    pub description: Option<String>,
}

impl FieldGroup for HealthEvaluationCommon {
    fn accept(&mut self, property: Property) -> Result<Option<Property>, ConversionError> {
        if property.is("AggregatedHealthState") {
            self.aggregated_health_state = property.read()?;
        } else if property.is("Description") {
            self.description = property.read()?;
        } else {
            return Ok(Some(property));
        }
        Ok(None)
    }

    fn write_fields(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_required("AggregatedHealthState", self.aggregated_health_state.as_ref())?;
        writer.write_optional("Description", self.description.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventHealthEvaluation {
    pub common: HealthEvaluationCommon,
    pub consider_warning_as_error: Option<bool>,
    pub unhealthy_event: Option<HealthEvent>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartitionHealthEvaluation {
    pub common: HealthEvaluationCommon,
    pub partition_id: Option<PartitionId>,
    pub unhealthy_evaluations: Option<Vec<HealthEvaluationWrapper>>,
}

/// Aggregate over the replicas of one partition, wrapping one evaluation per unhealthy replica.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplicasHealthEvaluation {
    pub common: HealthEvaluationCommon,
    pub max_percent_unhealthy_replicas_per_partition: Option<i32>,
    pub total_count: Option<i64>,
    pub unhealthy_evaluations: Option<Vec<HealthEvaluationWrapper>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplicaHealthEvaluation {
    pub common: HealthEvaluationCommon,
    pub partition_id: Option<PartitionId>,
    pub replica_or_instance_id: Option<ReplicaId>,
    pub unhealthy_evaluations: Option<Vec<HealthEvaluationWrapper>>,
}

fn read_event(reader: &mut ObjectReader) -> Result<HealthEvaluation, ConversionError> {
    let mut evaluation = EventHealthEvaluation::default();
    while let Some(property) = reader.next_property() {
        let Some(property) = evaluation.common.accept(property)? else {
            continue;
        };
        if property.is("ConsiderWarningAsError") {
            evaluation.consider_warning_as_error = property.read()?;
        } else if property.is("UnhealthyEvent") {
            evaluation.unhealthy_event = property.read()?;
        } else {
            property.skip();
        }
    }
    Ok(HealthEvaluation::Event(evaluation))
}

fn read_partition(reader: &mut ObjectReader) -> Result<HealthEvaluation, ConversionError> {
    let mut evaluation = PartitionHealthEvaluation::default();
    while let Some(property) = reader.next_property() {
        let Some(property) = evaluation.common.accept(property)? else {
            continue;
        };
        if property.is("PartitionId") {
            evaluation.partition_id = property.read()?;
        } else if property.is("UnhealthyEvaluations") {
            evaluation.unhealthy_evaluations = property.read()?;
        } else {
            property.skip();
        }
    }
    Ok(HealthEvaluation::Partition(evaluation))
}

fn read_replicas(reader: &mut ObjectReader) -> Result<HealthEvaluation, ConversionError> {
    let mut evaluation = ReplicasHealthEvaluation::default();
    while let Some(property) = reader.next_property() {
        let Some(property) = evaluation.common.accept(property)? else {
            continue;
        };
        if property.is("MaxPercentUnhealthyReplicasPerPartition") {
            evaluation.max_percent_unhealthy_replicas_per_partition = property.read()?;
        } else if property.is("TotalCount") {
            evaluation.total_count = property.read()?;
        } else if property.is("UnhealthyEvaluations") {
            evaluation.unhealthy_evaluations = property.read()?;
        } else {
            property.skip();
        }
    }
    Ok(HealthEvaluation::Replicas(evaluation))
}

fn read_replica(reader: &mut ObjectReader) -> Result<HealthEvaluation, ConversionError> {
    let mut evaluation = ReplicaHealthEvaluation::default();
    while let Some(property) = reader.next_property() {
        let Some(property) = evaluation.common.accept(property)? else {
            continue;
        };
        if property.is("PartitionId") {
            evaluation.partition_id = property.read()?;
        } else if property.is("ReplicaOrInstanceId") {
            evaluation.replica_or_instance_id = property.read()?;
        } else if property.is("UnhealthyEvaluations") {
            evaluation.unhealthy_evaluations = property.read()?;
        } else {
            property.skip();
        }
    }
    Ok(HealthEvaluation::Replica(evaluation))
}

impl Discriminated for HealthEvaluation {
    type Kind = HealthEvaluationKind;

    const DISCRIMINATOR: &'static str = "Kind";

    const VARIANTS: &'static [Variant<Self>] = &[
        Variant { kind: HealthEvaluationKind::Event, read: read_event },
        Variant { kind: HealthEvaluationKind::Partition, read: read_partition },
        Variant { kind: HealthEvaluationKind::Replicas, read: read_replicas },
        Variant { kind: HealthEvaluationKind::Replica, read: read_replica },
    ];

    fn kind(&self) -> HealthEvaluationKind {
        match self {
            HealthEvaluation::Event(_) => HealthEvaluationKind::Event,
            HealthEvaluation::Partition(_) => HealthEvaluationKind::Partition,
            HealthEvaluation::Replicas(_) => HealthEvaluationKind::Replicas,
            HealthEvaluation::Replica(_) => HealthEvaluationKind::Replica,
        }
    }

    fn write_variant(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        match self {
            HealthEvaluation::Event(evaluation) => {
                evaluation.common.write_fields(writer)?;
                writer.write_required("ConsiderWarningAsError", evaluation.consider_warning_as_error.as_ref())?;
                writer.write_required("UnhealthyEvent", evaluation.unhealthy_event.as_ref())
            }
            HealthEvaluation::Partition(evaluation) => {
                evaluation.common.write_fields(writer)?;
                writer.write_optional("PartitionId", evaluation.partition_id.as_ref())?;
                writer.write_optional("UnhealthyEvaluations", evaluation.unhealthy_evaluations.as_ref())
            }
            HealthEvaluation::Replicas(evaluation) => {
                evaluation.common.write_fields(writer)?;
                writer.write_optional("MaxPercentUnhealthyReplicasPerPartition", evaluation.max_percent_unhealthy_replicas_per_partition.as_ref())?;
                writer.write_optional("TotalCount", evaluation.total_count.as_ref())?;
                writer.write_optional("UnhealthyEvaluations", evaluation.unhealthy_evaluations.as_ref())
            }
            HealthEvaluation::Replica(evaluation) => {
                evaluation.common.write_fields(writer)?;
                writer.write_optional("PartitionId", evaluation.partition_id.as_ref())?;
                writer.write_optional("ReplicaOrInstanceId", evaluation.replica_or_instance_id.as_ref())?;
                writer.write_optional("UnhealthyEvaluations", evaluation.unhealthy_evaluations.as_ref())
            }
        }
    }
}

impl JsonObject for HealthEvaluation {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        read_discriminated(reader)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        write_discriminated(self, writer)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HealthEvaluationWrapper {
    pub health_evaluation: Option<HealthEvaluation>,
}

impl JsonObject for HealthEvaluationWrapper {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut wrapper = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("HealthEvaluation") {
                wrapper.health_evaluation = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(wrapper)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_optional("HealthEvaluation", self.health_evaluation.as_ref())
    }
}
