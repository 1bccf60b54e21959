use time::OffsetDateTime;
use uuid::Uuid;

use crate::health::HealthState;
use crate::ids::{PartitionId, ReplicaId};
use crate::json::{read_discriminated, write_discriminated, ConversionError, Discriminated, FieldGroup, JsonObject, ObjectReader, ObjectWriter, Property, Variant};
use crate::wire_enum;

wire_enum! {
    pub enum FabricEventKind {
        #[default]
        Unknown,
        ClusterEvent => "ClusterEvent",
        ContainerInstanceEvent => "ContainerInstanceEvent",
        NodeEvent => "NodeEvent",
        ApplicationEvent => "ApplicationEvent",
        ServiceEvent => "ServiceEvent",
        PartitionEvent => "PartitionEvent",
        ReplicaEvent => "ReplicaEvent",
        PartitionAnalysisEvent => "PartitionAnalysisEvent",
        StatefulReplicaNewHealthReport => "StatefulReplicaNewHealthReport",
        StatefulReplicaHealthReportExpired => "StatefulReplicaHealthReportExpired",
        StatelessReplicaNewHealthReport => "StatelessReplicaNewHealthReport",
        StatelessReplicaHealthReportExpired => "StatelessReplicaHealthReportExpired",
        ChaosReplicaRemovalScheduled => "ChaosReplicaRemovalScheduled",
        ChaosReplicaRestartScheduled => "ChaosReplicaRestartScheduled",
    }
}

/// An event recorded by the events store for a single replica.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplicaEvent {
    /// An event of the base kind, without variant fields.
    Replica(ReplicaEventCommon),
    StatefulReplicaNewHealthReport(ReplicaHealthReportEvent),
    StatefulReplicaHealthReportExpired(ReplicaHealthReportEvent),
    StatelessReplicaNewHealthReport(ReplicaHealthReportEvent),
    StatelessReplicaHealthReportExpired(ReplicaHealthReportEvent),
    ChaosReplicaRemovalScheduled(ChaosReplicaFaultEvent),
    ChaosReplicaRestartScheduled(ChaosReplicaFaultEvent),
}

impl ReplicaEvent {
    pub fn common(&self) -> &ReplicaEventCommon {
        match self {
            ReplicaEvent::Replica(common) => common,
            ReplicaEvent::StatefulReplicaNewHealthReport(event)
            | ReplicaEvent::StatefulReplicaHealthReportExpired(event)
            | ReplicaEvent::StatelessReplicaNewHealthReport(event)
            | ReplicaEvent::StatelessReplicaHealthReportExpired(event) => &event.common,
            ReplicaEvent::ChaosReplicaRemovalScheduled(event)
            | ReplicaEvent::ChaosReplicaRestartScheduled(event) => &event.common,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplicaEventCommon {
    pub event_instance_id: Option<Uuid>,
    pub category: Option<String>,
    pub time_stamp: Option<OffsetDateTime>,
    pub has_correlated_events: Option<bool>,
    pub partition_id: Option<PartitionId>,
    pub replica_id: Option<ReplicaId>,
}

impl FieldGroup for ReplicaEventCommon {
    fn accept(&mut self, property: Property) -> Result<Option<Property>, ConversionError> {
        if property.is("EventInstanceId") {
            self.event_instance_id = property.read()?;
        } else if property.is("Category") {
            self.category = property.read()?;
        } else if property.is("TimeStamp") {
            self.time_stamp = property.read()?;
        } else if property.is("HasCorrelatedEvents") {
            self.has_correlated_events = property.read()?;
        } else if property.is("PartitionId") {
            self.partition_id = property.read()?;
        } else if property.is("ReplicaId") {
            self.replica_id = property.read()?;
        } else {
            return Ok(Some(property));
        }
        Ok(None)
    }

    fn write_fields(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_required("EventInstanceId", self.event_instance_id.as_ref())?;
        writer.write_required("TimeStamp", self.time_stamp.as_ref())?;
        writer.write_required("PartitionId", self.partition_id.as_ref())?;
        writer.write_required("ReplicaId", self.replica_id.as_ref())?;
        writer.write_optional("Category", self.category.as_ref())?;
        writer.write_optional("HasCorrelatedEvents", self.has_correlated_events.as_ref())
    }
}

/// Payload shared by the new and expired health report events of stateful and stateless replicas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplicaHealthReportEvent {
    pub common: ReplicaEventCommon,
    /// Only reported for stateful replicas.
    pub replica_instance_id: Option<i64>,
    pub source_id: Option<String>,
    pub property: Option<String>,
    pub health_state: Option<HealthState>,
    pub time_to_live_ms: Option<i64>,
    pub sequence_number: Option<i64>,
    pub description: Option<String>,
    pub remove_when_expired: Option<bool>,
    pub source_utc_timestamp: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChaosReplicaFaultEvent {
    pub common: ReplicaEventCommon,
    pub fault_group_id: Option<Uuid>,
    pub fault_id: Option<Uuid>,
    pub service_uri: Option<String>,
}

fn read_base(reader: &mut ObjectReader) -> Result<ReplicaEvent, ConversionError> {
    let mut common = ReplicaEventCommon::default();
    while let Some(property) = reader.next_property() {
        if let Some(property) = common.accept(property)? {
            property.skip();
        }
    }
    Ok(ReplicaEvent::Replica(common))
}

fn read_health_report(reader: &mut ObjectReader) -> Result<ReplicaHealthReportEvent, ConversionError> {
    let mut event = ReplicaHealthReportEvent::default();
    while let Some(property) = reader.next_property() {
        let Some(property) = event.common.accept(property)? else {
            continue;
        };
        if property.is("ReplicaInstanceId") {
            event.replica_instance_id = property.read()?;
        } else if property.is("SourceId") {
            event.source_id = property.read()?;
        } else if property.is("Property") {
            event.property = property.read()?;
        } else if property.is("HealthState") {
            event.health_state = property.read()?;
        } else if property.is("TimeToLiveMs") {
            event.time_to_live_ms = property.read()?;
        } else if property.is("SequenceNumber") {
            event.sequence_number = property.read()?;
        } else if property.is("Description") {
            event.description = property.read()?;
        } else if property.is("RemoveWhenExpired") {
            event.remove_when_expired = property.read()?;
        } else if property.is("SourceUtcTimestamp") {
            event.source_utc_timestamp = property.read()?;
        } else {
            property.skip();
        }
    }
    Ok(event)
}

fn read_chaos_fault(reader: &mut ObjectReader) -> Result<ChaosReplicaFaultEvent, ConversionError> {
    let mut event = ChaosReplicaFaultEvent::default();
    while let Some(property) = reader.next_property() {
        let Some(property) = event.common.accept(property)? else {
            continue;
        };
        if property.is("FaultGroupId") {
            event.fault_group_id = property.read()?;
        } else if property.is("FaultId") {
            event.fault_id = property.read()?;
        } else if property.is("ServiceUri") {
            event.service_uri = property.read()?;
        } else {
            property.skip();
        }
    }
    Ok(event)
}

fn read_stateful_new_health_report(reader: &mut ObjectReader) -> Result<ReplicaEvent, ConversionError> {
    read_health_report(reader).map(ReplicaEvent::StatefulReplicaNewHealthReport)
}

fn read_stateful_health_report_expired(reader: &mut ObjectReader) -> Result<ReplicaEvent, ConversionError> {
    read_health_report(reader).map(ReplicaEvent::StatefulReplicaHealthReportExpired)
}

fn read_stateless_new_health_report(reader: &mut ObjectReader) -> Result<ReplicaEvent, ConversionError> {
    read_health_report(reader).map(ReplicaEvent::StatelessReplicaNewHealthReport)
}

fn read_stateless_health_report_expired(reader: &mut ObjectReader) -> Result<ReplicaEvent, ConversionError> {
    read_health_report(reader).map(ReplicaEvent::StatelessReplicaHealthReportExpired)
}

fn read_chaos_removal_scheduled(reader: &mut ObjectReader) -> Result<ReplicaEvent, ConversionError> {
    read_chaos_fault(reader).map(ReplicaEvent::ChaosReplicaRemovalScheduled)
}

fn read_chaos_restart_scheduled(reader: &mut ObjectReader) -> Result<ReplicaEvent, ConversionError> {
    read_chaos_fault(reader).map(ReplicaEvent::ChaosReplicaRestartScheduled)
}

fn write_health_report(event: &ReplicaHealthReportEvent, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
    event.common.write_fields(writer)?;
    writer.write_optional("ReplicaInstanceId", event.replica_instance_id.as_ref())?;
    writer.write_required("SourceId", event.source_id.as_ref())?;
    writer.write_required("Property", event.property.as_ref())?;
    writer.write_required("HealthState", event.health_state.as_ref())?;
    writer.write_required("TimeToLiveMs", event.time_to_live_ms.as_ref())?;
    writer.write_required("SequenceNumber", event.sequence_number.as_ref())?;
    writer.write_required("Description", event.description.as_ref())?;
    writer.write_required("RemoveWhenExpired", event.remove_when_expired.as_ref())?;
    writer.write_required("SourceUtcTimestamp", event.source_utc_timestamp.as_ref())
}

fn write_chaos_fault(event: &ChaosReplicaFaultEvent, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
    event.common.write_fields(writer)?;
    writer.write_required("FaultGroupId", event.fault_group_id.as_ref())?;
    writer.write_required("FaultId", event.fault_id.as_ref())?;
    writer.write_required("ServiceUri", event.service_uri.as_ref())
}

impl Discriminated for ReplicaEvent {
    type Kind = FabricEventKind;

    const DISCRIMINATOR: &'static str = "Kind";

    const VARIANTS: &'static [Variant<Self>] = &[
        Variant { kind: FabricEventKind::StatefulReplicaNewHealthReport, read: read_stateful_new_health_report },
        Variant { kind: FabricEventKind::StatefulReplicaHealthReportExpired, read: read_stateful_health_report_expired },
        Variant { kind: FabricEventKind::StatelessReplicaNewHealthReport, read: read_stateless_new_health_report },
        Variant { kind: FabricEventKind::StatelessReplicaHealthReportExpired, read: read_stateless_health_report_expired },
        Variant { kind: FabricEventKind::ChaosReplicaRemovalScheduled, read: read_chaos_removal_scheduled },
        Variant { kind: FabricEventKind::ChaosReplicaRestartScheduled, read: read_chaos_restart_scheduled },
        Variant { kind: FabricEventKind::ReplicaEvent, read: read_base },
    ];

    fn kind(&self) -> FabricEventKind {
        match self {
            ReplicaEvent::Replica(_) => FabricEventKind::ReplicaEvent,
            ReplicaEvent::StatefulReplicaNewHealthReport(_) => FabricEventKind::StatefulReplicaNewHealthReport,
            ReplicaEvent::StatefulReplicaHealthReportExpired(_) => FabricEventKind::StatefulReplicaHealthReportExpired,
            ReplicaEvent::StatelessReplicaNewHealthReport(_) => FabricEventKind::StatelessReplicaNewHealthReport,
            ReplicaEvent::StatelessReplicaHealthReportExpired(_) => FabricEventKind::StatelessReplicaHealthReportExpired,
            ReplicaEvent::ChaosReplicaRemovalScheduled(_) => FabricEventKind::ChaosReplicaRemovalScheduled,
            ReplicaEvent::ChaosReplicaRestartScheduled(_) => FabricEventKind::ChaosReplicaRestartScheduled,
        }
    }

    fn write_variant(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        match self {
            ReplicaEvent::Replica(common) => common.write_fields(writer),
            ReplicaEvent::StatefulReplicaNewHealthReport(event)
            | ReplicaEvent::StatefulReplicaHealthReportExpired(event)
            | ReplicaEvent::StatelessReplicaNewHealthReport(event)
            | ReplicaEvent::StatelessReplicaHealthReportExpired(event) => write_health_report(event, writer),
            ReplicaEvent::ChaosReplicaRemovalScheduled(event)
            | ReplicaEvent::ChaosReplicaRestartScheduled(event) => write_chaos_fault(event, writer),
        }
    }
}

impl JsonObject for ReplicaEvent {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        read_discriminated(reader)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        write_discriminated(self, writer)
    }
}
