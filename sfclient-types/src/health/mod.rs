use time::OffsetDateTime;

use crate::ids::PartitionId;
use crate::json::{ConversionError, FieldGroup, JsonObject, ObjectReader, ObjectWriter, Property};
use crate::wire_enum;

pub use evaluation::{EventHealthEvaluation, HealthEvaluation, HealthEvaluationCommon, HealthEvaluationKind, HealthEvaluationWrapper, PartitionHealthEvaluation, ReplicaHealthEvaluation, ReplicasHealthEvaluation};
pub use filter::HealthStateFilter;

mod evaluation;
mod filter;

wire_enum! {
    pub enum HealthState {
        #[default]
        Invalid => "Invalid",
        Ok => "Ok",
        Warning => "Warning",
        Error => "Error",
        Unknown => "Unknown",
    }
}

wire_enum! {
    /// Kind of the service a replica health report is addressed to.
    pub enum ReplicaHealthReportServiceKind {
        #[default]
        Stateless => "Stateless",
        Stateful => "Stateful",
    }
}

/// A health report, as sent by a reporter to the health store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HealthInformation {
    pub source_id: Option<String>,
    pub property: Option<String>,
    pub health_state: Option<HealthState>,
    /// ISO 8601 duration, e.g. `PT1H`.
    pub time_to_live: Option<String>,
    pub description: Option<String>,
    pub sequence_number: Option<String>,
    pub remove_when_expired: Option<bool>,
    pub health_report_id: Option<String>,
}

impl FieldGroup for HealthInformation {
    fn accept(&mut self, property: Property) -> Result<Option<Property>, ConversionError> {
        if property.is("SourceId") {
            self.source_id = property.read()?;
        } else if property.is("Property") {
            self.property = property.read()?;
        } else if property.is("HealthState") {
            self.health_state = property.read()?;
        } else if property.is("TimeToLiveInMilliSeconds") {
            self.time_to_live = property.read()?;
        } else if property.is("Description") {
            self.description = property.read()?;
        } else if property.is("SequenceNumber") {
            self.sequence_number = property.read()?;
        } else if property.is("RemoveWhenExpired") {
            self.remove_when_expired = property.read()?;
        } else if property.is("HealthReportId") {
            self.health_report_id = property.read()?;
        } else {
            return Ok(Some(property));
        }
        Ok(None)
    }

    fn write_fields(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_required("SourceId", self.source_id.as_ref())?;
        writer.write_required("Property", self.property.as_ref())?;
        writer.write_required("HealthState", self.health_state.as_ref())?;
        writer.write_optional("TimeToLiveInMilliSeconds", self.time_to_live.as_ref())?;
        writer.write_optional("Description", self.description.as_ref())?;
        writer.write_optional("SequenceNumber", self.sequence_number.as_ref())?;
        writer.write_optional("RemoveWhenExpired", self.remove_when_expired.as_ref())?;
        writer.write_optional("HealthReportId", self.health_report_id.as_ref())
    }
}

impl JsonObject for HealthInformation {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut information = Self::default();
        while let Some(property) = reader.next_property() {
            if let Some(property) = information.accept(property)? {
                property.skip();
            }
        }
        Ok(information)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        self.write_fields(writer)
    }
}

/// A health report as stored by the health store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HealthEvent {
    pub information: HealthInformation,
    pub is_expired: Option<bool>,
    pub source_utc_timestamp: Option<OffsetDateTime>,
    pub last_modified_utc_timestamp: Option<OffsetDateTime>,
}

impl JsonObject for HealthEvent {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut event = Self::default();
        while let Some(property) = reader.next_property() {
            let Some(property) = event.information.accept(property)? else {
                continue;
            };
            if property.is("IsExpired") {
                event.is_expired = property.read()?;
            } else if property.is("SourceUtcTimestamp") {
                event.source_utc_timestamp = property.read()?;
            } else if property.is("LastModifiedUtcTimestamp") {
                event.last_modified_utc_timestamp = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(event)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        self.information.write_fields(writer)?;
        writer.write_optional("IsExpired", self.is_expired.as_ref())?;
        writer.write_optional("SourceUtcTimestamp", self.source_utc_timestamp.as_ref())?;
        writer.write_optional("LastModifiedUtcTimestamp", self.last_modified_utc_timestamp.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartitionHealth {
    pub aggregated_health_state: Option<HealthState>,
    pub health_events: Option<Vec<HealthEvent>>,
    pub unhealthy_evaluations: Option<Vec<HealthEvaluationWrapper>>,
    pub partition_id: Option<PartitionId>,
}

impl JsonObject for PartitionHealth {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut health = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("AggregatedHealthState") {
                health.aggregated_health_state = property.read()?;
            } else if property.is("HealthEvents") {
                health.health_events = property.read()?;
            } else if property.is("UnhealthyEvaluations") {
                health.unhealthy_evaluations = property.read()?;
            } else if property.is("PartitionId") {
                health.partition_id = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(health)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_optional("AggregatedHealthState", self.aggregated_health_state.as_ref())?;
        writer.write_optional("HealthEvents", self.health_events.as_ref())?;
        writer.write_optional("UnhealthyEvaluations", self.unhealthy_evaluations.as_ref())?;
        writer.write_optional("PartitionId", self.partition_id.as_ref())
    }
}


#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;
    use time::macros::datetime;

    use crate::ids::ReplicaId;
    use crate::json::{self, JsonValue};

    use super::*;

    #[test]
    fn should_write_required_health_report_fields_even_when_unset() -> anyhow::Result<()> {
        let information = HealthInformation {
            source_id: Some(String::from("Watchdog")),
            health_state: Some(HealthState::Warning),
            ..Default::default()
        };

        assert_that!(
            json::to_string(&information)?,
            eq(r#"{"SourceId":"Watchdog","Property":null,"HealthState":"Warning"}"#)
        );
        Ok(())
    }

    #[test]
    fn should_merge_report_fields_and_event_fields_in_one_scan() -> anyhow::Result<()> {
        let event = HealthEvent::from_json(json!({
            "SourceUtcTimestamp": "2018-04-03T20:21:23.194Z",
            "SourceId": "System.FM",
            "Unrelated": { "Nested": [1, 2] },
            "HealthState": "ok",
            "IsExpired": false,
            "Property": "State",
        }))?;

        assert_that!(event, eq(HealthEvent {
            information: HealthInformation {
                source_id: Some(String::from("System.FM")),
                property: Some(String::from("State")),
                health_state: Some(HealthState::Ok),
                ..Default::default()
            },
            is_expired: Some(false),
            source_utc_timestamp: Some(datetime!(2018-04-03 20:21:23.194 UTC)),
            last_modified_utc_timestamp: None,
        }));
        Ok(())
    }

    #[test]
    fn should_read_partition_health_with_nested_evaluations() -> anyhow::Result<()> {
        let health = PartitionHealth::from_json(json!({
            "AggregatedHealthState": "Error",
            "UnhealthyEvaluations": [{
                "HealthEvaluation": {
                    "Kind": "Replica",
                    "AggregatedHealthState": "Error",
                    "ReplicaOrInstanceId": "131843278492731054",
                }
            }],
            "HealthStatistics": { "HealthStateCountList": [] },
        }))?;

        assert_that!(health.aggregated_health_state, some(eq(HealthState::Error)));
        let evaluations = health.unhealthy_evaluations.unwrap_or_default();
        assert_that!(evaluations.len(), eq(1));
        assert!(matches!(evaluations[0].health_evaluation, Some(HealthEvaluation::Replica(_))));
        Ok(())
    }

    #[test]
    fn should_read_unhealthy_replicas_aggregated_per_partition() -> anyhow::Result<()> {
        let health = PartitionHealth::from_json(json!({
            "HealthEvents": [],
            "AggregatedHealthState": "Warning",
            "UnhealthyEvaluations": [{
                "HealthEvaluation": {
                    "Kind": "Replicas",
                    "Description": "Unhealthy replicas: 1 (1/3), MaxPercentUnhealthyReplicasPerPartition=0%.",
                    "AggregatedHealthState": "Warning",
                    "MaxPercentUnhealthyReplicasPerPartition": 0,
                    "TotalCount": 3,
                    "UnhealthyEvaluations": [{
                        "HealthEvaluation": {
                            "Kind": "Replica",
                            "AggregatedHealthState": "Warning",
                            "PartitionId": "9d8c4a3e-5f09-4b6a-a5d8-1c7f04f3a2b1",
                            "ReplicaOrInstanceId": "131843278492731054",
                        }
                    }],
                }
            }],
            "PartitionId": "9d8c4a3e-5f09-4b6a-a5d8-1c7f04f3a2b1",
        }))?;

        let partition_id = PartitionId(uuid::uuid!("9d8c4a3e-5f09-4b6a-a5d8-1c7f04f3a2b1"));
        assert_that!(health.partition_id, some(eq(partition_id)));
        assert_that!(health.unhealthy_evaluations, some(elements_are![eq(HealthEvaluationWrapper {
            health_evaluation: Some(HealthEvaluation::Replicas(ReplicasHealthEvaluation {
                common: HealthEvaluationCommon {
                    aggregated_health_state: Some(HealthState::Warning),
                    description: Some(String::from("Unhealthy replicas: 1 (1/3), MaxPercentUnhealthyReplicasPerPartition=0%.")),
                },
                max_percent_unhealthy_replicas_per_partition: Some(0),
                total_count: Some(3),
                unhealthy_evaluations: Some(vec![HealthEvaluationWrapper {
                    health_evaluation: Some(HealthEvaluation::Replica(ReplicaHealthEvaluation {
                        common: HealthEvaluationCommon {
                            aggregated_health_state: Some(HealthState::Warning),
                            description: None,
                        },
                        partition_id: Some(partition_id),
                        replica_or_instance_id: Some(ReplicaId::from("131843278492731054")),
                        unhealthy_evaluations: None,
                    })),
                }]),
            })),
        })]));
        Ok(())
    }
}
