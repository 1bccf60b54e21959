use crate::ids::{PartitionId, ServiceName};
use crate::json::{ConversionError, JsonObject, ObjectReader, ObjectWriter};

/// Why replicas of a partition could not be placed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnplacedReplicaInformation {
    pub service_name: Option<ServiceName>,
    pub partition_id: Option<PartitionId>,
    pub unplaced_replica_details: Option<Vec<String>>,
}

impl JsonObject for UnplacedReplicaInformation {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut information = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("ServiceName") {
                information.service_name = property.read()?;
            } else if property.is("PartitionId") {
                information.partition_id = property.read()?;
            } else if property.is("UnplacedReplicaDetails") {
                information.unplaced_replica_details = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(information)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_optional("ServiceName", self.service_name.as_ref())?;
        writer.write_optional("PartitionId", self.partition_id.as_ref())?;
        writer.write_optional("UnplacedReplicaDetails", self.unplaced_replica_details.as_ref())
    }
}


#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use crate::json::JsonValue;

    use super::*;

    #[test]
    fn should_read_unplaced_replica_details() -> anyhow::Result<()> {
        let information = UnplacedReplicaInformation::from_json(json!({
            "ServiceName": "fabric:/app/svc",
            "UnplacedReplicaDetails": ["Constraint violated: NodeType==Backend", "No nodes available"],
            "PartitionId": null,
        }))?;

        assert_that!(information.service_name, some(eq(ServiceName::from("fabric:/app/svc"))));
        assert_that!(information.partition_id, none());
        assert_that!(
            information.unplaced_replica_details.unwrap_or_default(),
            elements_are![eq("Constraint violated: NodeType==Backend"), eq("No nodes available")]
        );
        Ok(())
    }

    #[test]
    fn should_reject_a_non_list_of_details() {
        let result = UnplacedReplicaInformation::from_json(json!({ "UnplacedReplicaDetails": "none" }));

        assert!(matches!(result, Err(ConversionError::UnexpectedType { expected: "array", .. })));
    }
}
