use crate::json::{ConversionError, JsonObject, ObjectReader, ObjectWriter, WireEnum};
use crate::wire_enum;

wire_enum! {
    /// Error codes returned by the cluster in the body of failed requests.
    pub enum FabricErrorCode {
        #[default]
        Unknown,
        InvalidPartitionKey => "FABRIC_E_INVALID_PARTITION_KEY",
        InvalidAddress => "FABRIC_E_INVALID_ADDRESS",
        ApplicationNotFound => "FABRIC_E_APPLICATION_NOT_FOUND",
        ServiceDoesNotExist => "FABRIC_E_SERVICE_DOES_NOT_EXIST",
        PartitionNotFound => "FABRIC_E_PARTITION_NOT_FOUND",
        ReplicaDoesNotExist => "FABRIC_E_REPLICA_DOES_NOT_EXIST",
        NodeNotFound => "FABRIC_E_NODE_NOT_FOUND",
        NodeIsUp => "FABRIC_E_NODE_IS_UP",
        NodeTransitionInProgress => "FABRIC_E_NODE_TRANSITION_IN_PROGRESS",
        TestCommandOperationIdAlreadyExists => "FABRIC_E_TEST_COMMAND_OPERATION_ID_ALREADY_EXISTS",
        TestCommandOperationIdNotFound => "FABRIC_E_TEST_COMMAND_OPERATION_ID_NOT_FOUND",
        ChaosAlreadyRunning => "FABRIC_E_CHAOS_ALREADY_RUNNING",
        HealthEntityNotFound => "FABRIC_E_HEALTH_ENTITY_NOT_FOUND",
        HealthStaleReport => "FABRIC_E_HEALTH_STALE_REPORT",
        InvalidArgument => "E_INVALIDARG",
        AccessDenied => "E_ACCESSDENIED",
        NotPrimary => "FABRIC_E_NOT_PRIMARY",
        NoWriteQuorum => "FABRIC_E_NO_WRITE_QUORUM",
        ReconfigurationPending => "FABRIC_E_RECONFIGURATION_PENDING",
        ServiceOffline => "FABRIC_E_SERVICE_OFFLINE",
        ServiceTooBusy => "FABRIC_E_SERVICE_TOO_BUSY",
        GatewayNotReachable => "FABRIC_E_GATEWAY_NOT_REACHABLE",
        CommunicationError => "FABRIC_E_COMMUNICATION_ERROR",
        Timeout => "FABRIC_E_TIMEOUT",
        Abort => "E_ABORT",
    }
}

impl FabricErrorCode {
    /// Whether the failed operation may succeed when retried unchanged.
    pub fn is_transient(self) -> bool {
        matches!(self,
            FabricErrorCode::NotPrimary
            | FabricErrorCode::NoWriteQuorum
            | FabricErrorCode::ReconfigurationPending
            | FabricErrorCode::ServiceOffline
            | FabricErrorCode::ServiceTooBusy
            | FabricErrorCode::GatewayNotReachable
            | FabricErrorCode::CommunicationError
            | FabricErrorCode::Timeout
            | FabricErrorCode::Abort
        )
    }
}

/// Body of a failed request: `{ "Error": { "Code": ..., "Message": ... } }`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FabricError {
    pub code: FabricErrorCode,
    pub message: Option<String>,
}

impl FabricError {
    pub fn is_transient(&self) -> bool {
        self.code.is_transient()
    }
}

impl std::fmt::Display for FabricError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.code.wire_name().unwrap_or("Unknown");
        match &self.message {
            Some(message) => write!(f, "{code}: {message}"),
            None => f.write_str(code),
        }
    }
}

#[derive(Default)]
struct ErrorDetails {
    code: Option<FabricErrorCode>,
    message: Option<String>,
}

impl JsonObject for ErrorDetails {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut details = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("Code") {
                details.code = property.read()?;
            } else if property.is("Message") {
                details.message = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(details)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_required("Code", self.code.as_ref())?;
        writer.write_optional("Message", self.message.as_ref())
    }
}

impl JsonObject for FabricError {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut error = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("Error") {
                let details = property.read::<ErrorDetails>()?.unwrap_or_default();
                error.code = details.code.unwrap_or_default();
                error.message = details.message;
            } else {
                property.skip();
            }
        }
        Ok(error)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        let details = ErrorDetails {
            code: Some(self.code),
            message: self.message.clone(),
        };
        writer.write("Error", &details)
    }
}


#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use crate::json::{self, JsonValue};

    use super::*;

    #[test]
    fn should_read_a_known_error() -> anyhow::Result<()> {
        let error = json::from_str::<FabricError>(r#"{"Error":{"Code":"FABRIC_E_NOT_PRIMARY","Message":"Not primary."}}"#)?;

        assert_that!(error.code, eq(FabricErrorCode::NotPrimary));
        assert_that!(error.is_transient(), eq(true));
        assert_that!(error.to_string(), eq("FABRIC_E_NOT_PRIMARY: Not primary."));
        Ok(())
    }

    #[test]
    fn should_read_unknown_codes_as_non_transient_unknown() -> anyhow::Result<()> {
        let error = FabricError::from_json(json!({ "Error": { "Code": "FABRIC_E_SOMETHING_NEW", "Message": "?" } }))?;

        assert_that!(error.code, eq(FabricErrorCode::Unknown));
        assert_that!(error.is_transient(), eq(false));
        Ok(())
    }

    #[test]
    fn should_not_write_an_unknown_code() {
        let error = FabricError::default();

        assert!(matches!(error.to_json(), Err(ConversionError::InvalidEnumValue { enumeration: "FabricErrorCode", .. })));
    }
}
