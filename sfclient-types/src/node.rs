use crate::ids::{NodeInstanceId, NodeName};
use crate::json::{ConversionError, JsonObject, ObjectReader, ObjectWriter};
use crate::wire_enum;

wire_enum! {
    /// Whether to collect a dump of the fabric node process when restarting.
    pub enum CreateFabricDump {
        #[default]
        False => "False",
        True => "True",
    }
}

wire_enum! {
    pub enum NodeTransitionType {
        #[default]
        Invalid => "Invalid",
        Start => "Start",
        Stop => "Stop",
    }
}

wire_enum! {
    /// State of a long running fault operation.
    pub enum OperationState {
        #[default]
        Invalid => "Invalid",
        Running => "Running",
        RollingBack => "RollingBack",
        Completed => "Completed",
        Faulted => "Faulted",
        Cancelled => "Cancelled",
        ForceCancelled => "ForceCancelled",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RestartNodeDescription {
    /// `0` restarts whatever instance is currently running.
    pub node_instance_id: Option<String>,
    pub create_fabric_dump: Option<CreateFabricDump>,
}

impl JsonObject for RestartNodeDescription {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut description = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("NodeInstanceId") {
                description.node_instance_id = property.read()?;
            } else if property.is("CreateFabricDump") {
                description.create_fabric_dump = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(description)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_required("NodeInstanceId", self.node_instance_id.as_ref())?;
        writer.write_required("CreateFabricDump", self.create_fabric_dump.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeResult {
    pub node_name: Option<NodeName>,
    pub node_instance_id: Option<NodeInstanceId>,
}

impl JsonObject for NodeResult {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut result = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("NodeName") {
                result.node_name = property.read()?;
            } else if property.is("NodeInstanceId") {
                result.node_instance_id = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(result)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_optional("NodeName", self.node_name.as_ref())?;
        writer.write_optional("NodeInstanceId", self.node_instance_id.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeTransitionResult {
    /// HRESULT of the operation, `0` on success.
    pub error_code: Option<i32>,
    pub node_result: Option<NodeResult>,
}

impl JsonObject for NodeTransitionResult {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut result = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("ErrorCode") {
                result.error_code = property.read()?;
            } else if property.is("NodeResult") {
                result.node_result = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(result)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_optional("ErrorCode", self.error_code.as_ref())?;
        writer.write_optional("NodeResult", self.node_result.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeTransitionProgress {
    pub state: Option<OperationState>,
    pub node_transition_result: Option<NodeTransitionResult>,
}

impl JsonObject for NodeTransitionProgress {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut progress = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("State") {
                progress.state = property.read()?;
            } else if property.is("NodeTransitionResult") {
                progress.node_transition_result = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(progress)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_optional("State", self.state.as_ref())?;
        writer.write_optional("NodeTransitionResult", self.node_transition_result.as_ref())
    }
}
