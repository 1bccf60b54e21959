use crate::json::{read_discriminated, write_discriminated, ConversionError, Discriminated, JsonObject, ObjectReader, ObjectWriter, Variant};
use crate::wire_enum;

wire_enum! {
    pub enum AutoScalingMechanismKind {
        #[default]
        Unknown,
        AddRemoveReplica => "AddRemoveReplica",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AutoScalingMechanism {
    AddRemoveReplica(AddRemoveReplicaScalingMechanism),
}

/// Scales by adding or removing replicas, i.e. instances of the service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddRemoveReplicaScalingMechanism {
    pub min_instance_count: Option<i32>,
    pub max_instance_count: Option<i32>,
    /// Number of instances added or removed per scaling operation.
    pub scale_increment: Option<i32>,
}

impl JsonObject for AddRemoveReplicaScalingMechanism {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut mechanism = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("minInstanceCount") {
                mechanism.min_instance_count = property.read()?;
            } else if property.is("maxInstanceCount") {
                mechanism.max_instance_count = property.read()?;
            } else if property.is("scaleIncrement") {
                mechanism.scale_increment = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(mechanism)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_required("minInstanceCount", self.min_instance_count.as_ref())?;
        writer.write_required("maxInstanceCount", self.max_instance_count.as_ref())?;
        writer.write_required("scaleIncrement", self.scale_increment.as_ref())
    }
}

fn read_add_remove_replica(reader: &mut ObjectReader) -> Result<AutoScalingMechanism, ConversionError> {
    AddRemoveReplicaScalingMechanism::read_properties(reader)
        .map(AutoScalingMechanism::AddRemoveReplica)
}

impl Discriminated for AutoScalingMechanism {
    type Kind = AutoScalingMechanismKind;

    const DISCRIMINATOR: &'static str = "kind";

    const VARIANTS: &'static [Variant<Self>] = &[
        Variant { kind: AutoScalingMechanismKind::AddRemoveReplica, read: read_add_remove_replica },
    ];

    fn kind(&self) -> AutoScalingMechanismKind {
        match self {
            AutoScalingMechanism::AddRemoveReplica(_) => AutoScalingMechanismKind::AddRemoveReplica,
        }
    }

    fn write_variant(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        match self {
            AutoScalingMechanism::AddRemoveReplica(mechanism) => mechanism.write_properties(writer),
        }
    }
}

impl JsonObject for AutoScalingMechanism {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        read_discriminated(reader)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        write_discriminated(self, writer)
    }
}
