use crate::json::{read_discriminated, write_discriminated, ConversionError, Discriminated, JsonObject, ObjectReader, ObjectWriter, Variant};
use crate::wire_enum;

wire_enum! {
    pub enum AutoScalingMetricKind {
        #[default]
        Resource => "Resource",
    }
}

wire_enum! {
    pub enum AutoScalingResourceMetricName {
        #[default]
        Cpu => "cpu",
        MemoryInGb => "memoryInGB",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AutoScalingMetric {
    Resource(AutoScalingResourceMetric),
}

/// A metric measuring the usage of one of the service's resources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AutoScalingResourceMetric {
    pub name: Option<AutoScalingResourceMetricName>,
}

fn read_resource(reader: &mut ObjectReader) -> Result<AutoScalingMetric, ConversionError> {
    let mut metric = AutoScalingResourceMetric::default();
    while let Some(property) = reader.next_property() {
        if property.is("name") {
            metric.name = property.read()?;
        } else {
            property.skip();
        }
    }
    Ok(AutoScalingMetric::Resource(metric))
}

impl Discriminated for AutoScalingMetric {
    type Kind = AutoScalingMetricKind;

    const DISCRIMINATOR: &'static str = "kind";

    const VARIANTS: &'static [Variant<Self>] = &[
        Variant { kind: AutoScalingMetricKind::Resource, read: read_resource },
    ];

    fn kind(&self) -> AutoScalingMetricKind {
        match self {
            AutoScalingMetric::Resource(_) => AutoScalingMetricKind::Resource,
        }
    }

    fn write_variant(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        match self {
            AutoScalingMetric::Resource(metric) => writer.write_required("name", metric.name.as_ref()),
        }
    }
}

impl JsonObject for AutoScalingMetric {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        read_discriminated(reader)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        write_discriminated(self, writer)
    }
}
