use crate::json::{read_discriminated, write_discriminated, ConversionError, Discriminated, JsonObject, ObjectReader, ObjectWriter, Variant};
use crate::scaling::AutoScalingMetric;
use crate::wire_enum;

wire_enum! {
    pub enum AutoScalingTriggerKind {
        #[default]
        Unknown,
        AverageLoad => "AverageLoad",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AutoScalingTrigger {
    AverageLoad(AverageLoadScalingTrigger),
}

/// Scales when the load averaged over all replicas leaves the threshold band.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AverageLoadScalingTrigger {
    pub metric: Option<AutoScalingMetric>,
    pub lower_load_threshold: Option<f64>,
    pub upper_load_threshold: Option<f64>,
    pub scale_interval_in_seconds: Option<i32>,
}

fn read_average_load(reader: &mut ObjectReader) -> Result<AutoScalingTrigger, ConversionError> {
    let mut trigger = AverageLoadScalingTrigger::default();
    while let Some(property) = reader.next_property() {
        if property.is("metric") {
            trigger.metric = property.read()?;
        } else if property.is("lowerLoadThreshold") {
            trigger.lower_load_threshold = property.read()?;
        } else if property.is("upperLoadThreshold") {
            trigger.upper_load_threshold = property.read()?;
        } else if property.is("scaleIntervalInSeconds") {
            trigger.scale_interval_in_seconds = property.read()?;
        } else {
            property.skip();
        }
    }
    Ok(AutoScalingTrigger::AverageLoad(trigger))
}

impl Discriminated for AutoScalingTrigger {
    type Kind = AutoScalingTriggerKind;

    const DISCRIMINATOR: &'static str = "kind";

    const VARIANTS: &'static [Variant<Self>] = &[
        Variant { kind: AutoScalingTriggerKind::AverageLoad, read: read_average_load },
    ];

    fn kind(&self) -> AutoScalingTriggerKind {
        match self {
            AutoScalingTrigger::AverageLoad(_) => AutoScalingTriggerKind::AverageLoad,
        }
    }

    fn write_variant(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        match self {
            AutoScalingTrigger::AverageLoad(trigger) => {
                writer.write_required("metric", trigger.metric.as_ref())?;
                writer.write_required("lowerLoadThreshold", trigger.lower_load_threshold.as_ref())?;
                writer.write_required("upperLoadThreshold", trigger.upper_load_threshold.as_ref())?;
                writer.write_required("scaleIntervalInSeconds", trigger.scale_interval_in_seconds.as_ref())
            }
        }
    }
}

impl JsonObject for AutoScalingTrigger {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        read_discriminated(reader)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        write_discriminated(self, writer)
    }
}


#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use crate::json::JsonValue;

    use super::*;

    #[test]
    fn should_write_unset_required_fields_as_null() -> anyhow::Result<()> {
        let trigger = AutoScalingTrigger::AverageLoad(AverageLoadScalingTrigger::default());

        assert_that!(trigger.to_json()?, eq(json!({
            "kind": "AverageLoad",
            "metric": null,
            "lowerLoadThreshold": null,
            "upperLoadThreshold": null,
            "scaleIntervalInSeconds": null,
        })));
        assert_that!(AutoScalingTrigger::from_json(trigger.to_json()?)?, eq(trigger));
        Ok(())
    }

    #[test]
    fn should_reject_mistyped_thresholds() {
        let result = AutoScalingTrigger::from_json(json!({ "kind": "AverageLoad", "lowerLoadThreshold": "low" }));

        assert!(matches!(result, Err(ConversionError::UnexpectedType { expected: "number", found: "string" })));
    }
}
