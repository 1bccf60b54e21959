//! Autoscaling policies of mesh services.
//!
//! A policy pairs a trigger, deciding *when* to scale, with a mechanism, deciding *how*.
//! Both, as well as the metric a trigger observes, are tagged unions discriminated by `kind`.

use crate::json::{ConversionError, JsonObject, ObjectReader, ObjectWriter};

pub use mechanism::{AddRemoveReplicaScalingMechanism, AutoScalingMechanism, AutoScalingMechanismKind};
pub use metric::{AutoScalingMetric, AutoScalingMetricKind, AutoScalingResourceMetric, AutoScalingResourceMetricName};
pub use trigger::{AutoScalingTrigger, AutoScalingTriggerKind, AverageLoadScalingTrigger};

mod mechanism;
mod metric;
mod trigger;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AutoScalingPolicy {
    pub name: Option<String>,
    pub trigger: Option<AutoScalingTrigger>,
    pub mechanism: Option<AutoScalingMechanism>,
}

impl JsonObject for AutoScalingPolicy {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut policy = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("name") {
                policy.name = property.read()?;
            } else if property.is("trigger") {
                policy.trigger = property.read()?;
            } else if property.is("mechanism") {
                policy.mechanism = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(policy)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_required("name", self.name.as_ref())?;
        writer.write_required("trigger", self.trigger.as_ref())?;
        writer.write_required("mechanism", self.mechanism.as_ref())
    }
}


#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use crate::json::JsonValue;

    use super::*;

    fn policy() -> AutoScalingPolicy {
        AutoScalingPolicy {
            name: Some(String::from("cpu-scaler")),
            trigger: Some(AutoScalingTrigger::AverageLoad(AverageLoadScalingTrigger {
                metric: Some(AutoScalingMetric::Resource(AutoScalingResourceMetric {
                    name: Some(AutoScalingResourceMetricName::Cpu),
                })),
                lower_load_threshold: Some(0.2),
                upper_load_threshold: Some(0.8),
                scale_interval_in_seconds: Some(60),
            })),
            mechanism: Some(AutoScalingMechanism::AddRemoveReplica(AddRemoveReplicaScalingMechanism {
                min_instance_count: Some(1),
                max_instance_count: Some(5),
                scale_increment: Some(1),
            })),
        }
    }

    #[test]
    fn should_write_nested_unions_with_their_discriminators_first() -> anyhow::Result<()> {
        assert_that!(policy().to_json()?, eq(json!({
            "name": "cpu-scaler",
            "trigger": {
                "kind": "AverageLoad",
                "metric": { "kind": "Resource", "name": "cpu" },
                "lowerLoadThreshold": 0.2,
                "upperLoadThreshold": 0.8,
                "scaleIntervalInSeconds": 60,
            },
            "mechanism": {
                "kind": "AddRemoveReplica",
                "minInstanceCount": 1,
                "maxInstanceCount": 5,
                "scaleIncrement": 1,
            },
        })));
        Ok(())
    }

    #[test]
    fn should_read_back_a_written_policy() -> anyhow::Result<()> {
        let policy = policy();

        assert_that!(AutoScalingPolicy::from_json(policy.to_json()?)?, eq(policy));
        Ok(())
    }

    #[test]
    fn should_fail_the_policy_for_an_unknown_nested_trigger_kind() {
        let result = AutoScalingPolicy::from_json(json!({
            "name": "cpu-scaler",
            "trigger": { "kind": "PeakLoad", "metric": { "kind": "Resource", "name": "cpu" } },
        }));

        assert!(matches!(result, Err(ConversionError::UnknownVariant { kind, .. }) if kind == "PeakLoad"));
    }
}
