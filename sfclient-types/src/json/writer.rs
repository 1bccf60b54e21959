use serde_json::{Map, Value};

use crate::json::{ConversionError, JsonValue};

/// Collects the properties of a single JSON object in the order they are written.
#[derive(Debug, Default)]
pub struct ObjectWriter {
    properties: Map<String, Value>,
}

impl ObjectWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write<T: JsonValue>(&mut self, name: &str, value: &T) -> Result<(), ConversionError> {
        let value = value.to_json()?;
        self.properties.insert(name.to_owned(), value);
        Ok(())
    }

    pub fn write_str(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_owned(), Value::String(value.to_owned()));
    }

    /// Required properties are always written, as `null` when unset.
    pub fn write_required<T: JsonValue>(&mut self, name: &str, value: Option<&T>) -> Result<(), ConversionError> {
        match value {
            Some(value) => self.write(name, value),
            None => {
                self.properties.insert(name.to_owned(), Value::Null);
                Ok(())
            }
        }
    }

    /// Optional properties are only written when set.
    pub fn write_optional<T: JsonValue>(&mut self, name: &str, value: Option<&T>) -> Result<(), ConversionError> {
        match value {
            Some(value) => self.write(name, value),
            None => Ok(()),
        }
    }

    pub fn finish(self) -> Value {
        Value::Object(self.properties)
    }
}


#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn should_keep_write_order() -> anyhow::Result<()> {
        let mut writer = ObjectWriter::new();
        writer.write_str("kind", "AddRemoveReplica");
        writer.write("minInstanceCount", &1)?;
        writer.write("maxInstanceCount", &5)?;

        let value = writer.finish();

        assert_that!(
            serde_json::to_string(&value)?,
            eq(r#"{"kind":"AddRemoveReplica","minInstanceCount":1,"maxInstanceCount":5}"#)
        );
        Ok(())
    }

    #[test]
    fn should_write_unset_required_properties_as_null_and_omit_unset_optional_ones() -> anyhow::Result<()> {
        let mut writer = ObjectWriter::new();
        writer.write_required::<String>("NodeInstanceId", None)?;
        writer.write_optional::<String>("Description", None)?;

        assert_that!(writer.finish(), eq(json!({ "NodeInstanceId": null })));
        Ok(())
    }
}
