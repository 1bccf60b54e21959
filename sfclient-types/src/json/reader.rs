use serde_json::{Map, Value};

use crate::json::{ConversionError, JsonValue};

/// Cursor over the properties of a single JSON object, in the order they arrived on the wire.
///
/// Field readers pull properties one at a time with [`ObjectReader::next_property`] until the
/// end of the object is reached. Every property handed out must either be read or skipped.
pub struct ObjectReader {
    properties: serde_json::map::IntoIter,
}

impl ObjectReader {
    pub fn new(object: Map<String, Value>) -> Self {
        Self {
            properties: object.into_iter(),
        }
    }

    pub fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Object(object) => Ok(Self::new(object)),
            other => Err(ConversionError::unexpected_type("object", &other)),
        }
    }

    /// Returns `None` once the end of the object is reached.
    pub fn next_property(&mut self) -> Option<Property> {
        self.properties.next()
            .map(|(name, value)| Property { name, value })
    }
}

#[derive(Debug)]
pub struct Property {
    name: String,
    value: Value,
}

impl Property {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Property names are matched case-insensitively.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Consumes the value with the codec of `T`. A JSON `null` reads as `None`.
    pub fn read<T: JsonValue>(self) -> Result<Option<T>, ConversionError> {
        match self.value {
            Value::Null => Ok(None),
            value => T::from_json(value).map(Some),
        }
    }

    /// Consumes and discards the value, whatever its shape.
    pub fn skip(self) {
        drop(self.value);
    }
}


#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;

    fn reader(value: Value) -> ObjectReader {
        ObjectReader::from_value(value).unwrap()
    }

    #[test]
    fn should_hand_out_properties_in_arrival_order() {
        let mut reader = reader(json!({
            "zeta": 1,
            "alpha": 2,
            "Mid": 3,
        }));

        let mut names = vec![];
        while let Some(property) = reader.next_property() {
            names.push(property.name().to_owned());
            property.skip();
        }

        assert_that!(names, elements_are![eq("zeta"), eq("alpha"), eq("Mid")]);
    }

    #[test]
    fn should_match_property_names_case_insensitively() {
        let mut reader = reader(json!({ "MaxInstanceCount": 5 }));

        let property = reader.next_property().unwrap();

        assert_that!(property.is("maxInstanceCount"), eq(true));
        assert_that!(property.is("maxInstance"), eq(false));
    }

    #[test]
    fn should_read_null_as_absent() -> anyhow::Result<()> {
        let mut reader = reader(json!({ "name": null }));

        let value = reader.next_property().unwrap().read::<String>()?;

        assert_that!(value, none());
        Ok(())
    }

    #[test]
    fn should_skip_nested_values_and_continue_with_the_next_property() -> anyhow::Result<()> {
        let mut reader = reader(json!({
            "nested": { "deeper": { "list": [1, 2, { "x": [] }] } },
            "array": [[{ "a": 1 }], []],
            "name": "fabric:/app",
        }));

        reader.next_property().unwrap().skip();
        reader.next_property().unwrap().skip();
        let name = reader.next_property().unwrap().read::<String>()?;

        assert_that!(name, some(eq("fabric:/app")));
        assert_that!(reader.next_property(), none());
        Ok(())
    }

    #[test]
    fn should_reject_non_object_values() {
        let result = ObjectReader::from_value(json!([1, 2]));

        assert!(matches!(result, Err(ConversionError::UnexpectedType { expected: "object", found: "array" })));
    }
}
