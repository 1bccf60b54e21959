use serde_json::{Number, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::json::{ConversionError, JsonValue};

impl JsonValue for String {
    fn from_json(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::String(value) => Ok(value),
            Value::Number(value) => Ok(value.to_string()),
            other => Err(ConversionError::unexpected_type("string", &other)),
        }
    }

    fn to_json(&self) -> Result<Value, ConversionError> {
        Ok(Value::String(Clone::clone(self)))
    }
}

impl JsonValue for i64 {
    fn from_json(value: Value) -> Result<Self, ConversionError> {
        value.as_i64()
            .ok_or_else(|| ConversionError::unexpected_type("integer", &value))
    }

    fn to_json(&self) -> Result<Value, ConversionError> {
        Ok(Value::from(*self))
    }
}

impl JsonValue for i32 {
    fn from_json(value: Value) -> Result<Self, ConversionError> {
        let wide = i64::from_json(value)?;
        i32::try_from(wide)
            .map_err(|cause| ConversionError::InvalidValue {
                expected: "32-bit integer",
                value: wide.to_string(),
                cause: cause.to_string(),
            })
    }

    fn to_json(&self) -> Result<Value, ConversionError> {
        Ok(Value::from(*self))
    }
}

impl JsonValue for f64 {
    fn from_json(value: Value) -> Result<Self, ConversionError> {
        value.as_f64()
            .ok_or_else(|| ConversionError::unexpected_type("number", &value))
    }

    fn to_json(&self) -> Result<Value, ConversionError> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or_else(|| ConversionError::InvalidValue {
                expected: "finite number",
                value: self.to_string(),
                cause: String::from("JSON cannot represent NaN or infinite values"),
            })
    }
}

impl JsonValue for bool {
    fn from_json(value: Value) -> Result<Self, ConversionError> {
        value.as_bool()
            .ok_or_else(|| ConversionError::unexpected_type("boolean", &value))
    }

    fn to_json(&self) -> Result<Value, ConversionError> {
        Ok(Value::Bool(*self))
    }
}

impl JsonValue for Uuid {
    fn from_json(value: Value) -> Result<Self, ConversionError> {
        let value = String::from_json(value)?;
        Uuid::parse_str(&value)
            .map_err(|cause| ConversionError::InvalidValue {
                expected: "GUID",
                value,
                cause: cause.to_string(),
            })
    }

    fn to_json(&self) -> Result<Value, ConversionError> {
        Ok(Value::String(self.hyphenated().to_string()))
    }
}

impl JsonValue for OffsetDateTime {
    fn from_json(value: Value) -> Result<Self, ConversionError> {
        let value = String::from_json(value)?;
        OffsetDateTime::parse(&value, &Rfc3339)
            .map_err(|cause| ConversionError::InvalidValue {
                expected: "RFC 3339 date-time",
                value,
                cause: cause.to_string(),
            })
    }

    fn to_json(&self) -> Result<Value, ConversionError> {
        self.format(&Rfc3339)
            .map(Value::String)
            .map_err(|cause| ConversionError::InvalidValue {
                expected: "RFC 3339 date-time",
                value: self.to_string(),
                cause: cause.to_string(),
            })
    }
}

impl<T: JsonValue> JsonValue for Vec<T> {
    fn from_json(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Array(elements) => elements.into_iter()
                .map(T::from_json)
                .collect(),
            other => Err(ConversionError::unexpected_type("array", &other)),
        }
    }

    fn to_json(&self) -> Result<Value, ConversionError> {
        self.iter()
            .map(T::to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}


#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;
    use time::macros::datetime;
    use uuid::uuid;

    use super::*;

    #[test]
    fn should_read_numbers_as_strings() -> anyhow::Result<()> {
        assert_that!(String::from_json(json!(131_843_278_492_731_054_i64))?, eq("131843278492731054"));
        Ok(())
    }

    #[test]
    fn should_reject_mismatched_primitive_types() {
        assert!(matches!(i64::from_json(json!("5")), Err(ConversionError::UnexpectedType { expected: "integer", found: "string" })));
        assert!(matches!(bool::from_json(json!(1)), Err(ConversionError::UnexpectedType { expected: "boolean", found: "number" })));
        assert!(matches!(Vec::<String>::from_json(json!({})), Err(ConversionError::UnexpectedType { expected: "array", found: "object" })));
    }

    #[test]
    fn should_reject_out_of_range_32_bit_integers() {
        let result = i32::from_json(json!(i64::from(i32::MAX) + 1));

        assert!(matches!(result, Err(ConversionError::InvalidValue { expected: "32-bit integer", .. })));
    }

    #[test]
    fn should_convert_guids() -> anyhow::Result<()> {
        let value = Uuid::from_json(json!("1A2B3C4D-0000-4000-8000-000000000001"))?;

        assert_that!(value, eq(uuid!("1a2b3c4d-0000-4000-8000-000000000001")));
        assert_that!(value.to_json()?, eq(json!("1a2b3c4d-0000-4000-8000-000000000001")));
        assert!(matches!(Uuid::from_json(json!("not-a-guid")), Err(ConversionError::InvalidValue { expected: "GUID", .. })));
        Ok(())
    }

    #[test]
    fn should_convert_date_times() -> anyhow::Result<()> {
        let value = OffsetDateTime::from_json(json!("2018-04-03T20:21:23.194Z"))?;

        assert_that!(value, eq(datetime!(2018-04-03 20:21:23.194 UTC)));
        assert_that!(OffsetDateTime::from_json(value.to_json()?)?, eq(value));
        Ok(())
    }

    #[test]
    fn should_convert_homogeneous_lists() -> anyhow::Result<()> {
        let value = Vec::<i64>::from_json(json!([1, 2, 3]))?;

        assert_that!(value, elements_are![eq(1), eq(2), eq(3)]);
        assert!(matches!(Vec::<i64>::from_json(json!([1, "2"])), Err(ConversionError::UnexpectedType { .. })));
        Ok(())
    }
}
