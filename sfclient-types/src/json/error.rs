#[derive(thiserror::Error, Debug)]
pub enum ConversionError {
    #[error("Object of type '{union}' does not start with its discriminator property '{expected}'.")]
    MissingDiscriminator {
        union: &'static str,
        expected: &'static str,
    },
    #[error("Incorrect discriminator property name '{found}', expected discriminator property name is '{expected}'.")]
    MalformedDiscriminator {
        expected: &'static str,
        found: String,
    },
    #[error("Unknown kind '{kind}' for type '{union}'.")]
    UnknownVariant {
        union: &'static str,
        kind: String,
    },
    #[error("Invalid value '{value}' for enum type '{enumeration}'.")]
    InvalidEnumValue {
        enumeration: &'static str,
        value: String,
    },
    #[error("Expected {expected}, found {found}.")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Could not parse '{value}' as {expected}:\n  {cause}")]
    InvalidValue {
        expected: &'static str,
        value: String,
        cause: String,
    },
    #[error("Malformed JSON:\n  {0}")]
    Json(#[from] serde_json::Error),
}

impl ConversionError {
    pub(crate) fn unexpected_type(expected: &'static str, found: &serde_json::Value) -> Self {
        Self::UnexpectedType {
            expected,
            found: json_type_name(found),
        }
    }
}

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
