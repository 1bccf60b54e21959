use std::fmt;

use uuid::Uuid;

use crate::json::{ConversionError, JsonValue, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PartitionId(pub Uuid);

impl PartitionId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for PartitionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

#[derive(thiserror::Error, Clone, Debug)]
#[error("Illegal PartitionId: {value}")]
pub struct IllegalPartitionId {
    pub value: String,
}

impl TryFrom<&str> for PartitionId {
    type Error = IllegalPartitionId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uuid::parse_str(value).map(Self).map_err(|_| IllegalPartitionId {
            value: String::from(value),
        })
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl JsonValue for PartitionId {
    fn from_json(value: Value) -> Result<Self, ConversionError> {
        Uuid::from_json(value).map(Self)
    }

    fn to_json(&self) -> Result<Value, ConversionError> {
        self.0.to_json()
    }
}

/// Declares a string-valued identifier. Numeric wire values are accepted and kept as text.
macro_rules! string_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl $name {
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(String::from(value))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl JsonValue for $name {
            fn from_json(value: Value) -> Result<Self, ConversionError> {
                String::from_json(value).map(Self)
            }

            fn to_json(&self) -> Result<Value, ConversionError> {
                self.0.to_json()
            }
        }
    };
}

string_id!(
    /// Replica id of a stateful service replica, or instance id of a stateless one.
    ReplicaId
);
string_id!(NodeName);
string_id!(
    /// Full service name including the `fabric:` URI scheme.
    ServiceName
);
string_id!(
    /// Service name without the `fabric:` scheme and with `/` replaced by `~`, as used in paths.
    ServiceId
);
string_id!(NodeInstanceId);
