use std::fmt::Debug;

use crate::json::{ConversionError, Value};

/// A closed enumeration with a fixed wire spelling per member.
///
/// Reading is lenient: unknown spellings fall back to the zero-value.
/// Writing is strict: members without a spelling cannot be written.
pub trait WireEnum: Copy + Default + Debug + 'static {
    const NAME: &'static str;

    /// All members in declared order.
    const MEMBERS: &'static [Self];

    fn wire_name(self) -> Option<&'static str>;

    fn from_wire(value: &str) -> Self {
        Self::MEMBERS.iter()
            .copied()
            .find(|member| member.wire_name()
                .is_some_and(|name| name.eq_ignore_ascii_case(value))
            )
            .unwrap_or_default()
    }

    fn to_wire(self) -> Result<&'static str, ConversionError> {
        self.wire_name()
            .ok_or_else(|| ConversionError::InvalidEnumValue {
                enumeration: Self::NAME,
                value: format!("{self:?}"),
            })
    }
}

pub fn read_enum<E: WireEnum>(value: Value) -> Result<E, ConversionError> {
    match value {
        Value::String(value) => Ok(E::from_wire(&value)),
        other => Err(ConversionError::unexpected_type("string", &other)),
    }
}

pub fn write_enum<E: WireEnum>(value: E) -> Result<Value, ConversionError> {
    value.to_wire()
        .map(|name| Value::String(name.to_owned()))
}

/// Declares an enumeration together with its wire table.
///
/// Members are listed in declared order, each optionally followed by `=> "Spelling"`.
/// The zero-value is marked with `#[default]`; leaving it without a spelling makes it
/// unwritable.
///
/// ```
/// sfclient_types::wire_enum! {
///     pub enum Color {
///         #[default]
///         Invalid => "Invalid",
///         Red => "Red",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (@spelling $wire:literal) => { ::core::option::Option::Some($wire) };
    (@spelling) => { ::core::option::Option::None };
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_attr:meta])*
                $variant:ident $(=> $wire:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_attr])*
                $variant,
            )+
        }

        impl $crate::json::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [Self] = &[$(Self::$variant),+];

            fn wire_name(self) -> ::core::option::Option<&'static str> {
                match self {
                    $(Self::$variant => $crate::wire_enum!(@spelling $($wire)?),)+
                }
            }
        }

        impl $crate::json::JsonValue for $name {
            fn from_json(value: $crate::json::Value) -> ::core::result::Result<Self, $crate::json::ConversionError> {
                $crate::json::enumeration::read_enum(value)
            }

            fn to_json(&self) -> ::core::result::Result<$crate::json::Value, $crate::json::ConversionError> {
                $crate::json::enumeration::write_enum(*self)
            }
        }
    };
}


#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use crate::json::JsonValue;

    use super::*;

    wire_enum! {
        enum ScheduleStatus {
            #[default]
            Invalid => "Invalid",
            Stopped => "Stopped",
            Active => "Active",
            Expired => "Expired",
            Pending => "Pending",
        }
    }

    wire_enum! {
        enum Mechanism {
            #[default]
            Unknown,
            AddRemoveReplica => "AddRemoveReplica",
        }
    }

    #[rstest]
    #[case("active", ScheduleStatus::Active)]
    #[case("EXPIRED", ScheduleStatus::Expired)]
    #[case("Pending", ScheduleStatus::Pending)]
    #[case("bogus", ScheduleStatus::Invalid)]
    #[case("", ScheduleStatus::Invalid)]
    fn should_read_leniently(#[case] wire: &str, #[case] expected: ScheduleStatus) {
        assert_that!(ScheduleStatus::from_wire(wire), eq(expected));
    }

    #[test]
    fn should_write_the_exact_spelling() -> anyhow::Result<()> {
        assert_that!(ScheduleStatus::Active.to_json()?, eq(json!("Active")));
        Ok(())
    }

    #[test]
    fn should_write_a_spelled_zero_value() -> anyhow::Result<()> {
        assert_that!(ScheduleStatus::default().to_json()?, eq(json!("Invalid")));
        Ok(())
    }

    #[test]
    fn should_refuse_to_write_an_unspelled_zero_value() {
        let result = Mechanism::default().to_json();

        match result {
            Err(ConversionError::InvalidEnumValue { enumeration, value }) => {
                assert_that!(enumeration, eq("Mechanism"));
                assert_that!(value, eq("Unknown"));
            }
            other => panic!("Expected InvalidEnumValue, got {other:?}"),
        }
    }

    #[test]
    fn should_read_unknown_values_of_unspelled_tables_as_zero_value() -> anyhow::Result<()> {
        assert_that!(Mechanism::from_json(json!("Unknown"))?, eq(Mechanism::Unknown));
        assert_that!(Mechanism::from_json(json!("addremovereplica"))?, eq(Mechanism::AddRemoveReplica));
        Ok(())
    }

    #[test]
    fn should_reject_non_string_values() {
        let result = ScheduleStatus::from_json(json!(2));

        assert!(matches!(result, Err(ConversionError::UnexpectedType { expected: "string", found: "number" })));
    }
}
