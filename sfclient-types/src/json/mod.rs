//! Converter layer between JSON wire payloads and the typed model.
//!
//! Every wire type implements [`JsonValue`]. Object-shaped types implement [`JsonObject`]
//! instead and get [`JsonValue`] for free: their field readers scan an [`ObjectReader`],
//! their writers fill an [`ObjectWriter`]. Tagged unions route both directions through the
//! [`discriminator`] engine, enumerations through [`enumeration`].

pub use serde_json::Value;

pub use discriminator::{read_discriminated, write_discriminated, Discriminated, Variant};
pub use enumeration::WireEnum;
pub use error::ConversionError;
pub use reader::{ObjectReader, Property};
pub use writer::ObjectWriter;

pub mod discriminator;
pub mod enumeration;
mod error;
mod reader;
mod value;
mod writer;

pub trait JsonValue: Sized {
    fn from_json(value: Value) -> Result<Self, ConversionError>;
    fn to_json(&self) -> Result<Value, ConversionError>;
}

pub trait JsonObject: Sized {
    /// Reads the remaining properties of the current object, through to its end.
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError>;
    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError>;
}

/// Fields shared by several object types, read as part of the enclosing object's scan.
pub trait FieldGroup: Default {
    /// Consumes the property if it belongs to the group, hands it back otherwise.
    fn accept(&mut self, property: Property) -> Result<Option<Property>, ConversionError>;
    fn write_fields(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError>;
}

impl<T: JsonObject> JsonValue for T {
    fn from_json(value: Value) -> Result<Self, ConversionError> {
        let mut reader = ObjectReader::from_value(value)?;
        T::read_properties(&mut reader)
    }

    fn to_json(&self) -> Result<Value, ConversionError> {
        let mut writer = ObjectWriter::new();
        self.write_properties(&mut writer)?;
        Ok(writer.finish())
    }
}

pub fn from_slice<T: JsonValue>(body: &[u8]) -> Result<T, ConversionError> {
    let value = serde_json::from_slice::<Value>(body)?;
    T::from_json(value)
}

pub fn from_str<T: JsonValue>(body: &str) -> Result<T, ConversionError> {
    let value = serde_json::from_str::<Value>(body)?;
    T::from_json(value)
}

pub fn to_vec<T: JsonValue>(value: &T) -> Result<Vec<u8>, ConversionError> {
    let value = value.to_json()?;
    Ok(serde_json::to_vec(&value)?)
}

pub fn to_string<T: JsonValue>(value: &T) -> Result<String, ConversionError> {
    let value = value.to_json()?;
    Ok(serde_json::to_string(&value)?)
}
