use crate::json::{ConversionError, JsonObject, JsonValue, ObjectReader, ObjectWriter};

/// One page of a list result. An absent or empty continuation token marks the last page.
#[derive(Clone, Debug, PartialEq)]
pub struct PagedData<T> {
    pub continuation_token: Option<String>,
    pub items: Vec<T>,
}

impl<T> PagedData<T> {
    pub fn is_last_page(&self) -> bool {
        self.continuation_token.as_deref()
            .map_or(true, str::is_empty)
    }
}

impl<T> Default for PagedData<T> {
    fn default() -> Self {
        Self {
            continuation_token: None,
            items: Vec::new(),
        }
    }
}

impl<T: JsonValue> JsonObject for PagedData<T> {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut page = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("ContinuationToken") {
                page.continuation_token = property.read()?;
            } else if property.is("Items") {
                page.items = property.read()?.unwrap_or_default();
            } else {
                property.skip();
            }
        }
        Ok(page)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_optional("ContinuationToken", self.continuation_token.as_ref())?;
        writer.write("Items", &self.items)
    }
}
