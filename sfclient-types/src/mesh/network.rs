use crate::json::{read_discriminated, write_discriminated, ConversionError, Discriminated, FieldGroup, JsonObject, ObjectReader, ObjectWriter, Property, Variant};
use crate::mesh::ResourceStatus;
use crate::wire_enum;

wire_enum! {
    pub enum NetworkKind {
        #[default]
        Unknown,
        Local => "Local",
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkResourceDescription {
    pub name: Option<String>,
    pub properties: Option<NetworkResourceProperties>,
}

impl JsonObject for NetworkResourceDescription {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut description = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("name") {
                description.name = property.read()?;
            } else if property.is("properties") {
                description.properties = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(description)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_required("name", self.name.as_ref())?;
        writer.write_required("properties", self.properties.as_ref())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NetworkResourceProperties {
    Local(LocalNetworkResourceProperties),
}

/// Properties every kind of network carries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkResourceCommon {
    pub description: Option<String>,
    /// Set by the cluster, ignored on create.
    pub status: Option<ResourceStatus>,
    pub status_details: Option<String>,
}

impl FieldGroup for NetworkResourceCommon {
    fn accept(&mut self, property: Property) -> Result<Option<Property>, ConversionError> {
        if property.is("description") {
            self.description = property.read()?;
        } else if property.is("status") {
            self.status = property.read()?;
        } else if property.is("statusDetails") {
            self.status_details = property.read()?;
        } else {
            return Ok(Some(property));
        }
        Ok(None)
    }

    fn write_fields(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_optional("description", self.description.as_ref())?;
        writer.write_optional("status", self.status.as_ref())?;
        writer.write_optional("statusDetails", self.status_details.as_ref())
    }
}

/// A network private to the containers of one application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocalNetworkResourceProperties {
    pub common: NetworkResourceCommon,
    /// Address space of the network, e.g. `10.0.0.0/22`.
    pub network_address_prefix: Option<String>,
}

fn read_local(reader: &mut ObjectReader) -> Result<NetworkResourceProperties, ConversionError> {
    let mut properties = LocalNetworkResourceProperties::default();
    while let Some(property) = reader.next_property() {
        let Some(property) = properties.common.accept(property)? else {
            continue;
        };
        if property.is("networkAddressPrefix") {
            properties.network_address_prefix = property.read()?;
        } else {
            property.skip();
        }
    }
    Ok(NetworkResourceProperties::Local(properties))
}

impl Discriminated for NetworkResourceProperties {
    type Kind = NetworkKind;

    const DISCRIMINATOR: &'static str = "kind";

    const VARIANTS: &'static [Variant<Self>] = &[
        Variant { kind: NetworkKind::Local, read: read_local },
    ];

    fn kind(&self) -> NetworkKind {
        match self {
            NetworkResourceProperties::Local(_) => NetworkKind::Local,
        }
    }

    fn write_variant(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        match self {
            NetworkResourceProperties::Local(properties) => {
                properties.common.write_fields(writer)?;
                writer.write_optional("networkAddressPrefix", properties.network_address_prefix.as_ref())
            }
        }
    }
}

impl JsonObject for NetworkResourceProperties {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        read_discriminated(reader)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        write_discriminated(self, writer)
    }
}
