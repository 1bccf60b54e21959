//! Dispatch for tagged unions.
//!
//! A union names its discriminator property and lists its variants in a closed table,
//! built at compile time. Reading takes the discriminator from the first property of the
//! object and hands the remaining properties to the matching variant reader. Writing puts
//! the discriminator first, followed by the variant's own fields.

use std::any::type_name;

use crate::json::{ConversionError, ObjectReader, ObjectWriter, WireEnum};

pub trait Discriminated: Sized + 'static {
    type Kind: WireEnum;

    /// Wire spelling of the discriminator property, e.g. `kind` or `Kind`.
    const DISCRIMINATOR: &'static str;

    const VARIANTS: &'static [Variant<Self>];

    fn kind(&self) -> Self::Kind;

    /// Writes every field of the variant except the discriminator.
    fn write_variant(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError>;
}

pub struct Variant<U: Discriminated> {
    pub kind: U::Kind,
    /// Continues on the cursor right after the discriminator, through to the end of the object.
    pub read: fn(&mut ObjectReader) -> Result<U, ConversionError>,
}

pub fn read_discriminated<U: Discriminated>(reader: &mut ObjectReader) -> Result<U, ConversionError> {
    let property = reader.next_property()
        .ok_or(ConversionError::MissingDiscriminator {
            union: type_name::<U>(),
            expected: U::DISCRIMINATOR,
        })?;

    if !property.is(U::DISCRIMINATOR) {
        return Err(ConversionError::MalformedDiscriminator {
            expected: U::DISCRIMINATOR,
            found: property.name().to_owned(),
        });
    }

    let kind = property.read::<String>()?
        .unwrap_or_default();

    let variant = U::VARIANTS.iter()
        .find(|variant| variant.kind.wire_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(&kind))
        )
        .ok_or_else(|| ConversionError::UnknownVariant {
            union: type_name::<U>(),
            kind,
        })?;

    (variant.read)(reader)
}

pub fn write_discriminated<U: Discriminated>(value: &U, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
    let kind = value.kind().to_wire()?;
    writer.write_str(U::DISCRIMINATOR, kind);
    value.write_variant(writer)
}


#[cfg(test)]
mod tests {
    use std::result::Result;

    use googletest::prelude::*;
    use serde_json::json;

    use crate::json::{self, JsonObject, JsonValue, Value};
    use crate::wire_enum;

    use super::*;

    wire_enum! {
        enum ShapeKind {
            #[default]
            Unknown,
            Shape => "Shape",
            Circle => "Circle",
            Square => "Square",
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Circle {
        name: Option<String>,
        radius: Option<f64>,
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Square {
        name: Option<String>,
        side: Option<i64>,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Shape {
        Plain { name: Option<String> },
        Circle(Circle),
        Square(Square),
    }

    fn read_name(reader: &mut ObjectReader) -> Result<Shape, ConversionError> {
        let mut name = None;
        while let Some(property) = reader.next_property() {
            if property.is("name") {
                name = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(Shape::Plain { name })
    }

    fn read_circle(reader: &mut ObjectReader) -> Result<Shape, ConversionError> {
        let mut circle = Circle::default();
        while let Some(property) = reader.next_property() {
            if property.is("name") {
                circle.name = property.read()?;
            } else if property.is("radius") {
                circle.radius = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(Shape::Circle(circle))
    }

    fn read_square(reader: &mut ObjectReader) -> Result<Shape, ConversionError> {
        let mut square = Square::default();
        while let Some(property) = reader.next_property() {
            if property.is("name") {
                square.name = property.read()?;
            } else if property.is("side") {
                square.side = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(Shape::Square(square))
    }

    impl Discriminated for Shape {
        type Kind = ShapeKind;
        const DISCRIMINATOR: &'static str = "kind";
        const VARIANTS: &'static [Variant<Self>] = &[
            Variant { kind: ShapeKind::Shape, read: read_name },
            Variant { kind: ShapeKind::Circle, read: read_circle },
            Variant { kind: ShapeKind::Square, read: read_square },
        ];

        fn kind(&self) -> ShapeKind {
            match self {
                Shape::Plain { .. } => ShapeKind::Shape,
                Shape::Circle(_) => ShapeKind::Circle,
                Shape::Square(_) => ShapeKind::Square,
            }
        }

        fn write_variant(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
            match self {
                Shape::Plain { name } => writer.write_required("name", name.as_ref()),
                Shape::Circle(circle) => {
                    writer.write_required("name", circle.name.as_ref())?;
                    writer.write_optional("radius", circle.radius.as_ref())
                }
                Shape::Square(square) => {
                    writer.write_required("name", square.name.as_ref())?;
                    writer.write_optional("side", square.side.as_ref())
                }
            }
        }
    }

    impl JsonObject for Shape {
        fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
            read_discriminated(reader)
        }

        fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
            write_discriminated(self, writer)
        }
    }

    #[test]
    fn should_dispatch_to_the_variant_named_by_the_discriminator() -> anyhow::Result<()> {
        let shape = Shape::from_json(json!({ "kind": "circle", "radius": 2.5, "name": "wheel" }))?;

        assert_that!(shape, eq(Shape::Circle(Circle { name: Some(String::from("wheel")), radius: Some(2.5) })));
        Ok(())
    }

    #[test]
    fn should_accept_a_case_insensitive_discriminator_name() -> anyhow::Result<()> {
        let shape = Shape::from_json(json!({ "KIND": "Square", "side": 3 }))?;

        assert_that!(shape, eq(Shape::Square(Square { name: None, side: Some(3) })));
        Ok(())
    }

    #[test]
    fn should_parse_the_base_tag_with_the_base_field_set() -> anyhow::Result<()> {
        let shape = Shape::from_json(json!({ "kind": "Shape", "name": "blob", "radius": 1.0 }))?;

        assert_that!(shape, eq(Shape::Plain { name: Some(String::from("blob")) }));
        Ok(())
    }

    #[test]
    fn should_fail_for_an_unknown_kind() {
        let result = Shape::from_json(json!({ "kind": "Triangle", "side": 3 }));

        match result {
            Err(ConversionError::UnknownVariant { kind, .. }) => assert_that!(kind, eq("Triangle")),
            other => panic!("Expected UnknownVariant, got {other:?}"),
        }
    }

    #[test]
    fn should_fail_when_the_first_property_is_not_the_discriminator() {
        let result = Shape::from_json(json!({ "name": "wheel", "kind": "Circle" }));

        match result {
            Err(ConversionError::MalformedDiscriminator { expected, found }) => {
                assert_that!(expected, eq("kind"));
                assert_that!(found, eq("name"));
            }
            other => panic!("Expected MalformedDiscriminator, got {other:?}"),
        }
    }

    #[test]
    fn should_fail_for_an_empty_object() {
        let result = Shape::from_json(json!({}));

        assert!(matches!(result, Err(ConversionError::MissingDiscriminator { expected: "kind", .. })));
    }

    #[test]
    fn should_treat_a_null_kind_as_unknown() {
        let result = Shape::from_json(json!({ "kind": null }));

        assert!(matches!(result, Err(ConversionError::UnknownVariant { kind, .. }) if kind.is_empty()));
    }

    #[test]
    fn should_propagate_variant_errors_out_of_enclosing_lists() {
        let result = json::from_str::<Vec<Shape>>(r#"[{"kind":"Circle"},{"kind":"Hexagon"}]"#);

        assert!(matches!(result, Err(ConversionError::UnknownVariant { kind, .. }) if kind == "Hexagon"));
    }

    #[test]
    fn should_write_the_discriminator_first() -> anyhow::Result<()> {
        let shape = Shape::Square(Square { name: Some(String::from("tile")), side: None });

        assert_that!(json::to_string(&shape)?, eq(r#"{"kind":"Square","name":"tile"}"#));
        Ok(())
    }

    #[test]
    fn should_read_back_what_was_written() -> anyhow::Result<()> {
        let shape = Shape::Circle(Circle { name: None, radius: Some(0.5) });

        let value: Value = shape.to_json()?;

        assert_that!(value, eq(json!({ "kind": "Circle", "name": null, "radius": 0.5 })));
        assert_that!(Shape::from_json(value)?, eq(shape));
        Ok(())
    }
}
