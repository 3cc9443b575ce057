use graph_serialization::{
    create_from_bytes, deserialize_with_table, serialize_content, AdditionalData,
    AdditionalDataHolder, FieldDeserializers, FieldValue, HasFieldDeserializers, ParseNode,
    ParseNodeExt, Parsable, SerializationError, SerializationWriter,
};
use serde_json::{json, Value};

#[derive(Debug, Default, PartialEq)]
struct Address {
    additional_data: AdditionalData,
    city: Option<String>,
}

#[derive(Debug, Default, PartialEq)]
struct Contact {
    additional_data: AdditionalData,
    name: Option<String>,
    age: Option<i32>,
    tags: Option<Vec<String>>,
    home: Option<Address>,
}

fn create_address(_: &dyn ParseNode) -> Result<Address, SerializationError> {
    Ok(Address::default())
}

fn create_contact(_: &dyn ParseNode) -> Result<Contact, SerializationError> {
    Ok(Contact::default())
}

impl AdditionalDataHolder for Address {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl HasFieldDeserializers for Address {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res: FieldDeserializers<Self> = FieldDeserializers::new();
        res.insert(
            "city",
            Box::new(|m: &mut Self, n: &dyn ParseNode| {
                m.city = n.get_string_value()?;
                Ok(())
            }),
        );
        res
    }
}

impl Parsable for Address {
    fn deserialize_fields(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        deserialize_with_table(self, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        if let Some(city) = &self.city {
            writer.write_string_value(Some("city"), city)?;
        }
        writer.write_additional_data(&self.additional_data)
    }
}

impl AdditionalDataHolder for Contact {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl HasFieldDeserializers for Contact {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res: FieldDeserializers<Self> = FieldDeserializers::new();
        res.insert(
            "name",
            Box::new(|m: &mut Self, n: &dyn ParseNode| {
                m.name = n.get_string_value()?;
                Ok(())
            }),
        );
        res.insert(
            "age",
            Box::new(|m: &mut Self, n: &dyn ParseNode| {
                m.age = n.get_i32_value()?;
                Ok(())
            }),
        );
        res.insert(
            "tags",
            Box::new(|m: &mut Self, n: &dyn ParseNode| {
                m.tags = n.get_collection_of_primitive_values::<String>()?;
                Ok(())
            }),
        );
        res.insert(
            "home",
            Box::new(|m: &mut Self, n: &dyn ParseNode| {
                m.home = n.get_object_value(create_address)?;
                Ok(())
            }),
        );
        res
    }
}

impl Parsable for Contact {
    fn deserialize_fields(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        deserialize_with_table(self, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        if let Some(name) = &self.name {
            writer.write_string_value(Some("name"), name)?;
        }
        if let Some(age) = self.age {
            writer.write_i32_value(Some("age"), age)?;
        }
        if let Some(tags) = &self.tags {
            tags.write(writer, Some("tags"))?;
        }
        if let Some(home) = &self.home {
            writer.write_object_value(Some("home"), home)?;
        }
        writer.write_additional_data(&self.additional_data)
    }
}

#[test]
fn test_parse_known_and_unknown_fields() {
    let payload = json!({
        "name": "Adele",
        "age": 41,
        "tags": ["vip", "beta"],
        "home": {"city": "Oslo", "zip": "0150"},
        "nickname": "ad"
    });
    let contact = create_from_bytes(payload.to_string().as_bytes(), create_contact).unwrap();

    assert_eq!(contact.name.as_deref(), Some("Adele"));
    assert_eq!(contact.age, Some(41));
    assert_eq!(contact.tags, Some(vec!["vip".to_string(), "beta".to_string()]));
    let home = contact.home.as_ref().unwrap();
    assert_eq!(home.city.as_deref(), Some("Oslo"));
    assert_eq!(home.additional_data.get("zip"), Some(&json!("0150")));
    assert_eq!(contact.additional_data.get("nickname"), Some(&json!("ad")));
}

#[test]
fn test_serialize_reproduces_payload() {
    let payload = json!({
        "name": "Adele",
        "tags": [],
        "home": {"city": "Oslo", "extra": {"deep": [1, 2]}},
        "unknown": true
    });
    let contact = create_from_bytes(payload.to_string().as_bytes(), create_contact).unwrap();
    let content = serialize_content(&contact).unwrap();

    assert_eq!(serde_json::from_slice::<Value>(&content).unwrap(), payload);
}

#[test]
fn test_field_error_names_the_field() {
    let payload = br#"{"name": "Adele", "age": "forty"}"#;
    let err = create_from_bytes(payload, create_contact).unwrap_err();

    match &err {
        SerializationError::Field { field, source } => {
            assert_eq!(field, "age");
            assert!(matches!(**source, SerializationError::InvalidType { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("'age'"));
}

#[test]
fn test_nested_field_error_keeps_path() {
    let payload = br#"{"home": {"city": 12}}"#;
    let err = create_from_bytes(payload, create_contact).unwrap_err();

    let SerializationError::Field { field, source } = err else {
        panic!("expected field error");
    };
    assert_eq!(field, "home");
    assert!(matches!(*source, SerializationError::Field { ref field, .. } if field == "city"));
}

#[test]
fn test_invalid_documents() {
    assert!(matches!(
        create_from_bytes(b"not json", create_contact),
        Err(SerializationError::Json(_))
    ));
    assert!(matches!(
        create_from_bytes(b"null", create_contact),
        Err(SerializationError::InvalidType { .. })
    ));
    assert!(matches!(
        create_from_bytes(b"[1, 2]", create_contact),
        Err(SerializationError::InvalidType { expected: "object", .. })
    ));
}
