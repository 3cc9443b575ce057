use std::collections::{BTreeMap, HashMap};

use crate::error::SerializationError;
use crate::json::{JsonParseNode, JsonSerializationWriter};
use crate::parse_node::{ParseNode, ParseNodeExt};
use crate::writer::SerializationWriter;

/// Wire properties that no field claimed, kept so they survive a round trip.
pub type AdditionalData = BTreeMap<String, serde_json::Value>;

/// Parses one property value from a node and stores it on the target.
pub type FieldDeserializer<T> =
    Box<dyn Fn(&mut T, &dyn ParseNode) -> Result<(), SerializationError>>;

/// Wire property name to deserializer.
pub type FieldDeserializers<T> = HashMap<&'static str, FieldDeserializer<T>>;

/// Picks (and constructs) the concrete type to parse a node into.
pub type ParsableFactory<T> = fn(&dyn ParseNode) -> Result<T, SerializationError>;

pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &AdditionalData;
    fn additional_data_mut(&mut self) -> &mut AdditionalData;

    fn set_additional_data(&mut self, value: AdditionalData) {
        *self.additional_data_mut() = value;
    }
}

/// A model that can fill itself from a [`ParseNode`] and write itself to a
/// [`SerializationWriter`].
pub trait Parsable: AdditionalDataHolder {
    fn deserialize_fields(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError>;
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError>;
}

pub trait HasFieldDeserializers: Sized {
    fn field_deserializers() -> FieldDeserializers<Self>;
}

/// Routes every property of `node` through the target's deserializer table.
///
/// Properties without an entry are stored untouched in the additional data.
pub fn deserialize_with_table<T>(target: &mut T, node: &dyn ParseNode) -> Result<(), SerializationError>
where
    T: HasFieldDeserializers + AdditionalDataHolder,
{
    let Some(fields) = node.get_field_nodes()? else {
        return Ok(());
    };
    let table = T::field_deserializers();
    for (key, child) in fields {
        match table.get(key.as_str()) {
            Some(deserialize) => {
                deserialize(target, &*child).map_err(|err| err.in_field(key.as_str()))?
            }
            None => {
                log::trace!("keeping unknown property '{key}' as additional data");
                let raw = child.get_raw_value()?.unwrap_or(serde_json::Value::Null);
                target.additional_data_mut().insert(key, raw);
            }
        }
    }
    Ok(())
}

/// Parses a JSON document into a model picked by `factory`.
pub fn create_from_bytes<T: Parsable>(
    bytes: &[u8],
    factory: ParsableFactory<T>,
) -> Result<T, SerializationError> {
    let root: serde_json::Value = serde_json::from_slice(bytes)?;
    let node = JsonParseNode::new(&root);
    node.get_object_value(factory)?
        .ok_or(SerializationError::InvalidType {
            expected: "object",
            found: "null",
        })
}

/// Writes a model out as a JSON document.
pub fn serialize_content(value: &dyn Parsable) -> Result<Vec<u8>, SerializationError> {
    let mut writer = JsonSerializationWriter::new();
    (&mut writer as &mut dyn SerializationWriter).write_object_value(None, value)?;
    writer.get_serialized_content()
}
