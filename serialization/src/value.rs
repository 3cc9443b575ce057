use chrono::{DateTime, NaiveDate, Utc};

use crate::error::SerializationError;
use crate::parse_node::ParseNode;
use crate::writer::SerializationWriter;

/// How one property type is read from a node and written back.
///
/// Generated models declare fields by type only; this trait supplies the
/// matching `ParseNode` getter and `SerializationWriter` call.
pub trait FieldValue: Sized {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError>;
    fn write(
        &self,
        writer: &mut dyn SerializationWriter,
        key: Option<&str>,
    ) -> Result<(), SerializationError>;
}

/// Binary content, base64 encoded on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteArray(pub Vec<u8>);

impl From<Vec<u8>> for ByteArray {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl AsRef<[u8]> for ByteArray {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FieldValue for String {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_string_value()
    }

    fn write(
        &self,
        writer: &mut dyn SerializationWriter,
        key: Option<&str>,
    ) -> Result<(), SerializationError> {
        writer.write_string_value(key, self)
    }
}

impl FieldValue for bool {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_bool_value()
    }

    fn write(
        &self,
        writer: &mut dyn SerializationWriter,
        key: Option<&str>,
    ) -> Result<(), SerializationError> {
        writer.write_bool_value(key, *self)
    }
}

impl FieldValue for i32 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_i32_value()
    }

    fn write(
        &self,
        writer: &mut dyn SerializationWriter,
        key: Option<&str>,
    ) -> Result<(), SerializationError> {
        writer.write_i32_value(key, *self)
    }
}

impl FieldValue for i64 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_i64_value()
    }

    fn write(
        &self,
        writer: &mut dyn SerializationWriter,
        key: Option<&str>,
    ) -> Result<(), SerializationError> {
        writer.write_i64_value(key, *self)
    }
}

impl FieldValue for f64 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_f64_value()
    }

    fn write(
        &self,
        writer: &mut dyn SerializationWriter,
        key: Option<&str>,
    ) -> Result<(), SerializationError> {
        writer.write_f64_value(key, *self)
    }
}

impl FieldValue for DateTime<Utc> {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_date_time_value()
    }

    fn write(
        &self,
        writer: &mut dyn SerializationWriter,
        key: Option<&str>,
    ) -> Result<(), SerializationError> {
        writer.write_date_time_value(key, self)
    }
}

impl FieldValue for NaiveDate {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_date_only_value()
    }

    fn write(
        &self,
        writer: &mut dyn SerializationWriter,
        key: Option<&str>,
    ) -> Result<(), SerializationError> {
        writer.write_date_only_value(key, self)
    }
}

impl FieldValue for ByteArray {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        Ok(node.get_byte_array_value()?.map(ByteArray))
    }

    fn write(
        &self,
        writer: &mut dyn SerializationWriter,
        key: Option<&str>,
    ) -> Result<(), SerializationError> {
        writer.write_byte_array_value(key, &self.0)
    }
}

impl FieldValue for serde_json::Value {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_raw_value()
    }

    fn write(
        &self,
        writer: &mut dyn SerializationWriter,
        key: Option<&str>,
    ) -> Result<(), SerializationError> {
        writer.write_any_value(key, self)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        let Some(items) = node.get_collection_nodes()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(items.len());
        for item in items {
            if let Some(value) = T::read(&*item)? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    fn write(
        &self,
        writer: &mut dyn SerializationWriter,
        key: Option<&str>,
    ) -> Result<(), SerializationError> {
        writer.write_collection_start(key)?;
        for value in self {
            value.write(writer, None)?;
        }
        writer.write_collection_end()
    }
}
