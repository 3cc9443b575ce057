use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};

use crate::error::SerializationError;
use crate::writer::SerializationWriter;

enum Frame {
    Object {
        key: Option<String>,
        fields: Map<String, Value>,
    },
    Collection {
        key: Option<String>,
        items: Vec<Value>,
    },
}

/// [`SerializationWriter`] that assembles a JSON document in memory.
#[derive(Default)]
pub struct JsonSerializationWriter {
    stack: Vec<Frame>,
    root: Option<Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished document; empty if nothing was written.
    pub fn get_serialized_content(&self) -> Result<Vec<u8>, SerializationError> {
        match self.finished_root()? {
            Some(root) => Ok(serde_json::to_vec(root)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn into_value(self) -> Result<Option<Value>, SerializationError> {
        self.finished_root()?;
        Ok(self.root)
    }

    fn finished_root(&self) -> Result<Option<&Value>, SerializationError> {
        if !self.stack.is_empty() {
            return Err(SerializationError::Writer(
                "document has an unterminated object or collection",
            ));
        }
        Ok(self.root.as_ref())
    }

    fn put(&mut self, key: Option<&str>, value: Value) -> Result<(), SerializationError> {
        match self.stack.last_mut() {
            Some(Frame::Object { fields, .. }) => {
                let key = key.ok_or(SerializationError::Writer(
                    "object property written without a key",
                ))?;
                fields.insert(key.to_string(), value);
            }
            Some(Frame::Collection { items, .. }) => items.push(value),
            None => {
                if self.root.is_some() {
                    return Err(SerializationError::Writer("document already has a root value"));
                }
                self.root = Some(value);
            }
        }
        Ok(())
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(
        &mut self,
        key: Option<&str>,
        value: &str,
    ) -> Result<(), SerializationError> {
        self.put(key, Value::String(value.to_string()))
    }

    fn write_bool_value(&mut self, key: Option<&str>, value: bool) -> Result<(), SerializationError> {
        self.put(key, Value::Bool(value))
    }

    fn write_i32_value(&mut self, key: Option<&str>, value: i32) -> Result<(), SerializationError> {
        self.put(key, Value::from(value))
    }

    fn write_i64_value(&mut self, key: Option<&str>, value: i64) -> Result<(), SerializationError> {
        self.put(key, Value::from(value))
    }

    fn write_f64_value(&mut self, key: Option<&str>, value: f64) -> Result<(), SerializationError> {
        let number = Number::from_f64(value).ok_or_else(|| SerializationError::OutOfRange {
            value: value.to_string(),
            target: "JSON number",
        })?;
        self.put(key, Value::Number(number))
    }

    fn write_date_time_value(
        &mut self,
        key: Option<&str>,
        value: &DateTime<Utc>,
    ) -> Result<(), SerializationError> {
        self.put(
            key,
            Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        )
    }

    fn write_date_only_value(
        &mut self,
        key: Option<&str>,
        value: &NaiveDate,
    ) -> Result<(), SerializationError> {
        self.put(key, Value::String(value.format("%Y-%m-%d").to_string()))
    }

    fn write_byte_array_value(
        &mut self,
        key: Option<&str>,
        value: &[u8],
    ) -> Result<(), SerializationError> {
        self.put(key, Value::String(STANDARD.encode(value)))
    }

    fn write_any_value(
        &mut self,
        key: Option<&str>,
        value: &Value,
    ) -> Result<(), SerializationError> {
        self.put(key, value.clone())
    }

    fn write_null_value(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
        self.put(key, Value::Null)
    }

    fn write_collection_start(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
        self.stack.push(Frame::Collection {
            key: key.map(str::to_string),
            items: Vec::new(),
        });
        Ok(())
    }

    fn write_collection_end(&mut self) -> Result<(), SerializationError> {
        match self.stack.pop() {
            Some(Frame::Collection { key, items }) => self.put(key.as_deref(), Value::Array(items)),
            _ => Err(SerializationError::Writer(
                "collection end without a matching start",
            )),
        }
    }

    fn write_object_start(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
        self.stack.push(Frame::Object {
            key: key.map(str::to_string),
            fields: Map::new(),
        });
        Ok(())
    }

    fn write_object_end(&mut self) -> Result<(), SerializationError> {
        match self.stack.pop() {
            Some(Frame::Object { key, fields }) => self.put(key.as_deref(), Value::Object(fields)),
            _ => Err(SerializationError::Writer("object end without a matching start")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_document() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_object_start(None).unwrap();
        writer.write_string_value(Some("name"), "page").unwrap();
        writer.write_collection_start(Some("tags")).unwrap();
        writer.write_string_value(None, "a").unwrap();
        writer.write_i32_value(None, 7).unwrap();
        writer.write_collection_end().unwrap();
        writer.write_object_start(Some("inner")).unwrap();
        writer.write_bool_value(Some("flag"), true).unwrap();
        writer.write_object_end().unwrap();
        writer.write_object_end().unwrap();

        assert_eq!(
            writer.into_value().unwrap(),
            Some(json!({"name": "page", "tags": ["a", 7], "inner": {"flag": true}}))
        );
    }

    #[test]
    fn test_unbalanced_document_is_rejected() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_object_start(None).unwrap();
        assert!(writer.get_serialized_content().is_err());
        assert!(writer.write_collection_end().is_err());
    }

    #[test]
    fn test_property_needs_key() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_object_start(None).unwrap();
        assert!(matches!(
            writer.write_string_value(None, "orphan"),
            Err(SerializationError::Writer(_))
        ));
    }

    #[test]
    fn test_dates_bytes_and_nan() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_object_start(None).unwrap();
        let when = DateTime::parse_from_rfc3339("2024-05-06T07:08:09Z")
            .unwrap()
            .with_timezone(&Utc);
        writer.write_date_time_value(Some("when"), &when).unwrap();
        writer
            .write_date_only_value(Some("day"), &NaiveDate::from_ymd_opt(2024, 5, 6).unwrap())
            .unwrap();
        writer.write_byte_array_value(Some("blob"), b"hello").unwrap();
        assert!(writer.write_f64_value(Some("nan"), f64::NAN).is_err());
        writer.write_object_end().unwrap();

        let content = writer.get_serialized_content().unwrap();
        assert_eq!(
            serde_json::from_slice::<Value>(&content).unwrap(),
            json!({"blob": "aGVsbG8=", "day": "2024-05-06", "when": "2024-05-06T07:08:09Z"})
        );
    }

    #[test]
    fn test_empty_writer_has_no_content() {
        let writer = JsonSerializationWriter::new();
        assert!(writer.get_serialized_content().unwrap().is_empty());
    }
}
