use chrono::{DateTime, NaiveDate, Utc};

use crate::error::SerializationError;
use crate::parsable::{AdditionalData, Parsable};

/// Generic writer a model serializes itself into.
///
/// `key` names the property inside an object; it is `None` for collection
/// elements and for the document root.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: Option<&str>, value: &str)
        -> Result<(), SerializationError>;
    fn write_bool_value(&mut self, key: Option<&str>, value: bool) -> Result<(), SerializationError>;
    fn write_i32_value(&mut self, key: Option<&str>, value: i32) -> Result<(), SerializationError>;
    fn write_i64_value(&mut self, key: Option<&str>, value: i64) -> Result<(), SerializationError>;
    fn write_f64_value(&mut self, key: Option<&str>, value: f64) -> Result<(), SerializationError>;
    fn write_date_time_value(
        &mut self,
        key: Option<&str>,
        value: &DateTime<Utc>,
    ) -> Result<(), SerializationError>;
    fn write_date_only_value(
        &mut self,
        key: Option<&str>,
        value: &NaiveDate,
    ) -> Result<(), SerializationError>;
    fn write_byte_array_value(
        &mut self,
        key: Option<&str>,
        value: &[u8],
    ) -> Result<(), SerializationError>;
    fn write_any_value(
        &mut self,
        key: Option<&str>,
        value: &serde_json::Value,
    ) -> Result<(), SerializationError>;
    fn write_null_value(&mut self, key: Option<&str>) -> Result<(), SerializationError>;

    fn write_collection_start(&mut self, key: Option<&str>) -> Result<(), SerializationError>;
    fn write_collection_end(&mut self) -> Result<(), SerializationError>;
    fn write_object_start(&mut self, key: Option<&str>) -> Result<(), SerializationError>;
    fn write_object_end(&mut self) -> Result<(), SerializationError>;

    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<(), SerializationError> {
        for (key, value) in data {
            self.write_any_value(Some(key), value)?;
        }
        Ok(())
    }
}

impl dyn SerializationWriter + '_ {
    pub fn write_object_value(
        &mut self,
        key: Option<&str>,
        value: &dyn Parsable,
    ) -> Result<(), SerializationError> {
        self.write_object_start(key)?;
        value.serialize(self)?;
        self.write_object_end()
    }

    pub fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: Option<&str>,
        values: &[T],
    ) -> Result<(), SerializationError> {
        self.write_collection_start(key)?;
        for value in values {
            self.write_object_value(None, value)?;
        }
        self.write_collection_end()
    }
}
