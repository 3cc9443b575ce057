use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::error::SerializationError;
use crate::parse_node::ParseNode;

const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// [`ParseNode`] over a borrowed `serde_json::Value`.
#[derive(Clone, Copy, Debug)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn invalid(&self, expected: &'static str) -> SerializationError {
        SerializationError::InvalidType {
            expected,
            found: json_kind(self.value),
        }
    }

    fn string(&self) -> Result<Option<&'a str>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.as_str())),
            _ => Err(self.invalid("string")),
        }
    }

    fn integer(&self) -> Result<Option<i64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_i64().map(Some).ok_or_else(|| self.invalid("integer")),
            _ => Err(self.invalid("integer")),
        }
    }
}

impl ParseNode for JsonParseNode<'_> {
    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn get_child_node(
        &self,
        name: &str,
    ) -> Result<Option<Box<dyn ParseNode + '_>>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(fields) => Ok(fields
                .get(name)
                .map(|v| Box::new(JsonParseNode::new(v)) as Box<dyn ParseNode + '_>)),
            _ => Err(self.invalid("object")),
        }
    }

    fn get_string_value(&self) -> Result<Option<String>, SerializationError> {
        Ok(self.string()?.map(str::to_string))
    }

    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            _ => Err(self.invalid("boolean")),
        }
    }

    fn get_i32_value(&self) -> Result<Option<i32>, SerializationError> {
        self.integer()?
            .map(|v| {
                i32::try_from(v).map_err(|_| SerializationError::OutOfRange {
                    value: v.to_string(),
                    target: "i32",
                })
            })
            .transpose()
    }

    fn get_i64_value(&self) -> Result<Option<i64>, SerializationError> {
        self.integer()
    }

    fn get_f64_value(&self) -> Result<Option<f64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| self.invalid("number")),
            _ => Err(self.invalid("number")),
        }
    }

    fn get_date_time_value(&self) -> Result<Option<DateTime<Utc>>, SerializationError> {
        match self.string()? {
            Some(s) => Ok(Some(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))),
            None => Ok(None),
        }
    }

    fn get_date_only_value(&self) -> Result<Option<NaiveDate>, SerializationError> {
        match self.string()? {
            Some(s) => Ok(Some(NaiveDate::parse_from_str(s, DATE_ONLY_FORMAT)?)),
            None => Ok(None),
        }
    }

    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, SerializationError> {
        match self.string()? {
            Some(s) => Ok(Some(STANDARD.decode(s)?)),
            None => Ok(None),
        }
    }

    fn get_collection_nodes(
        &self,
    ) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(
                items
                    .iter()
                    .map(|v| Box::new(JsonParseNode::new(v)) as Box<dyn ParseNode + '_>)
                    .collect(),
            )),
            _ => Err(self.invalid("array")),
        }
    }

    fn get_field_nodes(
        &self,
    ) -> Result<Option<Vec<(String, Box<dyn ParseNode + '_>)>>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(fields) => Ok(Some(
                fields
                    .iter()
                    .map(|(k, v)| {
                        let node: Box<dyn ParseNode + '_> = Box::new(JsonParseNode::new(v));
                        (k.clone(), node)
                    })
                    .collect(),
            )),
            _ => Err(self.invalid("object")),
        }
    }

    fn get_raw_value(&self) -> Result<Option<Value>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            v => Ok(Some(v.clone())),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_reads_as_none() {
        let value = Value::Null;
        let node = JsonParseNode::new(&value);
        assert_eq!(node.get_string_value().unwrap(), None);
        assert_eq!(node.get_i32_value().unwrap(), None);
        assert!(node.get_collection_nodes().unwrap().is_none());
        assert!(node.get_field_nodes().unwrap().is_none());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let value = json!("not a number");
        let node = JsonParseNode::new(&value);
        match node.get_i32_value() {
            Err(SerializationError::InvalidType { expected, found }) => {
                assert_eq!(expected, "integer");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_i32_out_of_range() {
        let value = json!(i64::from(i32::MAX) + 1);
        let node = JsonParseNode::new(&value);
        assert!(matches!(
            node.get_i32_value(),
            Err(SerializationError::OutOfRange { target: "i32", .. })
        ));
        assert_eq!(node.get_i64_value().unwrap(), Some(i64::from(i32::MAX) + 1));
    }

    #[test]
    fn test_dates_and_bytes() {
        let value = json!({
            "when": "2023-03-01T10:15:00+01:00",
            "day": "2023-03-01",
            "blob": "aGVsbG8="
        });
        let node = JsonParseNode::new(&value);

        let when = node.get_child_node("when").unwrap().unwrap();
        assert_eq!(
            when.get_date_time_value().unwrap().unwrap().to_rfc3339(),
            "2023-03-01T09:15:00+00:00"
        );
        let day = node.get_child_node("day").unwrap().unwrap();
        assert_eq!(
            day.get_date_only_value().unwrap(),
            NaiveDate::from_ymd_opt(2023, 3, 1)
        );
        let blob = node.get_child_node("blob").unwrap().unwrap();
        assert_eq!(blob.get_byte_array_value().unwrap().unwrap(), b"hello");
        assert!(node.get_child_node("missing").unwrap().is_none());
    }

    #[test]
    fn test_field_nodes_keep_every_property() {
        let value = json!({"a": 1, "b": [true, false], "c": null});
        let node = JsonParseNode::new(&value);
        let fields = node.get_field_nodes().unwrap().unwrap();
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert!(fields[2].1.is_null());
    }
}
