use thiserror::Error;

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("expected {expected}, found {found}")]
    InvalidType {
        expected: &'static str,
        found: &'static str,
    },
    #[error("value {value} does not fit in {target}")]
    OutOfRange { value: String, target: &'static str },
    #[error(transparent)]
    UnknownEnumValue(#[from] ParseEnumError),
    #[error("deserialization of field '{field}' failed: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<SerializationError>,
    },
    #[error("could not parse date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
    #[error("could not decode base64 content: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("could not parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("writer misuse: {0}")]
    Writer(&'static str),
}

impl SerializationError {
    pub fn in_field(self, field: impl Into<String>) -> Self {
        SerializationError::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }
}

/// Returned by every enum's `FromStr` when the wire string is not one of its constants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {type_name} value '{value}'")]
pub struct ParseEnumError {
    pub type_name: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(type_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            type_name,
            value: value.into(),
        }
    }
}
