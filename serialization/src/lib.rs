//! Reader/writer abstractions the Graph models serialize through.
//!
//! Models implement [`Parsable`] and are filled from any [`ParseNode`] or
//! written to any [`SerializationWriter`]. The `json` module supplies the
//! JSON implementations used on the wire.

mod error;
mod parsable;
mod parse_node;
mod value;
mod writer;

pub mod json;

pub use error::{ParseEnumError, SerializationError};
pub use parsable::{
    create_from_bytes, deserialize_with_table, serialize_content, AdditionalData,
    AdditionalDataHolder, FieldDeserializer, FieldDeserializers, HasFieldDeserializers, Parsable,
    ParsableFactory,
};
pub use parse_node::{ParseNode, ParseNodeExt};
pub use value::{ByteArray, FieldValue};
pub use writer::SerializationWriter;
