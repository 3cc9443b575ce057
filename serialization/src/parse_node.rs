use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{ParseEnumError, SerializationError};
use crate::parsable::{Parsable, ParsableFactory};
use crate::value::FieldValue;

/// Generic reader over one node of a wire payload.
///
/// A node holding a wire `null` answers `Ok(None)` to every getter; a node of
/// the wrong shape answers `SerializationError::InvalidType`.
pub trait ParseNode {
    fn is_null(&self) -> bool;
    fn get_child_node(&self, name: &str)
        -> Result<Option<Box<dyn ParseNode + '_>>, SerializationError>;
    fn get_string_value(&self) -> Result<Option<String>, SerializationError>;
    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError>;
    fn get_i32_value(&self) -> Result<Option<i32>, SerializationError>;
    fn get_i64_value(&self) -> Result<Option<i64>, SerializationError>;
    fn get_f64_value(&self) -> Result<Option<f64>, SerializationError>;
    fn get_date_time_value(&self) -> Result<Option<DateTime<Utc>>, SerializationError>;
    fn get_date_only_value(&self) -> Result<Option<NaiveDate>, SerializationError>;
    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, SerializationError>;
    /// Elements of a collection node, in wire order.
    fn get_collection_nodes(&self)
        -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, SerializationError>;
    /// Properties of an object node, in wire order.
    fn get_field_nodes(
        &self,
    ) -> Result<Option<Vec<(String, Box<dyn ParseNode + '_>)>>, SerializationError>;
    /// The node as untyped JSON, used for additional data and open-typed properties.
    fn get_raw_value(&self) -> Result<Option<serde_json::Value>, SerializationError>;
}

/// Typed helpers layered over any [`ParseNode`].
pub trait ParseNodeExt: ParseNode {
    fn as_dyn(&self) -> &dyn ParseNode;

    /// Builds an instance through `factory`, then fills it from this node's fields.
    fn get_object_value<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<T>, SerializationError> {
        if self.is_null() {
            return Ok(None);
        }
        let node = self.as_dyn();
        let mut value = factory(node)?;
        value.deserialize_fields(node)?;
        Ok(Some(value))
    }

    /// Nulls inside the collection are dropped.
    fn get_collection_of_object_values<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<Vec<T>>, SerializationError> {
        let Some(nodes) = self.get_collection_nodes()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(nodes.len());
        for node in nodes {
            if let Some(value) = node.get_object_value(factory)? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    fn get_collection_of_primitive_values<T: FieldValue>(
        &self,
    ) -> Result<Option<Vec<T>>, SerializationError> {
        <Vec<T> as FieldValue>::read(self.as_dyn())
    }

    fn get_enum_value<E>(&self) -> Result<Option<E>, SerializationError>
    where
        E: FromStr<Err = ParseEnumError>,
    {
        match self.get_string_value()? {
            Some(raw) => Ok(Some(raw.parse::<E>()?)),
            None => Ok(None),
        }
    }
}

impl<N: ParseNode> ParseNodeExt for N {
    fn as_dyn(&self) -> &dyn ParseNode {
        self
    }
}

impl ParseNodeExt for dyn ParseNode + '_ {
    fn as_dyn(&self) -> &dyn ParseNode {
        self
    }
}
