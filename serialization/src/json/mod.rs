mod parse_node;
mod writer;

pub use parse_node::JsonParseNode;
pub use writer::JsonSerializationWriter;
