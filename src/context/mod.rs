//! Context domain: node model, decoding, traversal, and translation.
//! Owns the wire format; the CLI and host integrations consume it via these re-exports.

pub mod decode;
pub mod node;
pub mod path;
pub mod translate;
pub mod walker;

pub use decode::{
    decode_many_str, decode_many_value, decode_reader, decode_slice, decode_str, decode_value,
    encode_pretty, encode_string, to_value,
};
pub use node::ContextNode;
pub use path::JsonPath;
pub use translate::{translate, ContextBuilder};
pub use walker::{TreeStats, Visit, Walker, WalkerConfig};
