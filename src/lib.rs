//! contextkit: typed context trees for educational content frameworks
//!
//! Decodes JSON documents describing a hierarchy of "contexts" (apps,
//! chapters, quizzes, ...) into [`ContextNode`] trees. Raw discriminants are
//! kept verbatim; the semantic [`ContextKind`] and [`ContextTopic`] are
//! derived through total lookups, so unknown values never fail a decode.
//!
//! ```
//! let node = contextkit::decode_str(
//!     r#"{"identifier":"a","title":"A","displayOrder":0,"typeInt":999}"#,
//! )
//! .unwrap();
//! assert_eq!(node.kind(), contextkit::ContextKind::None);
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod types;

pub use context::{
    decode_many_str, decode_reader, decode_slice, decode_str, decode_value, encode_pretty,
    encode_string, translate, ContextBuilder, ContextNode,
};
pub use error::DecodeError;
pub use types::{ContextKind, ContextTopic};
