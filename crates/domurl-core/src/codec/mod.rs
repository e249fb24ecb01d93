//! Percent-Codec: lenient decoding and component encoding.
//!
//! Decoding never fails. Escapes that do not form an acceptable character are
//! left in the output as literal `%XX` text.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::{encode, escape_component, Component};
