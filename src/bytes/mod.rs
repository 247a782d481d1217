//! Byte-level decoding machinery
//!
//! [`view`] provides the bounds-checked random-access view every other
//! component reads through; [`text`] decodes bounded byte ranges into
//! strings under several encodings.

pub mod text;
pub mod view;

pub use text::{decode_string, Encoding};
pub use view::{ByteSource, ByteView, Endian};
