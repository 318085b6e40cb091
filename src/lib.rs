//! littlenbt parses the little-endian NBT variant used by *Minecraft: Bedrock
//! Edition* and tools like PocketMine. The game uses this format in level.dat
//! and other world data files.
//!
//! * For decoding byte streams into a tag tree, see [`de`].
//! * For the decoded tree types, see [`Value`] and [`NamedTag`].
//! * For the raw fixed-width primitive codec (including the 3-byte "triad"
//!   integers some Bedrock container formats use), see [`codec`].
//!
//! Unlike Java Edition NBT, every multi-byte integer and float in this format
//! is little-endian, and strings are raw length-prefixed bytes with no
//! guarantee of being valid text. Decoding produces an owned [`NamedTag`]
//! tree; this crate does not serialize trees back to bytes.
//!
//! # Quick example
//!
//! ```
//! use littlenbt::{de::from_bytes, Value};
//!
//! // A root compound named "" containing one byte member "x" with value 42.
//! let data = [0x0a, 0x00, 0x00, 0x01, 0x01, 0x00, b'x', 0x2a, 0x00];
//!
//! let root = from_bytes(&data).unwrap().unwrap();
//! assert_eq!(root.name, b"");
//! match &root.value {
//!     Value::Compound(members) => {
//!         assert_eq!(members[0].name, b"x");
//!         assert_eq!(members[0].value, Value::Byte(42));
//!     }
//!     _ => panic!("expected compound root"),
//! }
//! ```
//!
//! # Depth limits
//!
//! The decoder recurses for nested compounds and lists. A corrupt or hostile
//! stream could nest arbitrarily deep, so recursion is capped; see
//! [`de::Decoder::with_depth_limit`] to change the default.

pub mod codec;
pub mod de;
pub mod error;

mod value;

pub use value::*;

#[cfg(test)]
mod test;

use num_enum::TryFromPrimitive;

/// An NBT tag type. This does not carry the value or the name of the data.
#[derive(Debug, TryFromPrimitive, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents an array of Byte (i8).
    ByteArray = 7,
    /// Represents a length-prefixed byte string.
    String = 8,
    /// Represents a list of elements sharing a single tag type.
    List = 9,
    /// Represents a struct-like sequence of named members.
    Compound = 10,
    /// Represents an array of Int (i32).
    IntArray = 11,
    /// Represents an array of Long (i64).
    LongArray = 12,
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}
