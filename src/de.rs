//! Decodes a stream of little-endian NBT into an owned tag tree without prior
//! knowledge of the structure.
//!
//! The shape of NBT data is only knowable by reading it: each node's leading
//! type byte determines how many of the following bytes belong to it and
//! whether it recurses. [`Decoder`] walks the stream in a single pass,
//! consuming exactly the bytes of one tagged value per [`Decoder::decode`]
//! call and recursing for compound members and list elements.
//!
//! Decoding is all-or-nothing: a malformed stream yields an error, never a
//! partially populated tree. Callers wanting best-effort recovery of corrupt
//! data must layer that on top, e.g. by decoding top-level members one at a
//! time and discarding the failures.
//!
//! ```
//! use littlenbt::{de::from_bytes, Value};
//!
//! let data = [
//!     0x0a, 0x03, 0x00, b'p', b'o', b's', // compound "pos"
//!     0x03, 0x01, 0x00, b'x', 0x07, 0x00, 0x00, 0x00, // int "x" = 7
//!     0x00, // end
//! ];
//!
//! let root = from_bytes(&data).unwrap().unwrap();
//! assert_eq!(root.name, b"pos");
//! assert_eq!(
//!     root.value,
//!     Value::Compound(vec![littlenbt::NamedTag {
//!         name: b"x".to_vec(),
//!         value: Value::Int(7),
//!     }])
//! );
//! ```

use std::convert::TryFrom;
use std::io::Read;

use byteorder::LittleEndian;

use crate::codec;
use crate::error::{Error, Result};
use crate::value::{NamedTag, Value};
use crate::Tag;

/// Recursion limit used by [`Decoder::new`]. Deeper nesting than this fails
/// with [`Error::DepthExceeded`] rather than risking stack exhaustion on a
/// hostile or corrupt stream.
pub const DEFAULT_DEPTH_LIMIT: usize = 512;

/// Decode one tag tree from a byte slice. Returns `Ok(None)` if the stream
/// opens with the End sentinel.
pub fn from_bytes(data: &[u8]) -> Result<Option<NamedTag>> {
    Decoder::new(data).decode()
}

/// Decode one tag tree from a reader. Does not do decompression; wrap the
/// reader if the data is compressed.
pub fn from_reader<R: Read>(reader: R) -> Result<Option<NamedTag>> {
    Decoder::new(reader).decode()
}

/// Decoder can take any reader and decode it as little-endian NBT data.
///
/// Each call to [`decode`][Decoder::decode] consumes exactly one complete
/// named tag from the stream and owns no state across calls, so a reader
/// holding several top-level tags back to back can be decoded by calling it
/// repeatedly.
pub struct Decoder<R: Read> {
    reader: R,
    depth_limit: usize,
}

impl<R: Read> Decoder<R> {
    /// Create a new decoder for the given reader with the default depth limit.
    pub fn new(reader: R) -> Self {
        Self::with_depth_limit(reader, DEFAULT_DEPTH_LIMIT)
    }

    /// Create a new decoder that refuses to recurse past `depth_limit` levels
    /// of nested compounds and lists.
    pub fn with_depth_limit(reader: R, depth_limit: usize) -> Self {
        Self {
            reader,
            depth_limit,
        }
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Gets a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consumes this decoder, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Decode one complete named tag from the stream.
    ///
    /// Reads one type byte; the End sentinel yields `Ok(None)` and consumes
    /// nothing further. Otherwise reads the tag's name and its entire payload,
    /// recursing for nested compounds and lists, and returns the materialized
    /// tree. Ownership of the tree passes entirely to the caller.
    pub fn decode(&mut self) -> Result<Option<NamedTag>> {
        let tag = self.read_tag()?;
        if tag == Tag::End {
            return Ok(None);
        }

        let name = self.read_string()?;
        let value = self.read_value(tag, 0)?;

        Ok(Some(NamedTag { name, value }))
    }

    fn read_tag(&mut self) -> Result<Tag> {
        let mut buf = [0; 1];
        self.reader.read_exact(&mut buf)?;
        let tag = codec::decode_u8(&buf)?;
        Tag::try_from(tag).map_err(|_| Error::UnknownTagType(tag))
    }

    /// Read one length-prefixed byte string: u16 length, then that many raw
    /// bytes. A zero length consumes nothing past the prefix.
    fn read_string(&mut self) -> Result<Vec<u8>> {
        let mut buf = [0; 2];
        self.reader.read_exact(&mut buf)?;
        let len = codec::decode_u16::<LittleEndian>(&buf)? as usize;

        if len == 0 {
            return Ok(Vec::new());
        }

        let mut data = vec![0; len];
        self.reader.read_exact(&mut data[..])?;
        Ok(data)
    }

    /// Read the payload of one value of the given tag type. The leading type
    /// byte (and name, for compound members) has already been consumed.
    fn read_value(&mut self, tag: Tag, depth: usize) -> Result<Value> {
        if depth > self.depth_limit {
            return Err(Error::DepthExceeded(self.depth_limit));
        }

        match tag {
            // End never carries a value; a list declaring End elements with a
            // nonzero count lands here.
            Tag::End => Err(Error::UnknownTagType(Tag::End as u8)),
            Tag::Byte => Ok(Value::Byte(self.read_i8()?)),
            Tag::Short => Ok(Value::Short(self.read_i16()?)),
            Tag::Int => Ok(Value::Int(self.read_i32()?)),
            Tag::Long => Ok(Value::Long(self.read_i64()?)),
            Tag::Float => Ok(Value::Float(self.read_f32()?)),
            Tag::Double => Ok(Value::Double(self.read_f64()?)),
            Tag::String => Ok(Value::String(self.read_string()?)),
            Tag::ByteArray => {
                let size = self.read_u32()? as usize;
                let mut elements = Vec::with_capacity(size);
                for _ in 0..size {
                    elements.push(self.read_i8()?);
                }
                Ok(Value::ByteArray(elements))
            }
            Tag::IntArray => {
                let size = self.read_u32()? as usize;
                let mut elements = Vec::with_capacity(size);
                for _ in 0..size {
                    elements.push(self.read_i32()?);
                }
                Ok(Value::IntArray(elements))
            }
            Tag::LongArray => {
                let size = self.read_u32()? as usize;
                let mut elements = Vec::with_capacity(size);
                for _ in 0..size {
                    elements.push(self.read_i64()?);
                }
                Ok(Value::LongArray(elements))
            }
            Tag::List => {
                let element_tag = self.read_tag()?;
                let size = self.read_u32()? as usize;
                let mut elements = Vec::with_capacity(size);
                for _ in 0..size {
                    elements.push(self.read_value(element_tag, depth + 1)?);
                }
                Ok(Value::List(element_tag, elements))
            }
            Tag::Compound => {
                let mut members = Vec::new();
                while self.read_member(depth, &mut members)? {}
                Ok(Value::Compound(members))
            }
        }
    }

    /// Read one compound member into `members`. Returns false when the End
    /// sentinel is hit, consuming nothing past it.
    fn read_member(&mut self, depth: usize, members: &mut Vec<NamedTag>) -> Result<bool> {
        let tag = self.read_tag()?;
        if tag == Tag::End {
            return Ok(false);
        }

        let name = self.read_string()?;
        let value = self.read_value(tag, depth + 1)?;
        members.push(NamedTag { name, value });
        Ok(true)
    }

    fn read_i8(&mut self) -> Result<i8> {
        let mut buf = [0; 1];
        self.reader.read_exact(&mut buf)?;
        codec::decode_i8(&buf)
    }

    fn read_i16(&mut self) -> Result<i16> {
        let mut buf = [0; 2];
        self.reader.read_exact(&mut buf)?;
        codec::decode_i16::<LittleEndian>(&buf)
    }

    fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0; 4];
        self.reader.read_exact(&mut buf)?;
        codec::decode_i32::<LittleEndian>(&buf)
    }

    fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0; 4];
        self.reader.read_exact(&mut buf)?;
        codec::decode_u32::<LittleEndian>(&buf)
    }

    fn read_i64(&mut self) -> Result<i64> {
        let mut buf = [0; 8];
        self.reader.read_exact(&mut buf)?;
        codec::decode_i64::<LittleEndian>(&buf)
    }

    fn read_f32(&mut self) -> Result<f32> {
        let mut buf = [0; 4];
        self.reader.read_exact(&mut buf)?;
        codec::decode_f32::<LittleEndian>(&buf)
    }

    fn read_f64(&mut self) -> Result<f64> {
        let mut buf = [0; 8];
        self.reader.read_exact(&mut buf)?;
        codec::decode_f64::<LittleEndian>(&buf)
    }
}
