use crate::Tag;

/// A complete decoded NBT value. It owns its data.
///
/// Strings and names are raw bytes: the format length-prefixes them but makes
/// no promise that the contents are valid text, so no decoding or validation
/// is applied. Use [`String::from_utf8_lossy`][std::string::String::from_utf8_lossy]
/// or similar if you need text out of one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(Vec<u8>),
    /// A list fixes its element tag type in its header; all elements share it.
    List(Tag, Vec<Value>),
    /// Members in the order they appeared in the stream. The format has no
    /// deduplication step, so duplicate names survive as distinct entries and
    /// indexing by name is left to the caller.
    Compound(Vec<NamedTag>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Value {
    /// The tag type this value was decoded from.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_, _) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }
}

/// One named node of a decoded tree: a direct member of a compound, or the
/// root. List elements are unnamed and appear as bare [`Value`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTag {
    pub name: Vec<u8>,
    pub value: Value,
}
