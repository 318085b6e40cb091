//! Byte-exact codec for the fixed-width primitives NBT and its enclosing
//! container formats are built from.
//!
//! Every `decode_*` takes a byte window that must be exactly the width of the
//! type and fails with [`Error::LengthMismatch`] otherwise; it never truncates
//! or pads. Every `encode_*` produces exactly that many bytes and cannot fail.
//! Multi-byte operations are generic over [`ByteOrder`], so both the
//! little-endian form used by Bedrock tag values and the big-endian form used
//! elsewhere come from the same definition:
//!
//! ```
//! use byteorder::{BigEndian, LittleEndian};
//! use littlenbt::codec;
//!
//! assert_eq!(codec::decode_u16::<LittleEndian>(&[0x01, 0x00]).unwrap(), 1);
//! assert_eq!(codec::decode_u16::<BigEndian>(&[0x01, 0x00]).unwrap(), 256);
//! ```
//!
//! The triad operations handle the packed 3-byte unsigned integers that
//! Bedrock's level.dat header and similar containers use for length fields.
//! The tag tree decoder itself never reads a triad.

use byteorder::ByteOrder;

use crate::error::{Error, Result};

fn check_len(data: &[u8], expected: usize) -> Result<()> {
    if data.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Decode a single byte as a boolean. Any nonzero byte is true.
pub fn decode_bool(data: &[u8]) -> Result<bool> {
    check_len(data, 1)?;
    Ok(data[0] != 0)
}

pub fn encode_bool(v: bool) -> [u8; 1] {
    [v as u8]
}

pub fn decode_u8(data: &[u8]) -> Result<u8> {
    check_len(data, 1)?;
    Ok(data[0])
}

pub fn encode_u8(v: u8) -> [u8; 1] {
    [v]
}

pub fn decode_i8(data: &[u8]) -> Result<i8> {
    check_len(data, 1)?;
    Ok(data[0] as i8)
}

pub fn encode_i8(v: i8) -> [u8; 1] {
    [v as u8]
}

pub fn decode_u16<B: ByteOrder>(data: &[u8]) -> Result<u16> {
    check_len(data, 2)?;
    Ok(B::read_u16(data))
}

pub fn encode_u16<B: ByteOrder>(v: u16) -> [u8; 2] {
    let mut buf = [0; 2];
    B::write_u16(&mut buf, v);
    buf
}

pub fn decode_i16<B: ByteOrder>(data: &[u8]) -> Result<i16> {
    check_len(data, 2)?;
    Ok(B::read_i16(data))
}

pub fn encode_i16<B: ByteOrder>(v: i16) -> [u8; 2] {
    let mut buf = [0; 2];
    B::write_i16(&mut buf, v);
    buf
}

pub fn decode_u32<B: ByteOrder>(data: &[u8]) -> Result<u32> {
    check_len(data, 4)?;
    Ok(B::read_u32(data))
}

pub fn encode_u32<B: ByteOrder>(v: u32) -> [u8; 4] {
    let mut buf = [0; 4];
    B::write_u32(&mut buf, v);
    buf
}

pub fn decode_i32<B: ByteOrder>(data: &[u8]) -> Result<i32> {
    check_len(data, 4)?;
    Ok(B::read_i32(data))
}

pub fn encode_i32<B: ByteOrder>(v: i32) -> [u8; 4] {
    let mut buf = [0; 4];
    B::write_i32(&mut buf, v);
    buf
}

pub fn decode_u64<B: ByteOrder>(data: &[u8]) -> Result<u64> {
    check_len(data, 8)?;
    Ok(B::read_u64(data))
}

pub fn encode_u64<B: ByteOrder>(v: u64) -> [u8; 8] {
    let mut buf = [0; 8];
    B::write_u64(&mut buf, v);
    buf
}

pub fn decode_i64<B: ByteOrder>(data: &[u8]) -> Result<i64> {
    check_len(data, 8)?;
    Ok(B::read_i64(data))
}

pub fn encode_i64<B: ByteOrder>(v: i64) -> [u8; 8] {
    let mut buf = [0; 8];
    B::write_i64(&mut buf, v);
    buf
}

pub fn decode_f32<B: ByteOrder>(data: &[u8]) -> Result<f32> {
    check_len(data, 4)?;
    Ok(B::read_f32(data))
}

pub fn encode_f32<B: ByteOrder>(v: f32) -> [u8; 4] {
    let mut buf = [0; 4];
    B::write_f32(&mut buf, v);
    buf
}

pub fn decode_f64<B: ByteOrder>(data: &[u8]) -> Result<f64> {
    check_len(data, 8)?;
    Ok(B::read_f64(data))
}

pub fn encode_f64<B: ByteOrder>(v: f64) -> [u8; 8] {
    let mut buf = [0; 8];
    B::write_f64(&mut buf, v);
    buf
}

/// Decode a packed 3-byte unsigned integer, zero-extended to u32.
pub fn decode_triad<B: ByteOrder>(data: &[u8]) -> Result<u32> {
    check_len(data, 3)?;
    Ok(B::read_u24(data))
}

/// Encode the low 24 bits of `v` as a packed 3-byte unsigned integer. Bits
/// above the 24th are discarded.
pub fn encode_triad<B: ByteOrder>(v: u32) -> [u8; 3] {
    let mut buf = [0; 3];
    B::write_u24(&mut buf, v & 0x00ff_ffff);
    buf
}
