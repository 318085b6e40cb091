use byteorder::{BigEndian, LittleEndian};

use crate::codec::*;
use crate::error::Error;

#[test]
fn byte_round_trip() {
    for v in [0u8, 1, 127, 128, 255] {
        assert_eq!(decode_u8(&encode_u8(v)).unwrap(), v);
    }
    for v in [0i8, 1, -1, i8::MIN, i8::MAX] {
        assert_eq!(decode_i8(&encode_i8(v)).unwrap(), v);
    }
}

#[test]
fn bool_round_trip() {
    assert_eq!(encode_bool(true), [1]);
    assert_eq!(encode_bool(false), [0]);
    assert!(decode_bool(&[1]).unwrap());
    assert!(!decode_bool(&[0]).unwrap());
    // Any nonzero byte reads as true.
    assert!(decode_bool(&[0xff]).unwrap());
}

#[test]
fn short_round_trip() {
    for v in [0u16, 1, 0x1234, u16::MAX] {
        assert_eq!(decode_u16::<LittleEndian>(&encode_u16::<LittleEndian>(v)).unwrap(), v);
        assert_eq!(decode_u16::<BigEndian>(&encode_u16::<BigEndian>(v)).unwrap(), v);
    }
    for v in [0i16, 1, -1, i16::MIN, i16::MAX] {
        assert_eq!(decode_i16::<LittleEndian>(&encode_i16::<LittleEndian>(v)).unwrap(), v);
        assert_eq!(decode_i16::<BigEndian>(&encode_i16::<BigEndian>(v)).unwrap(), v);
    }
}

#[test]
fn int_round_trip() {
    for v in [0u32, 1, 0x12345678, u32::MAX] {
        assert_eq!(decode_u32::<LittleEndian>(&encode_u32::<LittleEndian>(v)).unwrap(), v);
        assert_eq!(decode_u32::<BigEndian>(&encode_u32::<BigEndian>(v)).unwrap(), v);
    }
    for v in [0i32, 1, -1, i32::MIN, i32::MAX] {
        assert_eq!(decode_i32::<LittleEndian>(&encode_i32::<LittleEndian>(v)).unwrap(), v);
        assert_eq!(decode_i32::<BigEndian>(&encode_i32::<BigEndian>(v)).unwrap(), v);
    }
}

#[test]
fn long_round_trip() {
    for v in [0u64, 1, 0x0123_4567_89ab_cdef, u64::MAX] {
        assert_eq!(decode_u64::<LittleEndian>(&encode_u64::<LittleEndian>(v)).unwrap(), v);
        assert_eq!(decode_u64::<BigEndian>(&encode_u64::<BigEndian>(v)).unwrap(), v);
    }
    for v in [0i64, 1, -1, i64::MIN, i64::MAX] {
        assert_eq!(decode_i64::<LittleEndian>(&encode_i64::<LittleEndian>(v)).unwrap(), v);
        assert_eq!(decode_i64::<BigEndian>(&encode_i64::<BigEndian>(v)).unwrap(), v);
    }
}

#[test]
fn float_round_trip() {
    for v in [0.0f32, 1.23, -1.23, f32::MIN, f32::MAX, f32::INFINITY, f32::NEG_INFINITY] {
        assert_eq!(decode_f32::<LittleEndian>(&encode_f32::<LittleEndian>(v)).unwrap(), v);
        assert_eq!(decode_f32::<BigEndian>(&encode_f32::<BigEndian>(v)).unwrap(), v);
    }
    for v in [0.0f64, 1.23456, -1.23456, f64::MIN, f64::MAX, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(decode_f64::<LittleEndian>(&encode_f64::<LittleEndian>(v)).unwrap(), v);
        assert_eq!(decode_f64::<BigEndian>(&encode_f64::<BigEndian>(v)).unwrap(), v);
    }
}

#[test]
fn nan_survives_byte_for_byte() {
    let nan32 = f32::from_bits(0x7fc0_dead);
    let out = decode_f32::<LittleEndian>(&encode_f32::<LittleEndian>(nan32)).unwrap();
    assert!(out.is_nan());
    assert_eq!(out.to_bits(), nan32.to_bits());

    let nan64 = f64::from_bits(0x7ff8_0000_dead_beef);
    let out = decode_f64::<BigEndian>(&encode_f64::<BigEndian>(nan64)).unwrap();
    assert!(out.is_nan());
    assert_eq!(out.to_bits(), nan64.to_bits());
}

#[test]
fn known_byte_layouts() {
    assert_eq!(encode_u16::<LittleEndian>(1), [0x01, 0x00]);
    assert_eq!(encode_u16::<BigEndian>(1), [0x00, 0x01]);
    assert_eq!(encode_i32::<LittleEndian>(1), [0x01, 0x00, 0x00, 0x00]);
    assert_eq!(encode_i32::<BigEndian>(1), [0x00, 0x00, 0x00, 0x01]);
    assert_eq!(encode_i16::<LittleEndian>(-1), [0xff, 0xff]);
    assert_eq!(
        encode_i64::<LittleEndian>(0x0102_0304_0506_0708),
        [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
    );
    assert_eq!(decode_u16::<LittleEndian>(&[0x01, 0x00]).unwrap(), 1);
    assert_eq!(decode_u16::<BigEndian>(&[0x01, 0x00]).unwrap(), 256);
}

#[test]
fn window_too_short_is_length_mismatch() {
    assert!(matches!(
        decode_u16::<LittleEndian>(&[0x01]),
        Err(Error::LengthMismatch {
            expected: 2,
            actual: 1
        })
    ));
    assert!(matches!(
        decode_i32::<LittleEndian>(&[]),
        Err(Error::LengthMismatch {
            expected: 4,
            actual: 0
        })
    ));
    assert!(matches!(
        decode_f64::<BigEndian>(&[0; 7]),
        Err(Error::LengthMismatch {
            expected: 8,
            actual: 7
        })
    ));
    assert!(matches!(
        decode_u8(&[]),
        Err(Error::LengthMismatch {
            expected: 1,
            actual: 0
        })
    ));
}

#[test]
fn window_too_long_is_length_mismatch() {
    // A long window must never be silently truncated.
    assert!(matches!(
        decode_i16::<LittleEndian>(&[0, 0, 0]),
        Err(Error::LengthMismatch {
            expected: 2,
            actual: 3
        })
    ));
    assert!(matches!(
        decode_u64::<BigEndian>(&[0; 9]),
        Err(Error::LengthMismatch {
            expected: 8,
            actual: 9
        })
    ));
    assert!(matches!(
        decode_bool(&[1, 0]),
        Err(Error::LengthMismatch {
            expected: 1,
            actual: 2
        })
    ));
}

#[test]
fn triad_byte_layout() {
    assert_eq!(encode_triad::<BigEndian>(0x0012_3456), [0x12, 0x34, 0x56]);
    assert_eq!(encode_triad::<LittleEndian>(0x0012_3456), [0x56, 0x34, 0x12]);
    assert_eq!(decode_triad::<BigEndian>(&[0x12, 0x34, 0x56]).unwrap(), 0x0012_3456);
    assert_eq!(decode_triad::<LittleEndian>(&[0x56, 0x34, 0x12]).unwrap(), 0x0012_3456);
}

#[test]
fn triad_round_trip() {
    for v in [0u32, 1, 0x00ab_cdef, 0x00ff_ffff] {
        assert_eq!(decode_triad::<LittleEndian>(&encode_triad::<LittleEndian>(v)).unwrap(), v);
        assert_eq!(decode_triad::<BigEndian>(&encode_triad::<BigEndian>(v)).unwrap(), v);
    }
}

#[test]
fn triad_encode_discards_high_bits() {
    assert_eq!(encode_triad::<BigEndian>(0xff12_3456), [0x12, 0x34, 0x56]);
    assert_eq!(decode_triad::<BigEndian>(&encode_triad::<BigEndian>(u32::MAX)).unwrap(), 0x00ff_ffff);
}

#[test]
fn triad_length_mismatch() {
    assert!(matches!(
        decode_triad::<LittleEndian>(&[0, 0]),
        Err(Error::LengthMismatch {
            expected: 3,
            actual: 2
        })
    ));
    assert!(matches!(
        decode_triad::<BigEndian>(&[0, 0, 0, 0]),
        Err(Error::LengthMismatch {
            expected: 3,
            actual: 4
        })
    ));
}
