//! Writer/Reader roundtrip and bounds matrix for the buffers crate.

use cqp_buffers::{BufferError, ByteOrder, Reader, Writer};

const ORDERS: [ByteOrder; 2] = [ByteOrder::BigEndian, ByteOrder::LittleEndian];

#[test]
fn roundtrip_integers_both_orders() {
    for order in ORDERS {
        let mut w = Writer::with_order(order);
        w.buf(&[0xff]);
        w.i32(i32::MIN);
        w.i32(-123_456);
        w.i64(i64::MIN);
        w.i64(9_999_999_999);
        let data = w.flush();
        assert_eq!(data.len(), 1 + 4 + 4 + 8 + 8);

        let mut r = Reader::with_order(&data, order);
        assert_eq!(r.buf(1), Ok(&[0xff][..]));
        assert_eq!(r.i32(), Ok(i32::MIN));
        assert_eq!(r.i32(), Ok(-123_456));
        assert_eq!(r.i64(), Ok(i64::MIN));
        assert_eq!(r.i64(), Ok(9_999_999_999));
        assert_eq!(r.size(), 0);
    }
}

#[test]
fn mismatched_order_reads_swapped_value() {
    let mut w = Writer::with_order(ByteOrder::LittleEndian);
    w.i32(1);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.i32(), Ok(1 << 24));
}

#[test]
fn roundtrip_buf() {
    let mut w = Writer::new();
    w.buf(&[]);
    w.buf(&[0xDE, 0xAD, 0xBE, 0xEF]);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.buf(0), Ok(&[][..]));
    assert_eq!(r.buf(4), Ok(&[0xDE, 0xAD, 0xBE, 0xEF][..]));
    assert_eq!(r.buf(0), Ok(&[][..]));
}

#[test]
fn every_short_read_is_end_of_buffer() {
    let data = [1u8, 2, 3, 4, 5, 6, 7, 8];
    for len in 0..data.len() {
        let slice = &data[..len];
        let mut r = Reader::new(slice);
        assert_eq!(
            r.i64(),
            Err(BufferError::EndOfBuffer {
                needed: 8,
                remaining: len
            })
        );
        assert_eq!(r.position(), 0);
        if len < 4 {
            assert!(r.i32().is_err());
            assert_eq!(r.size(), len);
        }
    }
}

#[test]
fn cut_bounds_nested_reader() {
    let data = [0, 0, 0, 2, 0xaa, 0xbb, 0xcc];
    let mut r = Reader::new(&data);
    let len = r.i32().unwrap() as usize;
    let mut nested = r.cut(len).unwrap();
    assert_eq!(nested.size(), 2);
    assert_eq!(nested.buf(2), Ok(&[0xaa, 0xbb][..]));
    assert!(nested.buf(1).is_err());
    assert_eq!(r.buf(1), Ok(&[0xcc][..]));
    assert!(r.cut(1).is_err());
}

#[test]
fn cursor_never_passes_end() {
    let data = [1u8, 2, 3];
    let mut r = Reader::new(&data);
    r.rewind(usize::MAX);
    assert_eq!(r.position(), data.len());
    assert_eq!(r.size(), 0);
    assert_eq!(
        r.i32(),
        Err(BufferError::EndOfBuffer {
            needed: 4,
            remaining: 0
        })
    );
    r.rewind(1);
    assert_eq!(r.buf(2), Ok(&[2, 3][..]));
}

#[test]
fn error_display() {
    let err = BufferError::EndOfBuffer {
        needed: 4,
        remaining: 1,
    };
    assert_eq!(err.to_string(), "end of buffer: needed 4 bytes, 1 remaining");
}
