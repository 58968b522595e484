//! Tests for the raw frame codec: allocation, checksum, and structural parsing

use klineauth::frame::raw::RawFrame;

#[test]
fn allocate_stamps_correct_length_and_checksum() {
    let mut frame = RawFrame::allocate(0x12, 0x05, b"hello");
    assert_eq!(frame.addr(), 0x12);
    assert_eq!(frame.function(), 0x05);
    assert_eq!(frame.body(), b"hello");
    assert_eq!(frame.length(), RawFrame::HEADER_SIZE + 5 + RawFrame::FOOTER_SIZE);

    // Checksum starts at zero and is only correct once stamped
    assert!(!frame.checksum_verify());
    let stamped = frame.checksum_stamp();
    assert!(frame.checksum_verify());
    assert_eq!(frame.checksum(), stamped);
}

#[test]
fn empty_body_is_legal() {
    let mut frame = RawFrame::allocate(0x00, 0x00, &[]);
    frame.checksum_stamp();
    assert!(frame.checksum_verify());
    assert_eq!(frame.length(), RawFrame::HEADER_SIZE + RawFrame::FOOTER_SIZE);
}

#[test]
fn round_trips_through_into_frame_and_parse() {
    let mut frame = RawFrame::allocate(0xAB, 0xCD, b"payload");
    frame.checksum_stamp();
    let (bytes, len) = frame.into_frame();

    let parsed = RawFrame::parse(&bytes[..len]).expect("a well-formed frame must parse");
    assert_eq!(parsed.addr(), 0xAB);
    assert_eq!(parsed.function(), 0xCD);
    assert_eq!(parsed.body(), b"payload");
    assert!(parsed.checksum_verify());
}

#[test]
fn parse_rejects_length_mismatch() {
    let mut frame = RawFrame::allocate(0x01, 0x02, b"abc");
    frame.checksum_stamp();
    let (bytes, len) = frame.into_frame();

    // The embedded `length` field no longer matches the slice it is parsed from, in either direction.
    assert!(RawFrame::parse(&bytes[..len - 1]).is_none());
    assert!(RawFrame::parse(&bytes[..len + 1]).is_none());
}

#[test]
fn parse_rejects_truncated_header() {
    assert!(RawFrame::parse(&[0x01, 0x02]).is_none());
    assert!(RawFrame::parse(&[]).is_none());
}

#[test]
fn checksum_verify_fails_after_manual_corruption() {
    let mut frame = RawFrame::allocate(0x01, 0x02, b"abc");
    frame.checksum_stamp();
    assert!(frame.checksum_verify());

    frame.body_mut()[0] ^= 0xFF;
    assert!(!frame.checksum_verify());
}

#[test]
#[should_panic(expected = "body is too large")]
fn allocate_panics_on_oversized_body() {
    let oversized = [0u8; klineauth::frame::MAX_BODY_SIZE + 1];
    let _ = RawFrame::allocate(0x00, 0x00, &oversized);
}
