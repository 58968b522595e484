//! Tests for the pairing and challenge message builders

mod common;

use common::TestRand;
use klineauth::frame::{
    challenge::{create_challenge, parse_challenge, ChallengeBody},
    pairing::{create_pairing, parse_pairing, PairingBody},
    raw::RawFrame,
};

#[test]
fn pairing_frame_round_trips_and_is_checksummed() {
    let mut rand = TestRand::new(10);
    let frame = create_pairing(0x7F, 0x01, &mut rand);

    assert!(frame.checksum_verify());
    assert_eq!(frame.addr(), 0x7F);
    assert_eq!(frame.function(), 0x01);
    assert_eq!(frame.body().len(), PairingBody::SIZE);

    let pairing = parse_pairing(&frame).expect("a freshly built pairing frame must parse");
    assert_ne!(pairing.cem_to_pak, pairing.pak_to_cem, "two independent draws should not collide");
}

#[test]
fn challenge_frame_round_trips_and_is_checksummed() {
    let mut rand = TestRand::new(11);
    let frame = create_challenge(0x7F, 0x02, &mut rand);

    assert!(frame.checksum_verify());
    assert_eq!(frame.body().len(), ChallengeBody::SIZE);

    let challenge = parse_challenge(&frame).expect("a freshly built challenge frame must parse");
    assert_eq!(challenge.challenge120.len(), 15);
}

#[test]
fn pairing_parse_rejects_wrong_size_body() {
    let frame = RawFrame::allocate(0x00, 0x00, b"too short");
    assert!(parse_pairing(&frame).is_none());
}

#[test]
fn challenge_parse_rejects_wrong_size_body() {
    let frame = RawFrame::allocate(0x00, 0x00, b"way too short for a challenge body");
    assert!(parse_challenge(&frame).is_none());
}

#[test]
fn successive_draws_from_the_same_source_differ() {
    let mut rand = TestRand::new(12);
    let first = create_pairing(0x00, 0x00, &mut rand);
    let second = create_pairing(0x00, 0x00, &mut rand);
    assert_ne!(first.body(), second.body(), "two sequential draws must not reuse the same key material");
}
