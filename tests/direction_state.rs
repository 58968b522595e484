//! Tests for `DirectionState` in isolation, independent of the `Authenticator` session wrapper

use klineauth::direction::DirectionState;

type Dir = DirectionState<aes::Aes128>;

#[test]
fn bump_counter_for_send_post_increments() {
    let mut dir = Dir::new([0; 16]);
    dir.set_counter(1);

    assert_eq!(dir.bump_counter_for_send(), Some(1));
    assert_eq!(dir.counter(), 2);
    assert_eq!(dir.bump_counter_for_send(), Some(2));
    assert_eq!(dir.counter(), 3);
}

#[test]
fn bump_counter_for_send_refuses_at_the_ceiling() {
    let mut dir = Dir::new([0; 16]);
    dir.set_counter(254);

    assert_eq!(dir.bump_counter_for_send(), Some(254));
    assert_eq!(dir.counter(), 255);
    // The counter has reached its reserved maximum; it must never advance past it.
    assert_eq!(dir.bump_counter_for_send(), None);
    assert_eq!(dir.counter(), 255, "a refused bump must not mutate the stored counter");
}

#[test]
fn accept_counter_requires_strictly_greater_and_below_ceiling() {
    let mut dir = Dir::new([0; 16]);
    dir.set_counter(10);

    assert!(!dir.accept_counter(9), "equal or lower counters must be rejected as replays");
    assert!(!dir.accept_counter(10), "equal counters must be rejected as replays");
    assert!(dir.accept_counter(11));
    assert!(dir.accept_counter(254));
    assert!(!dir.accept_counter(255), "the reserved ceiling value must never be accepted");
}

#[test]
fn commit_counter_only_changes_state_when_called() {
    let mut dir = Dir::new([0; 16]);
    dir.set_counter(5);

    assert!(dir.accept_counter(6), "checking acceptability must not itself commit");
    assert_eq!(dir.counter(), 5);

    dir.commit_counter(6);
    assert_eq!(dir.counter(), 6);
}

#[test]
fn verify_candidate_never_mutates_the_stored_counter() {
    let mut dir: Dir = Dir::new([0; 16]);
    dir.pair(&[0x42; 16]);
    dir.set_challenge(&[0x01; 15]);
    dir.set_counter(5);

    let sig = dir.sign(b"some message");
    // A wrong candidate counter must fail verification without touching the stored counter.
    assert!(!dir.verify_candidate(6, b"some message", &sig));
    assert_eq!(dir.counter(), 5);

    // The counter the message was actually signed under must verify.
    assert!(dir.verify_candidate(5, b"some message", &sig));
    assert_eq!(dir.counter(), 5, "verification alone must never commit");
}
