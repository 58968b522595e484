//! Per-direction authentication state

use crate::{crypto, crypto::Aes128, nonce::Nonce};
use core::marker::PhantomData;
use zeroize::ZeroizeOnDrop;

/// The authentication state for a single direction (either transmit or receive)
///
/// # ⚠️ HAZMAT ⚠️
/// This type holds raw key material. The key is zeroized on drop, but the caller must still make sure not to leak
/// copies of it (e.g. by keeping a [`PairingBody`](crate::frame::pairing::PairingBody) around longer than necessary).
#[derive(Debug, Clone, ZeroizeOnDrop)]
pub struct DirectionState<Aes> {
    /// The raw CMAC key for this direction
    key: [u8; 16],
    /// The nonce (counter + challenge) for this direction
    nonce: Nonce,
    /// The underlying AES implementation
    #[zeroize(skip)]
    _aes: PhantomData<Aes>,
}
impl<Aes> DirectionState<Aes> {
    /// Creates a new, unpaired direction state with the given (ideally random) nonce bytes and an all-zero key
    pub const fn new(nonce: [u8; 16]) -> Self {
        Self { key: [0; 16], nonce: Nonce::from_bytes(nonce), _aes: PhantomData }
    }

    /// Installs the CMAC key for this direction
    pub fn pair(&mut self, key: &[u8; 16]) {
        self.key = *key;
    }

    /// Installs the 120-bit challenge, without touching the counter
    pub fn set_challenge(&mut self, challenge120: &[u8; 15]) {
        self.nonce.set_challenge(challenge120);
    }

    /// The current counter value
    pub const fn counter(&self) -> u8 {
        self.nonce.counter()
    }
    /// Forcibly sets the counter value
    ///
    /// # Implementation Note
    /// Exposed so that misbehaving peers (or tests) can force a stale counter; [`Authenticator`](crate::authenticator::Authenticator)
    /// relies on [`accept_counter`](Self::accept_counter)/[`bump_counter_for_send`](Self::bump_counter_for_send) to
    /// reject anything this leaves inconsistent.
    pub fn set_counter(&mut self, counter: u8) {
        self.nonce.set_counter(counter);
    }

    /// Returns the counter value to stamp into the next outgoing message, then advances the stored counter
    ///
    /// Returns `None` once the counter has reached its reserved, never-to-be-used maximum instead of rolling over; the
    /// caller must treat this as a refusal to send until a fresh challenge is applied.
    pub fn bump_counter_for_send(&mut self) -> Option<u8> {
        let next = self.nonce.counter();
        let _valid @ ..255 = next else {
            // The counter must never roll over
            return None;
        };
        self.nonce.set_counter(next.saturating_add(1));
        Some(next)
    }

    /// Checks whether `received` is an acceptable next counter value without committing it
    ///
    /// This is the counter-monotonicity rule in isolation, independent of any signature check.
    #[must_use]
    pub const fn accept_counter(&self, received: u8) -> bool {
        received > self.nonce.counter() && received < 255
    }
    /// Installs `value` as the new stored counter
    ///
    /// Callers must only do this after a successful signature verification against the same value.
    pub fn commit_counter(&mut self, value: u8) {
        self.nonce.set_counter(value);
    }
}
impl<Aes> DirectionState<Aes>
where
    Aes: Aes128,
{
    /// Signs `message` using the current nonce and key
    ///
    /// # Panics
    /// This function panics if `message` is longer than `255 - 16` bytes.
    pub fn sign(&self, message: &[u8]) -> [u8; crypto::SIG_SIZE] {
        crypto::sign::<Aes>(&self.key, &self.nonce.to_bytes(), message)
    }

    /// Signs `message` under a candidate counter rather than the stored one, without mutating `self`
    ///
    /// Used to sign an outgoing frame under the counter value that was already stamped into it by
    /// [`bump_counter_for_send`](Self::bump_counter_for_send), which advances the stored counter past that value.
    ///
    /// # Panics
    /// This function panics if `message` is longer than `255 - 16` bytes.
    pub fn sign_with_counter(&self, candidate_counter: u8, message: &[u8]) -> [u8; crypto::SIG_SIZE] {
        let candidate_nonce = self.nonce.with_counter(candidate_counter);
        crypto::sign::<Aes>(&self.key, &candidate_nonce.to_bytes(), message)
    }

    /// Verifies `sig` over `message` against a candidate counter, without mutating `self`
    ///
    /// The candidate counter replaces the stored counter only for the purpose of this check; on a mismatch, the
    /// stored counter (and thus the whole direction state) is left completely untouched.
    #[must_use]
    pub fn verify_candidate(&self, candidate_counter: u8, message: &[u8], sig: &[u8; crypto::SIG_SIZE]) -> bool {
        let candidate_nonce = self.nonce.with_counter(candidate_counter);
        crypto::verify::<Aes>(&self.key, &candidate_nonce.to_bytes(), message, sig)
    }
}
