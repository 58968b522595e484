//! The 128-bit CMAC nonce used to authenticate a direction's messages

use zeroize::Zeroize;

/// A 128-bit nonce, laid out as a 1-byte counter followed by a 120-bit challenge
///
/// # Implementation Note
/// The counter occupies the low byte so that it can be read and written independently of the challenge, which is
/// installed once per session and shared between both directions.
#[derive(Debug, Clone, Copy, Zeroize)]
pub struct Nonce {
    /// The raw 16 bytes, `[counter, challenge120[0], ..., challenge120[14]]`
    bytes: [u8; 16],
}
impl Nonce {
    /// Creates a new nonce from raw bytes, e.g. freshly drawn random bytes
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self { bytes }
    }

    /// The 8-bit counter occupying the low byte
    pub const fn counter(&self) -> u8 {
        self.bytes[0]
    }
    /// Sets the counter
    pub fn set_counter(&mut self, counter: u8) {
        self.bytes[0] = counter;
    }
    /// Returns a copy of this nonce with the counter replaced, leaving `self` untouched
    ///
    /// # Implementation Note
    /// This is used to build a verification candidate without mutating committed receive state, so that a failed
    /// verification can never perturb the authenticator.
    pub const fn with_counter(&self, counter: u8) -> Self {
        let mut bytes = self.bytes;
        bytes[0] = counter;
        Self { bytes }
    }

    /// The 120-bit challenge
    pub fn challenge(&self) -> [u8; 15] {
        // Note: The array length is assumed to be valid
        #[allow(clippy::indexing_slicing, reason = "Length is fixed and always valid")]
        let challenge = &self.bytes[1..];
        challenge.try_into().expect("nonce is always 16 bytes long")
    }
    /// Sets the 120-bit challenge
    pub fn set_challenge(&mut self, challenge120: &[u8; 15]) {
        // Note: The array length is assumed to be valid
        #[allow(clippy::indexing_slicing, reason = "Length is fixed and always valid")]
        self.bytes[1..].copy_from_slice(challenge120);
    }

    /// The raw 16 bytes, ready to be fed to the CMAC engine as the IV block
    pub const fn to_bytes(self) -> [u8; 16] {
        self.bytes
    }
}
