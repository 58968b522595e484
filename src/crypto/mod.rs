//! Cryptographic primitives for authenticated K-Line frames

// Re-export the basic `cipher`-crate as its traits are used in public APIs
pub use cipher;
// Re-export the `aes`-crate if the feature is enabled
#[cfg(feature = "aes")]
pub use aes;

use cipher::{generic_array::GenericArray, generic_array::typenum::U16, BlockCipher, BlockEncrypt, KeyInit};
use cmac::{Cmac, Mac};

/// A marker trait for a raw AES-128 implementation
///
/// # ⚠️ HAZMAT ⚠️
/// **With this trait, it is possible to inject faulty or incompatible implementations. Faulty or incompatible
/// implementations may result in a total and utter loss of any security.**
pub trait Aes128
where
    Self: BlockCipher<BlockSize = U16> + BlockEncrypt + KeyInit<KeySize = U16> + Clone,
{
    // No member functions
}
#[cfg(feature = "aes")]
impl Aes128 for aes::Aes128 {
    // Nothing to implement here
}

/// The length of a truncated signature, in bytes
pub const SIG_SIZE: usize = 8;

/// Computes the truncated CMAC signature over `nonce || message`, keyed by `key`
///
/// # Panics
/// This function panics if `nonce.len() + message.len()` is greater than `255`.
pub fn sign<Aes>(key: &[u8; 16], nonce: &[u8; 16], message: &[u8]) -> [u8; SIG_SIZE]
where
    Aes: Aes128,
{
    let mac = cmac::<Aes>(key, nonce, message).finalize().into_bytes();
    *mac.first_chunk().expect("MAC is too short")
}

/// Validates a truncated CMAC signature over `nonce || message`, keyed by `key`, in constant time
#[must_use]
pub fn verify<Aes>(key: &[u8; 16], nonce: &[u8; 16], message: &[u8], sig: &[u8; SIG_SIZE]) -> bool
where
    Aes: Aes128,
{
    let total_length = nonce.len().saturating_add(message.len());
    let ..=255 = total_length else {
        // Reject the message as it is too long to be a legitimate frame
        return false;
    };
    cmac::<Aes>(key, nonce, message).verify_truncated_left(sig).is_ok()
}

/// Initializes a CMAC state keyed by `key`, with `nonce` fed as the first (IV) block, followed by `message`
fn cmac<Aes>(key: &[u8; 16], nonce: &[u8; 16], message: &[u8]) -> Cmac<Aes>
where
    Aes: Aes128,
{
    let key = GenericArray::from_slice(key);
    let mut cmac: Cmac<Aes> = Cmac::new(key);
    cmac.update(nonce);
    cmac.update(message);
    cmac
}
