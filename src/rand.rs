//! An injected randomness capability

/// A source of cryptographically suitable random bytes
///
/// # ⚠️ HAZMAT ⚠️
/// **Nonces, keys and challenges are filled using this trait. A weak or predictable implementation results in a
/// total and utter loss of any security.**
pub trait RandomSource {
    /// Fills `buf` with random bytes
    fn fill_bytes(&mut self, buf: &mut [u8]);
}

/// A blanket implementation over any `rand_core`-compatible generator
#[cfg(feature = "rand_core")]
impl<T> RandomSource for T
where
    T: rand_core::RngCore,
{
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        rand_core::RngCore::fill_bytes(self, buf);
    }
}
