//! Shared test helpers

use klineauth::rand::RandomSource;

/// A deterministic, non-cryptographic byte source for reproducible tests
///
/// # ⚠️ HAZMAT ⚠️
/// This is **not** a secure random source. It exists purely so tests are deterministic; never use it outside tests.
#[derive(Debug, Clone, Copy)]
pub struct TestRand {
    /// The next byte value to emit
    state: u8,
}
impl TestRand {
    /// Creates a new generator seeded with `seed`
    pub const fn new(seed: u8) -> Self {
        Self { state: seed }
    }
}
impl RandomSource for TestRand {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        for byte in buf {
            self.state = self.state.wrapping_add(1);
            *byte = self.state;
        }
    }
}
