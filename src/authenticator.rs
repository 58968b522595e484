//! The authenticator session object tying both directions together

use crate::{
    crypto::Aes128,
    direction::DirectionState,
    frame::{
        auth::{self, SignedView},
        pairing::PairingBody,
        raw::RawFrame,
    },
    rand::RandomSource,
};

/// A paired CEM/PAKM authentication session
///
/// An authenticator owns two [`DirectionState`]s, one for each direction of traffic. Before any authenticated
/// message can be exchanged, both sides must be paired with the same keys (see [`pair_as_cem`](Self::pair_as_cem)/
/// [`pair_as_pakm`](Self::pair_as_pakm)) and must have applied the same challenge (see
/// [`apply_challenge`](Self::apply_challenge)).
#[derive(Debug, Clone)]
pub struct Authenticator<Aes> {
    /// The transmit direction state
    tx: DirectionState<Aes>,
    /// The receive direction state
    rx: DirectionState<Aes>,
}
impl<Aes> Authenticator<Aes> {
    /// Creates a new, unpaired authenticator with random nonces
    ///
    /// Both directions start with an all-zero key and a random nonce, so that, before pairing and challenging, the
    /// session cannot accidentally authenticate anything.
    pub fn init<R>(rand: &mut R) -> Self
    where
        R: RandomSource,
    {
        let mut tx_nonce = [0; 16];
        let mut rx_nonce = [0; 16];
        rand.fill_bytes(&mut tx_nonce);
        rand.fill_bytes(&mut rx_nonce);
        Self { tx: DirectionState::new(tx_nonce), rx: DirectionState::new(rx_nonce) }
    }

    /// Installs the pairing keys as seen from the CEM: `tx` signs with `cem_to_pak`, `rx` verifies with `pak_to_cem`
    pub fn pair_as_cem(&mut self, pairing: &PairingBody) {
        self.tx.pair(&pairing.cem_to_pak);
        self.rx.pair(&pairing.pak_to_cem);
    }
    /// Installs the pairing keys as seen from the PAKM: `tx` signs with `pak_to_cem`, `rx` verifies with `cem_to_pak`
    pub fn pair_as_pakm(&mut self, pairing: &PairingBody) {
        self.tx.pair(&pairing.pak_to_cem);
        self.rx.pair(&pairing.cem_to_pak);
    }

    /// Applies a fresh challenge to both directions, resetting the transmit counter to `1` and the receive counter to
    /// `0`
    ///
    /// In practice, both challenges originate from the same broadcast value, but the two parameters are kept separate
    /// since nothing in this type enforces that only the CEM may generate challenges.
    pub fn apply_challenge(&mut self, tx_challenge: &[u8; 15], rx_challenge: &[u8; 15]) {
        self.tx.set_challenge(tx_challenge);
        self.tx.set_counter(1);
        self.rx.set_challenge(rx_challenge);
        self.rx.set_counter(0);
    }

    /// The next transmit counter value (the value that will be used by the next successful send)
    pub const fn tx_counter(&self) -> u8 {
        self.tx.counter()
    }
    /// The last accepted receive counter value
    pub const fn rx_counter(&self) -> u8 {
        self.rx.counter()
    }
    /// Forcibly overwrites the transmit counter
    ///
    /// Exposed to mirror the reference accessor used to provoke an out-of-sync session in tests; production callers
    /// should not normally need this.
    pub fn set_tx_counter(&mut self, counter: u8) {
        self.tx.set_counter(counter);
    }

    /// Consumes `self`, dropping the held key material
    ///
    /// This is equivalent to simply dropping the authenticator - both directions zeroize their key on drop - but
    /// gives callers an explicit, readable "I am done with this session" call site.
    pub fn destroy(self) {
        // Nothing to do beyond the implicit drop; `DirectionState` zeroizes itself.
    }
}
impl<Aes> Authenticator<Aes>
where
    Aes: Aes128,
{
    /// Allocates and signs an authenticated frame
    ///
    /// Returns `None` if the signed payload does not fit into a frame, or if the transmit counter has been exhausted
    /// (i.e. it has reached its reserved maximum); in the latter case, a fresh challenge must be applied before
    /// sending can resume.
    pub fn allocate_authenticated(
        &mut self,
        addr: u8,
        function: u8,
        scmd: u8,
        signed_payload: &[u8],
    ) -> Option<RawFrame> {
        let txcnt = self.tx.bump_counter_for_send()?;
        let mut raw = auth::allocate(addr, function, txcnt, scmd, signed_payload)?;

        let (message, message_len) = auth::signed_message(&raw)?;
        let sig = self.tx.sign_with_counter(txcnt, message.get(..message_len)?);
        auth::set_sig(&mut raw, &sig)?;
        raw.checksum_stamp();
        Some(raw)
    }

    /// Validates an incoming authenticated frame and returns a view onto its signed payload
    ///
    /// On any failure - checksum mismatch, malformed body, stale or exhausted counter, or signature mismatch - this
    /// returns `None` and leaves the receive counter completely untouched, so the session remains usable and the
    /// caller can request a fresh challenge.
    pub fn authenticate<'frame>(&mut self, frame: &'frame RawFrame) -> Option<SignedView<'frame>> {
        if !frame.checksum_verify() {
            return None;
        }

        let (txcnt, _signed, sig) = auth::parse(frame)?;
        if !self.rx.accept_counter(txcnt) {
            return None;
        }

        let (message, message_len) = auth::signed_message(frame)?;
        if !self.rx.verify_candidate(txcnt, message.get(..message_len)?, sig) {
            return None;
        }

        self.rx.commit_counter(txcnt);
        auth::signed_view(frame)
    }
}
