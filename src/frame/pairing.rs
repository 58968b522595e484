//! The pairing message body, transporting the two direction keys

use crate::{frame::raw::RawFrame, rand::RandomSource};

/// The two symmetric keys exchanged during pairing
///
/// # ⚠️ HAZMAT ⚠️
/// The keys are transported as plaintext within the frame body. The surrounding channel (e.g. a one-time
/// diagnostic/service connection) is assumed to be confidential and authentic; this type does not add any protection
/// of its own.
#[derive(Debug, Clone, Copy)]
pub struct PairingBody {
    /// The key used for CEM-to-PAKM messages
    pub cem_to_pak: [u8; 16],
    /// The key used for PAKM-to-CEM messages
    pub pak_to_cem: [u8; 16],
}
impl PairingBody {
    /// The size of a pairing body, in bytes
    pub const SIZE: usize = 32;
}

/// Creates a pairing frame with two freshly drawn random keys
pub fn create_pairing<R>(addr: u8, function: u8, rand: &mut R) -> RawFrame
where
    R: RandomSource,
{
    let mut body = [0; PairingBody::SIZE];
    rand.fill_bytes(&mut body);

    let mut frame = RawFrame::allocate(addr, function, &body);
    frame.checksum_stamp();
    frame
}

/// Parses a pairing body out of a frame
pub fn parse_pairing(frame: &RawFrame) -> Option<PairingBody> {
    let body = frame.body();
    let true = body.len() == PairingBody::SIZE else { return None };

    let (cem_to_pak, pak_to_cem) = body.split_at_checked(16)?;
    Some(PairingBody {
        cem_to_pak: cem_to_pak.first_chunk().copied()?,
        pak_to_cem: pak_to_cem.first_chunk().copied()?,
    })
}
