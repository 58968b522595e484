//! The challenge message body, refreshing both directions' nonces

use crate::{frame::raw::RawFrame, rand::RandomSource};

/// A 120-bit challenge value
#[derive(Debug, Clone, Copy)]
pub struct ChallengeBody {
    /// The 120-bit challenge
    pub challenge120: [u8; 15],
}
impl ChallengeBody {
    /// The size of a challenge body, in bytes
    pub const SIZE: usize = 15;
}

/// Creates a challenge frame with a freshly drawn random challenge
pub fn create_challenge<R>(addr: u8, function: u8, rand: &mut R) -> RawFrame
where
    R: RandomSource,
{
    let mut body = [0; ChallengeBody::SIZE];
    rand.fill_bytes(&mut body);

    let mut frame = RawFrame::allocate(addr, function, &body);
    frame.checksum_stamp();
    frame
}

/// Parses a challenge body out of a frame
pub fn parse_challenge(frame: &RawFrame) -> Option<ChallengeBody> {
    let body = frame.body();
    let true = body.len() == ChallengeBody::SIZE else { return None };
    Some(ChallengeBody { challenge120: body.first_chunk().copied()? })
}
