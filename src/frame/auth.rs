//! The authenticated message body: an auth header, a signed region, and a signature

use crate::{
    crypto,
    frame::{raw::RawFrame, MAX_BODY_SIZE, MAX_MESSAGE_SIZE},
};

/// The length of the auth header (`txcnt`, `sdata_len`), in bytes
const AUTH_HEADER_SIZE: usize = 2;

/// A borrowed view onto the signed payload of a successfully authenticated message
#[derive(Debug, Clone, Copy)]
pub struct SignedView<'a> {
    /// The application-defined signed command byte
    pub scmd: u8,
    /// The remaining signed payload
    pub payload: &'a [u8],
}

/// Builds an authenticated frame body for the given counter and signed content, with an all-zero signature
///
/// Returns `None` if the signed content does not fit into a frame body together with its header and signature.
pub fn allocate(addr: u8, function: u8, txcnt: u8, scmd: u8, signed_payload: &[u8]) -> Option<RawFrame> {
    let sdata_len = signed_payload.len().checked_add(1)?;
    let sdata_len_u8 = u8::try_from(sdata_len).ok()?;
    let body_len = AUTH_HEADER_SIZE.checked_add(sdata_len)?.checked_add(crypto::SIG_SIZE)?;
    let _fits @ ..=MAX_BODY_SIZE = body_len else {
        // The signed content does not fit into a single frame
        return None;
    };

    let mut body = [0; MAX_BODY_SIZE];
    #[allow(clippy::indexing_slicing, reason = "body_len was just checked to be within bounds")]
    {
        body[0] = txcnt;
        body[1] = sdata_len_u8;
        body[2] = scmd;
        body.get_mut(3..sdata_len.checked_add(2)?)?.copy_from_slice(signed_payload);
    }

    Some(RawFrame::allocate(addr, function, body.get(..body_len)?))
}

/// Writes the signature into its reserved slot at the end of the body
pub fn set_sig(frame: &mut RawFrame, sig: &[u8; crypto::SIG_SIZE]) -> Option<()> {
    let signed_end = signed_region_end(frame.body())?;
    frame.body_mut().get_mut(signed_end..signed_end.checked_add(crypto::SIG_SIZE)?)?.copy_from_slice(sig);
    Some(())
}

/// Parses the auth header and signature out of a frame, returning `(txcnt, signed_region, sig)`
pub fn parse(frame: &RawFrame) -> Option<(u8, &[u8], &[u8; crypto::SIG_SIZE])> {
    let body = frame.body();
    let &txcnt = body.first()?;
    let signed_end = signed_region_end(body)?;

    let true = body.len() == signed_end.checked_add(crypto::SIG_SIZE)? else {
        // The body contains extra or missing bytes beyond the declared signed region and signature
        return None;
    };

    let signed_region = body.get(AUTH_HEADER_SIZE..signed_end)?;
    let sig = body.get(signed_end..)?.first_chunk()?;
    Some((txcnt, signed_region, sig))
}

/// Returns a view onto the signed command byte and payload of a frame that has already been parsed successfully
pub fn signed_view(frame: &RawFrame) -> Option<SignedView<'_>> {
    let (_txcnt, signed_region, _sig) = parse(frame)?;
    let (&scmd, payload) = signed_region.split_first()?;
    Some(SignedView { scmd, payload })
}

/// Builds the message that is fed to the CMAC engine: the frame header, followed by the auth header and signed
/// region (but not the signature itself)
///
/// Returns an owned buffer together with the number of meaningful bytes within it, since a [`RawFrame`] stores its
/// header and body separately and this message must be contiguous.
pub fn signed_message(frame: &RawFrame) -> Option<([u8; MAX_MESSAGE_SIZE], usize)> {
    let body = frame.body();
    let signed_end = signed_region_end(body)?;
    let prefix = body.get(..signed_end)?;

    let mut message = [0; MAX_MESSAGE_SIZE];
    #[allow(clippy::indexing_slicing, reason = "MAX_MESSAGE_SIZE always leaves room for the 3-byte header")]
    {
        message[0] = frame.addr();
        message[1] = u8::try_from(frame.length()).ok()?;
        message[2] = frame.function();
    }
    let total = RawFrame::HEADER_SIZE.checked_add(prefix.len())?;
    message.get_mut(RawFrame::HEADER_SIZE..total)?.copy_from_slice(prefix);
    Some((message, total))
}

/// Computes the offset just past the signed region (`AUTH_HEADER_SIZE + sdata_len`), i.e. where the signature starts
fn signed_region_end(body: &[u8]) -> Option<usize> {
    let &[_txcnt, sdata_len, ..] = body else { return None };
    AUTH_HEADER_SIZE.checked_add(usize::from(sdata_len))
}
