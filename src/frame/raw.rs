//! A raw frame structure for (de-)serialisation

use crate::frame::{MAX_BODY_SIZE, MAX_MESSAGE_SIZE};

/// A raw K-Line frame structure for (de-)serialisation
///
/// # ⚠️ HAZMAT ⚠️
/// Raw frames are **unvalidated**. While they might be useful to quickly reject frames (e.g. due to a checksum
/// mismatch), they __MUST NOT__ be used for any real purposes by themselves. Always treat the data from a
/// [`RawFrame`] as untrusted and potentially malicious until it has been authenticated.
///
/// # Implementation Note
/// A frame consists of:
/// - 1 byte `addr`, the destination address
/// - 1 byte `length`, the total length of the frame, including header and checksum
/// - 1 byte `function`, the message function/type
/// - N bytes body
/// - 1 byte `checksum`, the XOR of all preceding bytes
///
/// ```ascii
/// addr[1] | length[1] | function[1] | body[N] | checksum[1]
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RawFrame {
    /// The destination address
    addr: u8,
    /// The message function/type
    function: u8,
    /// The body buffer
    body: [u8; MAX_BODY_SIZE],
    /// The amount of bytes within the body buffer
    body_len: usize,
    /// The checksum byte
    checksum: u8,
}
impl RawFrame {
    /// The header length in bytes (`addr`, `length`, `function`)
    pub const HEADER_SIZE: usize = 3;
    /// The footer length in bytes (`checksum`)
    pub const FOOTER_SIZE: usize = 1;

    /// Allocates a new frame with the given address, function and body
    ///
    /// # Panics
    /// This function panics if `body` is larger than [`MAX_BODY_SIZE`].
    pub fn allocate(addr: u8, function: u8, body: &[u8]) -> Self {
        // Create an owned buffer...
        let mut body_ = [0; MAX_BODY_SIZE];
        body_.get_mut(..body.len()).expect("body is too large")
            // ... and copy the body
            .copy_from_slice(body);

        RawFrame { addr, function, body: body_, body_len: body.len(), checksum: 0 }
    }

    /// Parses a frame, validating that the embedded `length` field matches the actual slice length
    pub fn parse(frame: &[u8]) -> Option<Self> {
        let (header, rest) = frame.split_at_checked(Self::HEADER_SIZE)?;
        let &[addr, length, function] = header else { return None };
        let true = usize::from(length) == frame.len() else {
            // The declared length does not match the actual frame length
            return None;
        };

        let body_len = rest.len().checked_sub(Self::FOOTER_SIZE)?;
        let (body, footer) = rest.split_at_checked(body_len)?;
        let &[checksum] = footer else { return None };

        let mut body_ = [0; MAX_BODY_SIZE];
        body_.get_mut(..body_len)?.copy_from_slice(body);
        Some(Self { addr, function, body: body_, body_len, checksum })
    }

    /// Serializes the frame and returns a tuple with the buffer and the amount of bytes within it
    pub fn into_frame(self) -> ([u8; MAX_MESSAGE_SIZE], usize) {
        let mut buffer = [0; MAX_MESSAGE_SIZE];

        // Note: The buffer should always be able to hold the entire frame
        #[allow(clippy::indexing_slicing, reason = "Lengths are always valid by construction")]
        {
            buffer[0] = self.addr;
            buffer[1] = u8::try_from(self.length()).expect("frame is too large");
            buffer[2] = self.function;
            buffer[Self::HEADER_SIZE..][..self.body_len].copy_from_slice(&self.body[..self.body_len]);
            buffer[Self::HEADER_SIZE + self.body_len] = self.checksum;
        }

        (buffer, self.length())
    }

    /// Computes and stamps the checksum byte, returning the stamped value
    pub fn checksum_stamp(&mut self) -> u8 {
        let cs = self.checksum_of_header_and_body();
        self.checksum = cs;
        cs
    }
    /// Validates the checksum byte
    #[must_use]
    pub fn checksum_verify(&self) -> bool {
        self.checksum == self.checksum_of_header_and_body()
    }
    /// XORs all bytes except the checksum byte itself
    fn checksum_of_header_and_body(&self) -> u8 {
        // Note: `length` always fits into a u8, since it is bounded by `MAX_MESSAGE_SIZE`.
        let length = u8::try_from(self.length()).expect("frame is too large");
        let mut cs = self.addr ^ length ^ self.function;
        for &byte in self.body() {
            cs ^= byte;
        }
        cs
    }

    /// The destination address
    pub const fn addr(&self) -> u8 {
        self.addr
    }
    /// The message function/type
    pub const fn function(&self) -> u8 {
        self.function
    }
    /// The total frame length, including header and checksum
    pub const fn length(&self) -> usize {
        Self::HEADER_SIZE + self.body_len + Self::FOOTER_SIZE
    }

    /// The body bytes
    pub fn body(&self) -> &[u8] {
        // Note: The body length is assumed to be valid
        #[allow(clippy::indexing_slicing, reason = "Length is always valid by construction")]
        &self.body[..self.body_len]
    }
    /// The body bytes, mutably
    pub fn body_mut(&mut self) -> &mut [u8] {
        // Note: The body length is assumed to be valid
        #[allow(clippy::indexing_slicing, reason = "Length is always valid by construction")]
        &mut self.body[..self.body_len]
    }

    /// The checksum byte
    pub const fn checksum(&self) -> u8 {
        self.checksum
    }
}
