//! The K-Line wire frame

pub mod auth;
pub mod challenge;
pub mod pairing;
pub mod raw;

use crate::frame::raw::RawFrame;

/// The maximum total frame size, in bytes (bounded by the 8-bit `length` field)
pub const MAX_MESSAGE_SIZE: usize = 255;
/// The maximum size of a frame body
pub const MAX_BODY_SIZE: usize = MAX_MESSAGE_SIZE - RawFrame::HEADER_SIZE - RawFrame::FOOTER_SIZE;
