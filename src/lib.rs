//! A symmetric, challenge-based authenticated messaging core for K-Line automotive buses.
//!
//! This crate implements the wire framing, nonce handling and CMAC-based authentication used between a Car
//! Electronics Module (CEM) and a Passive Access Key Module (PAKM) over a low-bandwidth serial K-Line bus. It does
//! not implement the bus I/O itself, nor the underlying AES implementation or randomness source - both are injected
//! by the caller.
#![no_std]
// Clippy lints
#![warn(clippy::large_stack_arrays)]
#![warn(clippy::arithmetic_side_effects)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::panic)]
#![warn(clippy::todo)]
#![warn(clippy::unimplemented)]
#![warn(clippy::unreachable)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::allow_attributes_without_reason)]
#![warn(clippy::cognitive_complexity)]

pub mod authenticator;
pub mod crypto;
pub mod direction;
pub mod frame;
pub mod nonce;
pub mod rand;

/// An authenticator using the `aes` crate's `Aes128` implementation
#[cfg(feature = "aes")]
pub type Authenticator = crate::authenticator::Authenticator<aes::Aes128>;
