//! Token module for RS256 JWT handling
//!
//! - RSA keypair lifecycle (generate, persist, load once)
//! - Signed token encoding and decoding

mod codec;
mod key_manager;

#[cfg(test)]
mod tests;

pub use codec::{TokenCodec, SIGNING_ALGORITHM};
pub use key_manager::{Rs256KeyManager, MIN_KEY_BITS};
