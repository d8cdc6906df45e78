//! Tests for key management and token encoding


pub(crate) const SIGNING_KEY_A: &str = include_str!("fixtures/signing_key_a.pem");
pub(crate) const SIGNING_KEY_B: &str = include_str!("fixtures/signing_key_b.pem");
pub(crate) const PUBLIC_KEY_A: &str = include_str!("fixtures/public_key_a.pem");
