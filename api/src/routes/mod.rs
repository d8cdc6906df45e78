//! Route handlers
//!
//! - `auth` - Registration, login, token refresh, logout and key publication
//! - `me` - Identity of the authenticated caller

pub mod auth;
pub mod me;
