//! Authentication route handlers
//!
//! Login and registration return the access token in the body and set the
//! refresh token as an HTTP-only cookie scoped to the refresh endpoint.

pub mod cookie;
pub mod login;
pub mod logout;
pub mod public_key;
pub mod refresh;
pub mod register;

pub use login::login;
pub use logout::logout;
pub use public_key::public_key;
pub use refresh::refresh;
pub use register::register;
