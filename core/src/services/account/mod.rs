//! Account module: password hashing and the login/registration flows

mod hasher;
mod service;

#[cfg(test)]
mod tests;

pub use hasher::{BcryptHasher, PasswordHasher};
pub use service::AccountService;
