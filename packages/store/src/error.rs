//! Error types for the store crate.
//!
//! Only validation and entropy failures surface to callers. Persistence
//! failures are logged at the site of the write and swallowed, so the map
//! and the snapshot file can diverge until the next successful save.

/// Errors returned by password generation and [`Store::set_password`].
///
/// [`Store::set_password`]: crate::Store::set_password
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The requested password length is below the configured floor.
    #[error("password length must be at least {minimum} characters, got {requested}")]
    PasswordTooShort {
        /// Length the caller asked for.
        requested: usize,
        /// Shortest length the generator accepts.
        minimum: usize,
    },

    /// The operating system's entropy source failed to supply random bytes.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] rand::Error),
}
