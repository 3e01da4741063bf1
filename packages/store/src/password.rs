//! Strong password generation.
//!
//! Passwords are lowercase hex strings drawn from the operating system's
//! entropy source, so they are safe to store and to print in a terminal.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::Error;

/// Shortest password the generator will produce.
pub const MIN_PASSWORD_LENGTH: usize = 16;

/// Generate a random password of exactly `length` hex characters.
///
/// Rejects lengths below [`MIN_PASSWORD_LENGTH`]. Each character is backed
/// by four bits of fresh entropy; an entropy-source failure is returned as
/// [`Error::Entropy`] and is not retried.
pub fn generate_strong_password(length: usize) -> Result<String, Error> {
    if length < MIN_PASSWORD_LENGTH {
        return Err(Error::PasswordTooShort {
            requested: length,
            minimum: MIN_PASSWORD_LENGTH,
        });
    }

    // Hex-encoding doubles the byte count, so half as many bytes (rounded
    // up) covers `length` characters.
    let mut bytes = vec![0u8; length.div_ceil(2)];
    OsRng.try_fill_bytes(&mut bytes)?;

    let mut password = hex::encode(bytes);
    password.truncate(length);
    Ok(password)
}
