pub mod caesar;
pub mod lfsr;
pub mod vigenere;

pub use caesar::*;
pub use lfsr::*;
pub use vigenere::*;

/// Which way an invertible stage runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Additive shift over the full byte domain with the mathematical
/// (non-negative) remainder, so negative intermediates from decryption wrap
/// back into 0-255 instead of truncating.
pub(crate) fn add_mod256(value: u8, shift: i16) -> u8 {
    (i16::from(value) + shift).rem_euclid(256) as u8
}
