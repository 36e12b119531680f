//! Cipherchain - Educational Reversible Cipher Chain
//!
//! A three-stage, keyed, byte-oriented cipher pipeline plus a statistical
//! classifier that guesses whether content is plaintext or ciphertext.
//! This is a teaching tool: the ciphers are classical and deliberately weak,
//! and make no claim of resisting attack. The value is the deterministic,
//! exactly invertible transformation and the entropy-based detector.
//!
//! ## Transform Pipeline
//!
//! ```text
//! Encrypt: Input → Vigenere → Caesar → LFSR stream → Output
//! Decrypt: Input → LFSR stream → Caesar⁻¹ → Vigenere⁻¹ → Output
//! ```
//!
//! - **Vigenere**: per-position additive shift from a repeating alphabetic key,
//!   applied over the full 0-255 byte domain
//! - **Caesar**: constant additive shift (1-25), same 0-255 domain
//! - **LFSR stream**: 8-bit Fibonacci linear-feedback shift register keystream
//!   XORed against the data (self-inverse)
//!
//! Every stage preserves length exactly and the composition round-trips:
//! `decrypt(encrypt(x, p), p) == x` for all byte sequences and valid parameters.
//!
//! ## Example
//!
//! ```
//! use cipherchain::{classify, decrypt, encrypt, CipherParams, Classification};
//!
//! let params = CipherParams::new("rahasia", 3, 42, &[0, 2, 3, 4]).unwrap();
//! let message = b"Attack at dawn!";
//!
//! assert_eq!(classify(message), Classification::Plaintext);
//!
//! let ciphertext = encrypt(message, &params);
//! assert_eq!(ciphertext.len(), message.len());
//! assert_eq!(decrypt(&ciphertext, &params), message);
//! ```

pub mod chain;
pub mod classify;
pub mod cli;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod trace;

pub use chain::{decrypt, decrypt_traced, encrypt, encrypt_traced};
pub use classify::{classify, shannon_entropy, unusual_ratio, Classification};
pub use error::{CipherChainError, Result};
pub use params::{CipherParams, LfsrConfig, VigenereKey};
pub use trace::{ChainTrace, StageTrace, TraceStep};
