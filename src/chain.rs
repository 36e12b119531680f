//! Composition of the three cipher stages.
//!
//! Encryption applies Vigenere, then Caesar, then the LFSR stream; decryption
//! applies the inverses in the exact reverse order. The chain itself never
//! classifies: refusing to re-encrypt already-encrypted content is a policy
//! for callers (the CLI applies it, overridably).

use crate::params::CipherParams;
use crate::pipeline::{caesar, lfsr_stream, vigenere, Direction};
use crate::trace::{ChainTrace, NoTrace, StageTrace};

/// Encrypt: Vigenere → Caesar → LFSR stream.
pub fn encrypt(data: &[u8], params: &CipherParams) -> Vec<u8> {
    let substituted = vigenere(data, &params.key, Direction::Encrypt, &mut NoTrace);
    let shifted = caesar(&substituted, params.shift, Direction::Encrypt, &mut NoTrace);
    lfsr_stream(&shifted, &params.lfsr, &mut NoTrace)
}

/// Decrypt: LFSR stream → Caesar⁻¹ → Vigenere⁻¹.
pub fn decrypt(data: &[u8], params: &CipherParams) -> Vec<u8> {
    let unstreamed = lfsr_stream(data, &params.lfsr, &mut NoTrace);
    let unshifted = caesar(&unstreamed, params.shift, Direction::Decrypt, &mut NoTrace);
    vigenere(&unshifted, &params.key, Direction::Decrypt, &mut NoTrace)
}

/// [`encrypt`] with a per-stage trace, in applied order.
pub fn encrypt_traced(data: &[u8], params: &CipherParams) -> (Vec<u8>, ChainTrace) {
    let mut vigenere_trace = StageTrace::new("vigenere");
    let mut caesar_trace = StageTrace::new("caesar");
    let mut lfsr_trace = StageTrace::new("lfsr");

    let substituted = vigenere(data, &params.key, Direction::Encrypt, &mut vigenere_trace);
    let shifted = caesar(
        &substituted,
        params.shift,
        Direction::Encrypt,
        &mut caesar_trace,
    );
    let output = lfsr_stream(&shifted, &params.lfsr, &mut lfsr_trace);

    let trace = ChainTrace {
        stages: vec![vigenere_trace, caesar_trace, lfsr_trace],
    };
    (output, trace)
}

/// [`decrypt`] with a per-stage trace, in applied order.
pub fn decrypt_traced(data: &[u8], params: &CipherParams) -> (Vec<u8>, ChainTrace) {
    let mut lfsr_trace = StageTrace::new("lfsr");
    let mut caesar_trace = StageTrace::new("caesar");
    let mut vigenere_trace = StageTrace::new("vigenere");

    let unstreamed = lfsr_stream(data, &params.lfsr, &mut lfsr_trace);
    let unshifted = caesar(
        &unstreamed,
        params.shift,
        Direction::Decrypt,
        &mut caesar_trace,
    );
    let output = vigenere(&unshifted, &params.key, Direction::Decrypt, &mut vigenere_trace);

    let trace = ChainTrace {
        stages: vec![lfsr_trace, caesar_trace, vigenere_trace],
    };
    (output, trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CipherParams {
        CipherParams::new("rahasia", 3, 42, &[0, 2, 3, 4]).unwrap()
    }

    #[test]
    fn test_known_pipeline_vector() {
        let ciphertext = encrypt(b"Attack at dawn!", &params());
        assert_eq!(
            ciphertext,
            vec![1, 61, 189, 255, 144, 227, 164, 66, 166, 1, 105, 25, 32, 39, 41]
        );
    }

    #[test]
    fn test_round_trip() {
        let original: Vec<u8> = (0..=255).cycle().take(1000).collect();
        let ciphertext = encrypt(&original, &params());
        assert_ne!(ciphertext, original);
        assert_eq!(decrypt(&ciphertext, &params()), original);
    }

    #[test]
    fn test_round_trip_empty() {
        assert!(encrypt(&[], &params()).is_empty());
        assert!(decrypt(&[], &params()).is_empty());
    }

    #[test]
    fn test_length_preserved() {
        for len in [0usize, 1, 7, 256, 4096] {
            let data = vec![b'x'; len];
            assert_eq!(encrypt(&data, &params()).len(), len);
        }
    }

    #[test]
    fn test_traced_matches_untraced() {
        let data = b"tracing must not perturb the transformation";
        let (ciphertext, enc_trace) = encrypt_traced(data, &params());
        assert_eq!(ciphertext, encrypt(data, &params()));

        let (plaintext, dec_trace) = decrypt_traced(&ciphertext, &params());
        assert_eq!(plaintext, data);

        let enc_order: Vec<&str> = enc_trace.stages.iter().map(|s| s.stage).collect();
        let dec_order: Vec<&str> = dec_trace.stages.iter().map(|s| s.stage).collect();
        assert_eq!(enc_order, vec!["vigenere", "caesar", "lfsr"]);
        assert_eq!(dec_order, vec!["lfsr", "caesar", "vigenere"]);
    }

    #[test]
    fn test_different_keys_produce_different_ciphertext() {
        let data = b"parameter sensitivity";
        let other = CipherParams::new("secrets", 3, 42, &[0, 2, 3, 4]).unwrap();
        assert_ne!(encrypt(data, &params()), encrypt(data, &other));
    }

    #[test]
    fn test_deterministic() {
        let data = b"no hidden randomness";
        assert_eq!(encrypt(data, &params()), encrypt(data, &params()));
    }
}
