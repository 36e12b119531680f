//! Plaintext/ciphertext detector.
//!
//! Two independent signals over the raw bytes: the share of bytes outside the
//! printable ASCII range, and the order-0 Shannon entropy of the byte-value
//! distribution. Either one crossing its threshold flags the content as
//! encrypted. This is a heuristic, not a proof: dense non-ASCII text can
//! misclassify, and that is accepted.

use serde::Serialize;

/// Fraction of bytes outside printable ASCII above which content is
/// considered encrypted.
pub const UNUSUAL_RATIO_THRESHOLD: f64 = 0.3;

/// Entropy (bits per byte) above which content is considered encrypted.
pub const ENTROPY_THRESHOLD: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Plaintext,
    Encrypted,
}

/// Classify raw bytes as plaintext or encrypted. Empty input is the
/// degenerate case and classifies as plaintext.
pub fn classify(data: &[u8]) -> Classification {
    if data.is_empty() {
        return Classification::Plaintext;
    }

    if unusual_ratio(data) > UNUSUAL_RATIO_THRESHOLD || shannon_entropy(data) > ENTROPY_THRESHOLD {
        Classification::Encrypted
    } else {
        Classification::Plaintext
    }
}

/// Fraction of bytes with value < 32 or > 126.
pub fn unusual_ratio(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let unusual = data.iter().filter(|&&b| b < 32 || b > 126).count();
    unusual as f64 / data.len() as f64
}

/// Order-0 Shannon entropy of the byte-value distribution, in bits per byte.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut freq = [0u64; 256];
    for &byte in data {
        freq[byte as usize] += 1;
    }

    let len = data.len() as f64;
    let mut entropy = 0.0;

    for &count in &freq {
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * p.log2();
        }
    }

    entropy
}
