use crate::error::{CipherChainError, Result};

/// Repeating Vigenere key. Non-empty, ASCII-alphabetic, case-insensitive:
/// only the letter's position in the alphabet (0-25) contributes to the shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey {
    shifts: Vec<u8>,
}

impl VigenereKey {
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherChainError::InvalidKey("key must not be empty".into()));
        }
        if let Some(bad) = key.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(CipherChainError::InvalidKey(format!(
                "key must be alphabetic, found {:?}",
                bad
            )));
        }

        let shifts = key
            .bytes()
            .map(|b| b.to_ascii_uppercase() - b'A')
            .collect();
        Ok(Self { shifts })
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Shift for text position `i`. The key cycles by position and advances
    /// once per input byte regardless of the byte's value.
    pub fn shift_at(&self, i: usize) -> u8 {
        self.shifts[i % self.shifts.len()]
    }
}

/// LFSR configuration: 8-bit seed and feedback tap positions.
///
/// The all-zero register is a fixed point of the feedback rule, so seed 0 is
/// rejected. Tap positions are range-checked (0-7) but not otherwise policed:
/// a tap set whose feedback collapses to zero (for example an empty set, or
/// duplicates that cancel in the XOR) drains the register and degenerates the
/// keystream. That is a known-weak configuration left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LfsrConfig {
    pub seed: u8,
    pub taps: Vec<u8>,
}

impl LfsrConfig {
    pub fn new(seed: u8, taps: &[u8]) -> Result<Self> {
        if seed == 0 {
            return Err(CipherChainError::InvalidSeed(0));
        }
        for &tap in taps {
            if tap > 7 {
                return Err(CipherChainError::InvalidTap(tap as usize));
            }
        }
        Ok(Self {
            seed,
            taps: taps.to_vec(),
        })
    }
}

/// Validated parameter bundle for one pipeline invocation.
///
/// All validation happens here, before any transformation begins; the cipher
/// stages themselves are total over every byte and register value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherParams {
    pub key: VigenereKey,
    pub shift: u8,
    pub lfsr: LfsrConfig,
}

impl CipherParams {
    pub fn new(key: &str, shift: u8, seed: u8, taps: &[u8]) -> Result<Self> {
        let key = VigenereKey::new(key)?;
        if !(1..=25).contains(&shift) {
            return Err(CipherChainError::InvalidShift(shift as i64));
        }
        let lfsr = LfsrConfig::new(seed, taps)?;
        Ok(Self { key, shift, lfsr })
    }
}
