use crate::params::LfsrConfig;
use crate::trace::{TraceOp, TraceSink, TraceStep};
use std::fmt;

/// Display budget: register-shift steps noted before eliding the rest.
const TRACED_SHIFTS: usize = 15;
/// Display budget: byte-level XOR steps recorded before eliding the rest.
const TRACED_XORS: usize = 15;

/// 8-bit Fibonacci LFSR. Bits are stored most-significant first, so the
/// rightmost slot is the output end and feedback is inserted at the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LfsrRegister {
    bits: [u8; 8],
}

impl LfsrRegister {
    /// Load the register from the seed's binary representation, MSB first.
    pub fn from_seed(seed: u8) -> Self {
        let mut bits = [0u8; 8];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = (seed >> (7 - i)) & 1;
        }
        Self { bits }
    }

    /// Advance one step: emit the rightmost bit, XOR the tap positions of the
    /// pre-shift state into a feedback bit, and shift right with the feedback
    /// inserted at the front.
    pub fn step(&mut self, taps: &[u8]) -> u8 {
        let output = self.bits[7];
        let mut feedback = 0u8;
        for &tap in taps {
            feedback ^= self.bits[tap as usize];
        }
        for i in (1..8).rev() {
            self.bits[i] = self.bits[i - 1];
        }
        self.bits[0] = feedback;
        output
    }
}

impl fmt::Display for LfsrRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// LFSR stream stage: XOR the input with a keystream of `8 × len` register
/// bits, grouped MSB-first into one keystream byte per input byte.
///
/// XOR with the same keystream both encrypts and decrypts, so this stage is
/// its own inverse and takes no direction.
pub fn lfsr_stream<T: TraceSink>(text: &[u8], config: &LfsrConfig, trace: &mut T) -> Vec<u8> {
    let mut register = LfsrRegister::from_seed(config.seed);
    if trace.is_enabled() {
        trace.note(format!("Initial state: {}", register));
    }

    let mut output = Vec::with_capacity(text.len());
    let mut bit_index = 0usize;

    for (i, &byte) in text.iter().enumerate() {
        // Input byte i consumes keystream bits [8i, 8i+8), MSB first
        let mut key_byte = 0u8;
        for _ in 0..8 {
            let bit = register.step(&config.taps);
            key_byte = (key_byte << 1) | bit;
            if trace.is_enabled() && bit_index < TRACED_SHIFTS {
                trace.note(format!(
                    "Step {}: {} -> bit: {}",
                    bit_index + 1,
                    register,
                    bit
                ));
            }
            bit_index += 1;
        }

        let result = byte ^ key_byte;
        if trace.is_enabled() && i < TRACED_XORS {
            trace.record(TraceStep {
                index: i,
                input: byte,
                op: TraceOp::Xor,
                key: key_byte,
                output: result,
            });
        }
        output.push(result);
    }

    if trace.is_enabled() {
        let total_bits = text.len() * 8;
        if total_bits > TRACED_SHIFTS {
            trace.elide_notes(total_bits - TRACED_SHIFTS);
        }
        if text.len() > TRACED_XORS {
            trace.elide_steps(text.len() - TRACED_XORS);
        }
    }

    output
}
