use crate::params::VigenereKey;
use crate::pipeline::{add_mod256, Direction};
use crate::trace::{TraceOp, TraceSink, TraceStep};

/// Display budget: per-byte steps recorded before eliding the rest.
const TRACED_STEPS: usize = 20;

/// Vigenere-style substitution over the full byte domain.
///
/// The shift for position `i` comes from the repeating key (0-25 per letter,
/// case-insensitive). The key index advances exactly once per input byte, for
/// every byte value; unlike classical Vigenere there is no letters-only
/// restriction, and non-alphabetic input bytes are shifted like any other.
pub fn vigenere<T: TraceSink>(
    text: &[u8],
    key: &VigenereKey,
    direction: Direction,
    trace: &mut T,
) -> Vec<u8> {
    if trace.is_enabled() {
        trace.note(format!("Key length: {}", key.len()));
    }

    let (op, sign) = match direction {
        Direction::Encrypt => (TraceOp::Add, 1i16),
        Direction::Decrypt => (TraceOp::Sub, -1i16),
    };

    let mut output = Vec::with_capacity(text.len());
    for (i, &byte) in text.iter().enumerate() {
        let shift = key.shift_at(i);
        let result = add_mod256(byte, sign * i16::from(shift));
        if trace.is_enabled() && i < TRACED_STEPS {
            trace.record(TraceStep {
                index: i,
                input: byte,
                op,
                key: shift,
                output: result,
            });
        }
        output.push(result);
    }

    if trace.is_enabled() && text.len() > TRACED_STEPS {
        trace.elide_steps(text.len() - TRACED_STEPS);
    }

    output
}
