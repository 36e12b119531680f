use crate::pipeline::{add_mod256, Direction};
use crate::trace::{TraceOp, TraceSink, TraceStep};

const TRACED_STEPS: usize = 20;

/// Caesar-style constant shift over the full byte domain. Encryption adds the
/// shift, decryption subtracts it; both wrap modulo 256.
pub fn caesar<T: TraceSink>(text: &[u8], shift: u8, direction: Direction, trace: &mut T) -> Vec<u8> {
    let (op, effective) = match direction {
        Direction::Encrypt => (TraceOp::Add, i16::from(shift)),
        Direction::Decrypt => (TraceOp::Sub, -i16::from(shift)),
    };

    let mut output = Vec::with_capacity(text.len());
    for (i, &byte) in text.iter().enumerate() {
        let result = add_mod256(byte, effective);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{NoTrace, StageTrace};

    #[test]
    fn test_known_vector_shift_three() {
        assert_eq!(
            caesar(&[65], 3, Direction::Encrypt, &mut NoTrace),
            vec![68]
        );
        assert_eq!(
            caesar(&[68], 3, Direction::Decrypt, &mut NoTrace),
            vec![65]
        );
    }

    #[test]
    fn test_wraps_at_byte_boundaries() {
        assert_eq!(
            caesar(&[255], 3, Direction::Encrypt, &mut NoTrace),
            vec![2]
        );
        assert_eq!(
            caesar(&[0], 3, Direction::Decrypt, &mut NoTrace),
            vec![253]
        );
    }

    #[test]
    fn test_decrypt_inverts_encrypt_over_full_domain() {
        let original: Vec<u8> = (0..=255).collect();
        for shift in [1u8, 13, 25] {
            let encrypted = caesar(&original, shift, Direction::Encrypt, &mut NoTrace);
            let decrypted = caesar(&encrypted, shift, Direction::Decrypt, &mut NoTrace);
            assert_eq!(decrypted, original);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(caesar(&[], 5, Direction::Encrypt, &mut NoTrace).is_empty());
    }

    #[test]
    fn test_trace_caps_at_twenty_steps() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let mut trace = StageTrace::new("caesar");
        let traced = caesar(data, 3, Direction::Encrypt, &mut trace);

        assert_eq!(trace.steps.len(), 20);
        assert_eq!(trace.elided_steps, data.len() - 20);
        assert_eq!(traced, caesar(data, 3, Direction::Encrypt, &mut NoTrace));
    }
}
