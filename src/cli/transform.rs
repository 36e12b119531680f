use crate::chain::{decrypt, decrypt_traced, encrypt, encrypt_traced};
use crate::classify::{classify, Classification};
use crate::error::{CipherChainError, Result};
use crate::params::CipherParams;
use crate::trace::ChainTrace;
use std::path::Path;

/// Options shared by the encrypt and decrypt commands.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    pub key: String,
    pub shift: u8,
    pub seed: u8,
    pub taps: Vec<u8>,
    /// Skip the classification gate.
    pub force: bool,
    /// Collect a per-stage trace.
    pub trace: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            key: String::new(),
            shift: 3,
            seed: 42,
            taps: vec![0, 2, 3, 4],
            force: false,
            trace: false,
        }
    }
}

impl TransformOptions {
    fn params(&self) -> Result<CipherParams> {
        CipherParams::new(&self.key, self.shift, self.seed, &self.taps)
    }
}

/// Encrypt a file. Refuses input that already classifies as encrypted unless
/// `force` is set; that gate is CLI policy, not a pipeline concern.
/// Returns the trace when one was requested.
pub fn encrypt_file(
    input_path: &Path,
    output_path: &Path,
    options: &TransformOptions,
) -> Result<Option<ChainTrace>> {
    let params = options.params()?;
    let data = std::fs::read(input_path)?;

    if !options.force && classify(&data) == Classification::Encrypted {
        return Err(CipherChainError::AlreadyEncrypted);
    }

    let (output, trace) = if options.trace {
        let (output, trace) = encrypt_traced(&data, &params);
        (output, Some(trace))
    } else {
        (encrypt(&data, &params), None)
    };

    std::fs::write(output_path, &output)?;
    Ok(trace)
}

/// Decrypt a file. Refuses input that classifies as plaintext unless `force`
/// is set. Returns the recovered bytes and the trace when one was requested.
pub fn decrypt_file(
    input_path: &Path,
    output_path: &Path,
    options: &TransformOptions,
) -> Result<(Vec<u8>, Option<ChainTrace>)> {
    let params = options.params()?;
    let data = std::fs::read(input_path)?;

    if !options.force && classify(&data) == Classification::Plaintext {
        return Err(CipherChainError::NotEncrypted);
    }

    let (output, trace) = if options.trace {
        let (output, trace) = decrypt_traced(&data, &params);
        (output, Some(trace))
    } else {
        (decrypt(&data, &params), None)
    };

    std::fs::write(output_path, &output)?;
    Ok((output, trace))
}

/// Interpret recovered bytes as UTF-8 text for display.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| CipherChainError::Encoding(format!("recovered bytes are not UTF-8: {}", e)))
}
