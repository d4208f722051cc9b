//! Signature detection: strip a trailer if present and classify the buffer.

use crate::hasher;
use crate::trailer;

/// Signature state of a file, recomputed on every inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureStatus {
    /// A trailer is present and its hash matches the payload.
    Signed,
    /// No trailer is present.
    Unsigned,
    /// A well-formed trailer is present but its hash does not match,
    /// meaning the payload was edited after signing (or the trailer bytes
    /// are coincidental payload content).
    ChangedData,
}

impl std::fmt::Display for SignatureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureStatus::Signed => write!(f, "signed"),
            SignatureStatus::Unsigned => write!(f, "unsigned"),
            SignatureStatus::ChangedData => write!(f, "changed data"),
        }
    }
}

/// Result of classifying a buffer: the status plus the payload with any
/// trailer stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: SignatureStatus,
    pub payload: Vec<u8>,
}

/// Classifies `buffer` and extracts its payload.
///
/// When no trailer decodes, the whole buffer is the payload and the status
/// is `Unsigned`. When one does, the payload is the prefix before it and
/// the status depends on whether the recomputed hash matches the stored
/// one. Classification is idempotent: re-classifying the extracted payload
/// yields `Unsigned` unless that payload itself coincidentally ends in
/// valid-looking trailer bytes.
pub fn classify(buffer: &[u8]) -> Classification {
    match trailer::try_decode(buffer) {
        None => Classification {
            status: SignatureStatus::Unsigned,
            payload: buffer.to_vec(),
        },
        Some(decoded) => {
            let payload = buffer[..decoded.payload_len].to_vec();
            let status = if hasher::hash64(&payload) == decoded.hash {
                SignatureStatus::Signed
            } else {
                SignatureStatus::ChangedData
            };
            Classification { status, payload }
        }
    }
}
