//! Encoding and decoding of the 9-byte signature trailer.
//!
//! Wire format, appended after the payload:
//!
//! ```text
//! [payload bytes: N]  [hash: 8 bytes, little-endian u64]  [flag: 1 byte = 0xFF]
//! ```
//!
//! A trailer is assumed present iff the buffer is at least 9 bytes long and
//! its last byte is the flag. There is no magic number, so a payload that
//! happens to end that way is indistinguishable from a signed file; adding a
//! stronger discriminator would break the wire format, so the ambiguity is
//! kept and documented instead.

/// Total trailer size in bytes: 8-byte hash plus the flag byte.
pub const TRAILER_LEN: usize = 9;

/// Marker byte closing a trailer.
pub const FLAG_BYTE: u8 = 0xFF;

/// A trailer successfully decoded from the tail of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedTrailer {
    /// Hash value stored in the trailer.
    pub hash: u64,
    /// Length of the buffer prefix preceding the trailer.
    pub payload_len: usize,
}

/// Encodes `hash` into trailer bytes.
pub fn encode(hash: u64) -> [u8; TRAILER_LEN] {
    let mut out = [0u8; TRAILER_LEN];
    out[..8].copy_from_slice(&hash.to_le_bytes());
    out[8] = FLAG_BYTE;
    out
}

/// Attempts to decode a trailer from the tail of `buffer`.
///
/// Returns `None` when the buffer is too short or does not end with the
/// flag byte. Absence is a normal outcome, not an error: unsigned files are
/// an expected state.
pub fn try_decode(buffer: &[u8]) -> Option<DecodedTrailer> {
    if buffer.len() < TRAILER_LEN {
        return None;
    }
    if buffer[buffer.len() - 1] != FLAG_BYTE {
        return None;
    }
    let payload_len = buffer.len() - TRAILER_LEN;
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&buffer[payload_len..payload_len + 8]);
    Some(DecodedTrailer {
        hash: u64::from_le_bytes(raw),
        payload_len,
    })
}
