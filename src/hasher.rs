//! Block hash over padded 8-byte chunks of a payload.
//!
//! This is an integrity marker, not a cryptographic hash. It exists to
//! produce a distinguishing 64-bit value that changes when the payload
//! changes; it makes no attempt to resist deliberate forgery.

/// Width of one hash block in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Per-block index multiplier mixed into each block value.
const INDEX_STRIDE: u64 = 1024;

/// Hashes `payload` as a sequence of little-endian u64 blocks.
///
/// The payload is conceptually zero-padded to a multiple of 8 bytes; each
/// 8-byte block is decoded as a little-endian u64, XORed with its block
/// index times 1024, and the results are summed with wrapping arithmetic.
/// The empty payload hashes to 0.
pub fn hash64(payload: &[u8]) -> u64 {
    let mut hash: u64 = 0;
    for (index, chunk) in payload.chunks(BLOCK_SIZE).enumerate() {
        // Explicit decode of a fixed-endianness integer; a short final
        // chunk is zero-padded, which matches padding the whole payload.
        let mut block = [0u8; BLOCK_SIZE];
        block[..chunk.len()].copy_from_slice(chunk);
        let value = u64::from_le_bytes(block);
        let contribution = value ^ (index as u64).wrapping_mul(INDEX_STRIDE);
        hash = hash.wrapping_add(contribution);
    }
    hash
}
