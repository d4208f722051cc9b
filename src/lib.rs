/*!
 * Tailsig - lightweight tail signatures for binary files
 *
 * Marks a file by appending a 9-byte trailer: a 64-bit block hash of the
 * payload in little-endian order, closed by a 0xFF flag byte. Inspecting a
 * file classifies it as signed, unsigned, or changed-data, and the three
 * transforms (sign, unsign, resign) rewrite the trailer accordingly.
 *
 * This is an integrity marker, not a security primitive: the hash is weak
 * by design and the trailer carries no magic number, so a payload that
 * happens to end in valid trailer bytes is indistinguishable from a signed
 * file.
 */

pub mod config;
pub mod detector;
pub mod error;
pub mod file_io;
pub mod hasher;
pub mod ops;
pub mod trailer;
pub mod utils;

pub use detector::{classify, Classification, SignatureStatus};
pub use error::{Result, TailsigError};
pub use ops::Action;
