//! The user-facing signature transforms: add, remove, resign.
//!
//! Every operation consumes a [`Classification`] produced by
//! [`crate::detector::classify`], never a raw buffer. Classification strips
//! the trailer before any operation runs, so re-signing always works on the
//! bare payload; reordering those two steps would silently sign stale
//! trailer bytes along with the payload.

use crate::detector::Classification;
use crate::hasher;
use crate::trailer;

/// A concrete user intent, selected before the core is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddSign,
    RemoveSign,
    Resign,
    Exit,
}

/// Appends a fresh trailer computed from the stripped payload.
///
/// Defined for every status: on an already-signed file the classification
/// has stripped the old trailer, so this re-signs the bare payload.
pub fn add(classification: &Classification) -> Vec<u8> {
    let payload = &classification.payload;
    let mut out = Vec::with_capacity(payload.len() + trailer::TRAILER_LEN);
    out.extend_from_slice(payload);
    out.extend_from_slice(&trailer::encode(hasher::hash64(payload)));
    out
}

/// Emits the stripped payload; any trailer is dropped. On an unsigned file
/// the output equals the input.
pub fn remove(classification: &Classification) -> Vec<u8> {
    classification.payload.clone()
}

/// Remove followed by add: recomputes the hash over the stripped payload
/// and appends a fresh trailer.
pub fn resign(classification: &Classification) -> Vec<u8> {
    let stripped = crate::detector::classify(&remove(classification));
    add(&stripped)
}

/// Dispatches `action` over a classification. `Exit` produces no output.
pub fn apply(action: Action, classification: &Classification) -> Option<Vec<u8>> {
    match action {
        Action::AddSign => Some(add(classification)),
        Action::RemoveSign => Some(remove(classification)),
        Action::Resign => Some(resign(classification)),
        Action::Exit => None,
    }
}
