//! RNG seed derivation for deterministic room behavior.
//!
//! The service holds one master seed; every room gets its own 32-byte
//! `ChaCha20Rng` seed derived from it and the room's creation sequence
//! number, so a fixed master seed replays every room exactly.

const ROOM_CONTEXT: &str = "bringten 2024 room rng v1";

/// Derive a room's RNG seed from the master seed and its sequence number.
///
/// Same master + same sequence = same seed; any change to either gives an
/// unrelated seed.
pub fn derive_room_seed(master: &[u8; 32], room_seq: u64) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new_derive_key(ROOM_CONTEXT);
    hasher.update(master);
    hasher.update(&room_seq.to_le_bytes());
    *hasher.finalize().as_bytes()
}

/// Expand a short numeric seed (CLI, tests) into a master seed.
pub fn master_seed_from_u64(seed: u64) -> [u8; 32] {
    *blake3::hash(&seed.to_le_bytes()).as_bytes()
}
