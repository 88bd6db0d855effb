use uuid::Uuid;

// Fixed hasher keys; the caller seed fills the fourth slot, so every seed
// keys a different hash family.
const KEY0: u64 = 1;
const KEY1: u64 = 2;
const KEY2: u64 = 3;

/// Keyed hasher state, stable across runs of one build for a given seed.
pub fn tag_hasher(seed: i64) -> ahash::RandomState {
    ahash::RandomState::with_seeds(KEY0, KEY1, KEY2, seed as u64)
}

/// 8-byte digest of an identifier's canonical RFC 4122 bytes.
///
/// The digest is the 64-bit hash value in little-endian byte order.
pub fn id_digest(id: Uuid, seed: i64) -> [u8; 8] {
    tag_hasher(seed).hash_one(id.as_bytes()).to_le_bytes()
}

/// 8-byte digest of an arbitrary display name.
pub fn name_digest(name: &str, seed: i64) -> [u8; 8] {
    tag_hasher(seed).hash_one(name).to_le_bytes()
}
