//! Content hashing and full-hash encoding for graph objects

use data_encoding::BASE32_NOPAD;

/// Digest width in bytes. Short ids only need a deterministic
/// fingerprint, so the blake3 output is truncated to 128 bits.
pub const DIGEST_LEN: usize = 16;

/// Number of base-32 characters a digest encodes to.
pub const ENCODED_LEN: usize = 26;

/// Compute a 128-bit fingerprint over the concatenated parts.
pub fn digest(parts: &[&[u8]]) -> [u8; DIGEST_LEN] {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hasher.finalize().as_bytes()[..DIGEST_LEN]);
    out
}

/// Encode a digest as RFC 4648 base-32, padding stripped, lower-cased.
pub fn encode(digest: &[u8; DIGEST_LEN]) -> String {
    BASE32_NOPAD.encode(digest).to_ascii_lowercase()
}

/// The readable fragment prepended to node hashes: the ASCII letters of
/// the title, lower-cased, in original order. Everything else (digits,
/// spaces, punctuation) is dropped.
pub fn letter_prefix(title: &str) -> String {
    title
        .chars()
        .filter(|ch| ch.is_ascii_alphabetic())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Full hash for a node: readable letter prefix + encoded title digest.
pub fn node_hash(title: &str) -> String {
    let mut full = letter_prefix(title);
    full.push_str(&encode(&digest(&[title.as_bytes()])));
    full
}

/// Full hash for an edge: encoded digest of title, src and dst
/// concatenated in that order, no separators.
pub fn edge_hash(title: &str, src: &str, dst: &str) -> String {
    encode(&digest(&[title.as_bytes(), src.as_bytes(), dst.as_bytes()]))
}
