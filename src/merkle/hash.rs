//! SHA-256 hashing for allow-list leaves and interior nodes.

use sha2::{Digest, Sha256};

use crate::domain::TokenId;

/// A 32-byte node of an allow-list tree.
pub type Node = [u8; 32];

/// Compute SHA-256 of the concatenation of `parts`.
fn sha256_multi(parts: &[&[u8]]) -> Node {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Leaf hash of a token id: `sha256(sha256(be32(token_id)))`.
///
/// Hashing twice keeps a leaf from ever colliding with an interior node
/// built from two 32-byte children.
#[must_use]
pub fn leaf_hash(token_id: TokenId) -> Node {
    let inner = sha256_multi(&[&token_id.to_be_bytes32()]);
    sha256_multi(&[&inner])
}

/// Interior node hash over the sorted pair, so `hash_pair(a, b) == hash_pair(b, a)`.
#[must_use]
pub fn hash_pair(a: &Node, b: &Node) -> Node {
    if a <= b {
        sha256_multi(&[a, b])
    } else {
        sha256_multi(&[b, a])
    }
}
