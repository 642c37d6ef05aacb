//! In-memory allow-list tree for producing roots and proofs.
//!
//! The engine itself never builds trees; it only verifies proofs against
//! a fixed root.  This builder exists for tooling and tests that need
//! matching root/proof pairs.

use super::hash::{hash_pair, leaf_hash, Node};
use super::proof::{MerkleProof, MerkleRoot};
use crate::domain::TokenId;
use crate::error::{PoolError, Result};

/// A fully materialised allow-list tree.
///
/// Leaves are sorted and deduplicated, so the root depends only on the
/// set of ids.  An odd node at the end of a level is promoted unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowListTree {
    /// `levels[0]` holds the sorted leaves; the last level holds the root.
    levels: Vec<Vec<Node>>,
}

impl AllowListTree {
    /// Builds the tree over `token_ids`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if `token_ids` is empty.
    pub fn new(token_ids: &[TokenId]) -> Result<Self> {
        if token_ids.is_empty() {
            return Err(PoolError::InvalidConfiguration(
                "allow list must contain at least one token id",
            ));
        }

        let mut leaves: Vec<Node> = token_ids.iter().map(|id| leaf_hash(*id)).collect();
        leaves.sort_unstable();
        leaves.dedup();

        let mut levels = vec![leaves];
        while let Some(current) = levels.last() {
            if current.len() <= 1 {
                break;
            }
            let next: Vec<Node> = current
                .chunks(2)
                .filter_map(|pair| pair.iter().copied().reduce(|a, b| hash_pair(&a, &b)))
                .collect();
            levels.push(next);
        }

        Ok(Self { levels })
    }

    /// The tree root.
    #[must_use]
    pub fn root(&self) -> MerkleRoot {
        let node = self
            .levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or([0u8; 32]);
        MerkleRoot::from_bytes(node)
    }

    /// Number of distinct leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    /// Proof for `token_id`, or `None` if it is not a member.
    #[must_use]
    pub fn proof(&self, token_id: TokenId) -> Option<MerkleProof> {
        let leaves = self.levels.first()?;
        let mut index = leaves.binary_search(&leaf_hash(token_id)).ok()?;
        let (_, below_root) = self.levels.split_last()?;

        let mut siblings = Vec::with_capacity(below_root.len());
        for level in below_root {
            if let Some(sibling) = level.get(index ^ 1) {
                siblings.push(*sibling);
            }
            index /= 2;
        }
        Some(MerkleProof::new(siblings))
    }
}
