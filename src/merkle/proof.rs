//! Allow-list roots, membership proofs, and the verifier.

use core::fmt;

use super::hash::{hash_pair, leaf_hash, Node};
use crate::domain::TokenId;

/// Root of an allow-list tree, published once at pool initialisation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MerkleRoot([u8; 32]);

impl MerkleRoot {
    /// Wraps raw root bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw root bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` for the all-zero root, which means "no gating".
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for MerkleRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for MerkleRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MerkleRoot({self})")
    }
}

/// Sibling path from a leaf up to the root.
///
/// Interior nodes hash sorted pairs, so no left/right flags are carried.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MerkleProof(Vec<Node>);

impl MerkleProof {
    /// Creates a proof from its sibling path, leaf-side first.
    #[must_use]
    pub const fn new(siblings: Vec<Node>) -> Self {
        Self(siblings)
    }

    /// A proof with no siblings.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Sibling path, leaf-side first.
    #[must_use]
    pub fn siblings(&self) -> &[Node] {
        &self.0
    }

    /// Number of siblings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the proof has no siblings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Folds the path over the leaf of `token_id` and returns the implied root.
    #[must_use]
    pub fn compute_root(&self, token_id: TokenId) -> MerkleRoot {
        let node = self
            .0
            .iter()
            .fold(leaf_hash(token_id), |acc, sibling| hash_pair(&acc, sibling));
        MerkleRoot(node)
    }
}

/// Eligibility policy of a pool.
///
/// # Examples
///
/// ```
/// use nft_amm::merkle::{AllowList, MerkleRoot};
///
/// assert!(AllowList::from_root(None).is_open());
/// assert!(AllowList::from_root(Some(MerkleRoot::from_bytes([0u8; 32]))).is_open());
/// assert!(!AllowList::from_root(Some(MerkleRoot::from_bytes([7u8; 32]))).is_open());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AllowList {
    /// Every token id in the collection is eligible.
    #[default]
    Open,
    /// Only ids proven against this root are eligible.
    Gated(MerkleRoot),
}

impl AllowList {
    /// Builds the policy from an optional root; a zero root is open.
    #[must_use]
    pub fn from_root(root: Option<MerkleRoot>) -> Self {
        match root {
            Some(r) if !r.is_zero() => Self::Gated(r),
            _ => Self::Open,
        }
    }

    /// Returns `true` for an ungated pool.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// The gating root, if any.
    #[must_use]
    pub const fn root(&self) -> Option<MerkleRoot> {
        match self {
            Self::Open => None,
            Self::Gated(r) => Some(*r),
        }
    }
}

/// Checks that `token_id` is eligible under `allow_list`.
///
/// Open pools accept every id.  Gated pools accept an id iff folding
/// `proof` over its leaf reproduces the root.  Pure and deterministic.
///
/// # Examples
///
/// ```
/// use nft_amm::domain::TokenId;
/// use nft_amm::merkle::{verify, AllowList, AllowListTree, MerkleProof};
///
/// assert!(verify(&AllowList::Open, TokenId::new(999), &MerkleProof::empty()));
///
/// let tree = AllowListTree::new(&[TokenId::new(1), TokenId::new(2)]).expect("non-empty");
/// let gated = AllowList::Gated(tree.root());
/// let proof = tree.proof(TokenId::new(2)).expect("member");
/// assert!(verify(&gated, TokenId::new(2), &proof));
/// assert!(!verify(&gated, TokenId::new(3), &proof));
/// ```
#[must_use]
pub fn verify(allow_list: &AllowList, token_id: TokenId, proof: &MerkleProof) -> bool {
    match allow_list {
        AllowList::Open => true,
        AllowList::Gated(root) => proof.compute_root(token_id) == *root,
    }
}
