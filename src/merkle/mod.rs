//! Membership verification against a pool's allow-list root.
//!
//! A pool is either [`AllowList::Open`] (every id eligible) or
//! [`AllowList::Gated`] by a root fixed at initialisation.  Eligibility
//! is checked per id with [`verify`], which is stateless: it depends only
//! on the root, the id, and the caller-supplied proof.
//!
//! # Hashing
//!
//! | Node | Hash |
//! |------|------|
//! | leaf | `sha256(sha256(be32(token_id)))` |
//! | interior | `sha256(min(a, b) ‖ max(a, b))` |

mod hash;
mod proof;
mod tree;

pub use hash::{hash_pair, leaf_hash, Node};
pub use proof::{verify, AllowList, MerkleProof, MerkleRoot};
pub use tree::AllowListTree;
