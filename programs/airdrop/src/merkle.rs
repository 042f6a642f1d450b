//! Leaf encoding and Merkle proof verification.
//!
//! Leaves commit to `(index, recipient, amount)`. Interior nodes hash their
//! two children in ascending byte order, and a level with an odd node count
//! promotes its last node unchanged. The off-chain builder in `backend` uses
//! these same functions, so both sides always agree on every digest.

use anchor_lang::prelude::*;
use solana_program::keccak;

/// Leaf = keccak256(index_le || recipient || amount_le)
pub fn leaf_hash(index: u64, recipient: &Pubkey, amount: u64) -> [u8; 32] {
    keccak::hashv(&[
        &index.to_le_bytes(),
        recipient.as_ref(),
        &amount.to_le_bytes(),
    ])
    .0
}

/// Combine two sibling digests, smaller one first.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        keccak::hashv(&[a, b]).0
    } else {
        keccak::hashv(&[b, a]).0
    }
}

/// Number of levels above the leaves in a tree of `leaf_count` leaves.
pub fn tree_depth(leaf_count: u64) -> usize {
    let mut depth = 0;
    let mut n = leaf_count;
    while n > 1 {
        n = (n + 1) >> 1;
        depth += 1;
    }
    depth
}

/// Number of siblings on the path from leaf `index` to the root.
///
/// Smaller than `tree_depth` whenever the path passes through a promoted
/// node, since a promoted node has no sibling at that level.
pub fn proof_len(index: u64, leaf_count: u64) -> usize {
    let mut len = 0;
    let mut pos = index;
    let mut n = leaf_count;
    while n > 1 {
        if (pos ^ 1) < n {
            len += 1;
        }
        pos >>= 1;
        n = (n + 1) >> 1;
    }
    len
}

/// Fold `proof` into `leaf` and return the resulting root candidate.
pub fn compute_root(leaf: &[u8; 32], proof: &[[u8; 32]]) -> [u8; 32] {
    proof
        .iter()
        .fold(*leaf, |current, sibling| hash_pair(&current, sibling))
}

/// Check that `leaf` sits at `index` of the tree committed to by `root`.
pub fn verify_proof(
    root: &[u8; 32],
    leaf: &[u8; 32],
    proof: &[[u8; 32]],
    index: u64,
    leaf_count: u64,
) -> bool {
    if index >= leaf_count {
        return false;
    }
    if proof.len() != proof_len(index, leaf_count) {
        return false;
    }
    compute_root(leaf, proof) == *root
}
