use airdrop::constants::MAX_CLAIMS;
use airdrop::merkle::{hash_pair, leaf_hash};
use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BackendError, Result};

/// One entry of the allocation list. Its position in the list is its index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    #[serde(with = "crate::snapshot::pubkey_string")]
    pub recipient: Pubkey,
    pub amount: u64,
}

/// Merkle tree over an ordered allocation list.
///
/// `levels[0]` holds the leaves and the last level holds the root. A level
/// with an odd node count carries its last node up unchanged.
#[derive(Clone, Debug)]
pub struct AllocationTree {
    allocations: Vec<Allocation>,
    levels: Vec<Vec<[u8; 32]>>,
}

impl AllocationTree {
    pub fn build(allocations: Vec<Allocation>) -> Result<Self> {
        if allocations.is_empty() {
            return Err(BackendError::EmptyAllocation);
        }
        if allocations.len() as u64 > MAX_CLAIMS {
            return Err(BackendError::TooManyClaims(allocations.len()));
        }

        let leaves: Vec<[u8; 32]> = allocations
            .iter()
            .enumerate()
            .map(|(index, a)| leaf_hash(index as u64, &a.recipient, a.amount))
            .collect();

        let mut levels = vec![leaves];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next: Vec<[u8; 32]> = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    [single] => *single,
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            levels.push(next);
        }

        debug!(
            leaves = allocations.len(),
            depth = levels.len() - 1,
            "built allocation tree"
        );

        Ok(Self { allocations, levels })
    }

    pub fn root(&self) -> [u8; 32] {
        // build() never produces an empty top level
        self.levels[self.levels.len() - 1][0]
    }

    pub fn len(&self) -> u64 {
        self.allocations.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    pub fn allocation(&self, index: u64) -> Result<&Allocation> {
        self.allocations
            .get(index as usize)
            .ok_or(BackendError::IndexOutOfRange(index))
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn leaf(&self, index: u64) -> Result<[u8; 32]> {
        self.levels[0]
            .get(index as usize)
            .copied()
            .ok_or(BackendError::IndexOutOfRange(index))
    }

    /// Sibling digests from the leaf up. Levels where the path node was
    /// promoted contribute nothing.
    pub fn proof(&self, index: u64) -> Result<Vec<[u8; 32]>> {
        if index >= self.len() {
            return Err(BackendError::IndexOutOfRange(index));
        }
        let mut pos = index as usize;
        let mut proof = Vec::new();
        for level in &self.levels[..self.levels.len() - 1] {
            if let Some(sibling) = level.get(pos ^ 1) {
                proof.push(*sibling);
            }
            pos >>= 1;
        }
        Ok(proof)
    }
}
