//! Allocation snapshots in, claim manifests out.
//!
//! The snapshot file is the issuer's ordered allocation list. The manifest is
//! what gets published to claimants: root, count and every index's proof.

use std::fs;
use std::path::Path;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::keccak;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BackendError, Result};
use crate::tree::{Allocation, AllocationTree};

/// Serde adapter writing a `Pubkey` as its base58 string.
pub mod pubkey_string {
    use std::str::FromStr;

    use anchor_lang::prelude::Pubkey;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&key.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(|_| de::Error::custom(format!("invalid pubkey: {}", s)))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub allocations: Vec<Allocation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimEntry {
    pub index: u64,
    #[serde(with = "pubkey_string")]
    pub recipient: Pubkey,
    pub amount: u64,
    /// Hex encoded sibling digests, leaf level first
    pub proof: Vec<String>,
}

impl ClaimEntry {
    pub fn proof_digests(&self) -> Result<Vec<[u8; 32]>> {
        self.proof.iter().map(|p| parse_digest(p)).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimManifest {
    pub snapshot_hash: String,
    pub merkle_root: String,
    pub total_claims: u64,
    pub claims: Vec<ClaimEntry>,
}

impl ClaimManifest {
    pub fn from_tree(tree: &AllocationTree) -> Result<Self> {
        let claims = tree
            .allocations()
            .iter()
            .enumerate()
            .map(|(index, a)| {
                let index = index as u64;
                Ok(ClaimEntry {
                    index,
                    recipient: a.recipient,
                    amount: a.amount,
                    proof: tree.proof(index)?.iter().map(hex::encode).collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            snapshot_hash: hex::encode(snapshot_hash(tree)),
            merkle_root: hex::encode(tree.root()),
            total_claims: tree.len(),
            claims,
        })
    }

    pub fn claim_for(&self, recipient: &Pubkey) -> Option<&ClaimEntry> {
        self.claims.iter().find(|c| c.recipient == *recipient)
    }

    pub fn merkle_root_bytes(&self) -> Result<[u8; 32]> {
        parse_digest(&self.merkle_root)
    }

    pub fn snapshot_hash_bytes(&self) -> Result<[u8; 32]> {
        parse_digest(&self.snapshot_hash)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_vec_pretty(self)?)?;
        info!(path = %path.display(), claims = self.total_claims, "wrote claim manifest");
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self> {
        Ok(serde_json::from_slice(&fs::read(path)?)?)
    }
}

/// Identifier of an airdrop, seeding its state and vault addresses.
///
/// keccak256(root || leaf_count_le), fixed when the airdrop is created.
pub fn snapshot_hash(tree: &AllocationTree) -> [u8; 32] {
    keccak::hashv(&[&tree.root(), &tree.len().to_le_bytes()]).0
}

pub fn load_allocations(path: &Path) -> Result<Vec<Allocation>> {
    let file: SnapshotFile = serde_json::from_slice(&fs::read(path)?)?;
    info!(path = %path.display(), entries = file.allocations.len(), "loaded allocation snapshot");
    Ok(file.allocations)
}

pub fn parse_digest(s: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(s).map_err(|_| BackendError::InvalidDigest(s.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| BackendError::InvalidDigest(s.to_string()))
}
