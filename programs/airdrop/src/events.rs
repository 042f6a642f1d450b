use anchor_lang::prelude::*;

/// Event emitted when an airdrop state is created
#[event]
pub struct AirdropInitialized {
    pub state: Pubkey,
    pub authority: Pubkey,
    pub snapshot_hash: [u8; 32],
    pub merkle_root: [u8; 32],
    pub total_claims: u64,
    pub claim_start_ts: i64,
    pub claim_duration: i64,
}

/// Event emitted when a recipient successfully claims their allocation
#[event]
pub struct Claimed {
    pub state: Pubkey,
    pub claimer: Pubkey,
    pub index: u64,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct ClaimWindowUpdated {
    pub state: Pubkey,
    pub new_start_ts: i64,
    pub new_duration: i64,
    pub timestamp: i64,
}

#[event]
pub struct MerkleRootUpdated {
    pub state: Pubkey,
    pub new_root: [u8; 32],
    pub new_total_claims: u64,
    pub timestamp: i64,
}

/// Event emitted when authority is updated
#[event]
pub struct AuthorityUpdated {
    pub state: Pubkey,
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AirdropClosed {
    pub state: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when leftover funds are withdrawn from the vault
#[event]
pub struct UnclaimedWithdrawn {
    pub state: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct ClaimBucketClosed {
    pub state: Pubkey,
    pub bucket_id: u16,
    pub recipient: Pubkey,
    pub timestamp: i64,
}

/// Event emitted right before the state account is closed
#[event]
pub struct StateClosed {
    pub state: Pubkey,
    pub recipient: Pubkey,
    pub lamports: u64,
    pub timestamp: i64,
}
