//! Merkle snapshot airdrop.
//!
//! An authority commits to a list of `(index, recipient, amount)` allocations
//! with a single Merkle root. Recipients claim with a short proof during a
//! claim window, and a CRT-sharded bitmap ledger makes sure every index pays
//! out at most once. Undistributed tokens sit in a PDA-owned vault.

#![allow(clippy::result_large_err)]
use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod merkle;
pub mod states;

declare_id!("4KDWmJHSTRK7bhxJMwCBUUeBvX7pgrNuhYYiCMxRVY9V");

#[program]
pub mod airdrop {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        snapshot_hash: [u8; 32],
        claim_start_ts: i64,
        claim_duration: i64,
        merkle_root: [u8; 32],
        total_claims: u64,
    ) -> Result<()> {
        instructions::initialize::initialize(
            ctx,
            snapshot_hash,
            claim_start_ts,
            claim_duration,
            merkle_root,
            total_claims,
        )
    }

    pub fn claim(ctx: Context<Claim>, index: u64, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
        instructions::claim::claim(ctx, index, amount, proof)
    }

    pub fn update_claim_window(
        ctx: Context<UpdateClaimWindow>,
        new_start_ts: i64,
        new_duration: i64,
    ) -> Result<()> {
        instructions::update_claim_window::update_claim_window(ctx, new_start_ts, new_duration)
    }

    pub fn update_merkle_root(
        ctx: Context<UpdateMerkleRoot>,
        new_root: [u8; 32],
        new_total_claims: u64,
    ) -> Result<()> {
        instructions::update_merkle_root::update_merkle_root(ctx, new_root, new_total_claims)
    }

    pub fn update_authority(ctx: Context<UpdateAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::update_authority::update_authority(ctx, new_authority)
    }

    pub fn close_airdrop(ctx: Context<CloseAirdrop>) -> Result<()> {
        instructions::close_airdrop::close_airdrop(ctx)
    }

    pub fn withdraw_unclaimed(ctx: Context<WithdrawUnclaimed>, amount: u64) -> Result<()> {
        instructions::withdraw_unclaimed::withdraw_unclaimed(ctx, amount)
    }

    pub fn close_claim_bucket(ctx: Context<CloseClaimBucket>, bucket_id: u16) -> Result<()> {
        instructions::close_claim_bucket::close_claim_bucket(ctx, bucket_id)
    }

    pub fn close_state(ctx: Context<CloseState>) -> Result<()> {
        instructions::close_state::close_state(ctx)
    }
}
