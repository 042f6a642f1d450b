use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::AirdropError;
use crate::merkle;

/// Main airdrop state account, one per snapshot
#[account]
pub struct AirdropState {
    /// Admin authority who controls the airdrop
    pub authority: Pubkey,          // 32 bytes

    /// Per-airdrop identifier, seeds both the state and the vault
    pub snapshot_hash: [u8; 32],    // 32 bytes

    /// Mint of the distributed token
    pub mint: Pubkey,               // 32 bytes

    /// Token account holding the undistributed allocation
    pub vault: Pubkey,              // 32 bytes

    /// Commitment to the (index, recipient, amount) list
    pub merkle_root: [u8; 32],      // 32 bytes

    /// Claims are legal in [claim_start_ts, claim_start_ts + claim_duration)
    pub claim_start_ts: i64,        // 8 bytes
    pub claim_duration: i64,        // 8 bytes

    /// Number of leaves committed to by merkle_root
    pub total_claims: u64,          // 8 bytes

    /// One-way switch, once set no claim is ever accepted again
    pub claim_closed: bool,         // 1 byte

    /// Bump seed for the state PDA
    pub bump: u8,                   // 1 byte

    /// Bump seed for the vault signer PDA
    pub vault_bump: u8,             // 1 byte
}

/// Where a claim attempt stands relative to the window at a point in time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowPhase {
    NotStarted,
    Open,
    Ended,
}

impl AirdropState {
    /// Calculate account size for rent
    pub const LEN: usize = DISCRIMINATOR_SIZE +
        32 +                         // authority
        32 +                         // snapshot_hash
        32 +                         // mint
        32 +                         // vault
        32 +                         // merkle_root
        8 +                          // claim_start_ts
        8 +                          // claim_duration
        8 +                          // total_claims
        1 +                          // claim_closed
        1 +                          // bump
        1;                           // vault_bump

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        snapshot_hash: [u8; 32],
        mint: Pubkey,
        vault: Pubkey,
        merkle_root: [u8; 32],
        claim_start_ts: i64,
        claim_duration: i64,
        total_claims: u64,
        bump: u8,
        vault_bump: u8,
    ) -> Result<()> {
        require!(
            self.authority == Pubkey::default(),
            AirdropError::AlreadyInitialized
        );
        validate_window(claim_start_ts, claim_duration)?;
        validate_total_claims(total_claims)?;

        self.authority = authority;
        self.snapshot_hash = snapshot_hash;
        self.mint = mint;
        self.vault = vault;
        self.merkle_root = merkle_root;
        self.claim_start_ts = claim_start_ts;
        self.claim_duration = claim_duration;
        self.total_claims = total_claims;
        self.claim_closed = false;
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    /// Exclusive end of the claim window
    pub fn claim_end_ts(&self) -> Result<i64> {
        self.claim_start_ts
            .checked_add(self.claim_duration)
            .ok_or_else(|| error!(AirdropError::ArithmeticOverflow))
    }

    pub fn window_phase(&self, now: i64) -> Result<WindowPhase> {
        if now < self.claim_start_ts {
            Ok(WindowPhase::NotStarted)
        } else if now >= self.claim_end_ts()? {
            Ok(WindowPhase::Ended)
        } else {
            Ok(WindowPhase::Open)
        }
    }

    /// Every precondition of a claim except the ledger bit.
    ///
    /// Order matters: closure wins over the window, and the window is checked
    /// before any proof work is done.
    pub fn validate_claim(
        &self,
        now: i64,
        index: u64,
        claimer: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
    ) -> Result<()> {
        require!(!self.claim_closed, AirdropError::ClaimClosed);
        match self.window_phase(now)? {
            WindowPhase::NotStarted => return err!(AirdropError::ClaimWindowNotStarted),
            WindowPhase::Ended => return err!(AirdropError::ClaimWindowClosed),
            WindowPhase::Open => {}
        }
        require!(index < self.total_claims, AirdropError::IndexOutOfRange);

        let leaf = merkle::leaf_hash(index, claimer, amount);
        require!(
            merkle::verify_proof(&self.merkle_root, &leaf, proof, index, self.total_claims),
            AirdropError::InvalidProof
        );
        Ok(())
    }

    pub fn update_claim_window(&mut self, new_start_ts: i64, new_duration: i64) -> Result<()> {
        require!(!self.claim_closed, AirdropError::ClaimClosed);
        validate_window(new_start_ts, new_duration)?;
        self.claim_start_ts = new_start_ts;
        self.claim_duration = new_duration;
        Ok(())
    }

    /// Replace the commitment. The claim ledger is untouched, so an index
    /// claimed under the old root stays claimed under the new one.
    pub fn update_merkle_root(&mut self, new_root: [u8; 32], new_total_claims: u64) -> Result<()> {
        require!(!self.claim_closed, AirdropError::ClaimClosed);
        validate_total_claims(new_total_claims)?;
        self.merkle_root = new_root;
        self.total_claims = new_total_claims;
        Ok(())
    }

    pub fn update_authority(&mut self, new_authority: Pubkey) -> Pubkey {
        std::mem::replace(&mut self.authority, new_authority)
    }

    /// Permanently stop claims. Closing twice is harmless.
    pub fn close_claims(&mut self) {
        self.claim_closed = true;
    }

    /// Resource reclamation (vault sweep, bucket close) waits for closure.
    pub fn require_closed(&self) -> Result<()> {
        require!(self.claim_closed, AirdropError::ClaimsStillOpen);
        Ok(())
    }
}

fn validate_window(start_ts: i64, duration: i64) -> Result<()> {
    require!(duration > 0, AirdropError::InvalidDuration);
    start_ts
        .checked_add(duration)
        .ok_or_else(|| error!(AirdropError::ArithmeticOverflow))?;
    Ok(())
}

fn validate_total_claims(total_claims: u64) -> Result<()> {
    require!(total_claims <= MAX_CLAIMS, AirdropError::TotalClaimsTooLarge);
    Ok(())
}
