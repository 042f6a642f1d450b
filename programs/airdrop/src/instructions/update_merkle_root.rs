use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
pub struct UpdateMerkleRoot<'info> {
    #[account(
        mut,
        seeds = [STATE_SEED, state.snapshot_hash.as_ref()],
        bump = state.bump,
        has_one = authority @ AirdropError::Unauthorized
    )]
    pub state: Account<'info, AirdropState>,

    pub authority: Signer<'info>,
}

pub fn update_merkle_root(
    ctx: Context<UpdateMerkleRoot>,
    new_root: [u8; 32],
    new_total_claims: u64,
) -> Result<()> {
    let state = &mut ctx.accounts.state;

    // Claim buckets are not touched: indices already claimed stay claimed
    state.update_merkle_root(new_root, new_total_claims)?;

    let clock = Clock::get()?;

    emit!(MerkleRootUpdated {
        state: state.key(),
        new_root,
        new_total_claims,
        timestamp: clock.unix_timestamp,
    });

    msg!("Merkle root updated: {} claims, root {:?}", new_total_claims, new_root);

    Ok(())
}
