use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
pub struct UpdateClaimWindow<'info> {
    #[account(
        mut,
        seeds = [STATE_SEED, state.snapshot_hash.as_ref()],
        bump = state.bump,
        has_one = authority @ AirdropError::Unauthorized
    )]
    pub state: Account<'info, AirdropState>,

    pub authority: Signer<'info>,
}

pub fn update_claim_window(
    ctx: Context<UpdateClaimWindow>,
    new_start_ts: i64,
    new_duration: i64,
) -> Result<()> {
    let state = &mut ctx.accounts.state;

    // Replaces the old window outright; refused once the airdrop is closed
    state.update_claim_window(new_start_ts, new_duration)?;

    let clock = Clock::get()?;

    emit!(ClaimWindowUpdated {
        state: state.key(),
        new_start_ts,
        new_duration,
        timestamp: clock.unix_timestamp,
    });

    msg!("Claim window updated: [{}, +{})", new_start_ts, new_duration);

    Ok(())
}
