use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
pub struct CloseAirdrop<'info> {
    #[account(
        mut,
        seeds = [STATE_SEED, state.snapshot_hash.as_ref()],
        bump = state.bump,
        has_one = authority @ AirdropError::Unauthorized
    )]
    pub state: Account<'info, AirdropState>,

    pub authority: Signer<'info>,
}

pub fn close_airdrop(ctx: Context<CloseAirdrop>) -> Result<()> {
    let state = &mut ctx.accounts.state;

    state.close_claims();

    let clock = Clock::get()?;

    emit!(AirdropClosed {
        state: state.key(),
        authority: state.authority,
        timestamp: clock.unix_timestamp,
    });

    msg!("Airdrop closed at {}", clock.unix_timestamp);

    Ok(())
}
