use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
pub struct UpdateAuthority<'info> {
    // Signer must be the current authority
    #[account(
        mut,
        seeds = [STATE_SEED, state.snapshot_hash.as_ref()],
        bump = state.bump,
        has_one = authority @ AirdropError::Unauthorized
    )]
    pub state: Account<'info, AirdropState>,

    pub authority: Signer<'info>,
}

pub fn update_authority(
    ctx: Context<UpdateAuthority>,
    new_authority: Pubkey,
) -> Result<()> {
    let state = &mut ctx.accounts.state;

    let old_authority = state.update_authority(new_authority);

    let clock = Clock::get()?;

    emit!(AuthorityUpdated {
        state: state.key(),
        old_authority,
        new_authority,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Authority updated: {} -> {}",
        old_authority,
        new_authority
    );

    Ok(())
}
