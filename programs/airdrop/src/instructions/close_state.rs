use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
pub struct CloseState<'info> {
    // Anchor moves the lamports to `recipient` and wipes the account after
    // the handler returns
    #[account(
        mut,
        seeds = [STATE_SEED, state.snapshot_hash.as_ref()],
        bump = state.bump,
        has_one = authority @ AirdropError::Unauthorized,
        close = recipient
    )]
    pub state: Account<'info, AirdropState>,

    // Outlives the state. `initialize` refuses this snapshot hash, and so
    // the vault it seeds, from now on
    #[account(
        init,
        payer = authority,
        space = RetiredAirdrop::LEN,
        seeds = [RETIRED_SEED, state.snapshot_hash.as_ref()],
        bump
    )]
    pub retired: Account<'info, RetiredAirdrop>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Receives the state's rent, no data is read
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn close_state(ctx: Context<CloseState>) -> Result<()> {
    let state = &ctx.accounts.state;
    let lamports = state.to_account_info().lamports();

    let clock = Clock::get()?;

    ctx.accounts.retired.set_inner(RetiredAirdrop {
        snapshot_hash: state.snapshot_hash,
        closed_by: ctx.accounts.authority.key(),
        retired_at: clock.unix_timestamp,
        bump: ctx.bumps.retired,
    });

    emit!(StateClosed {
        state: state.key(),
        recipient: ctx.accounts.recipient.key(),
        lamports,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "State closed, {} lamports returned to {}",
        lamports,
        ctx.accounts.recipient.key()
    );

    Ok(())
}
