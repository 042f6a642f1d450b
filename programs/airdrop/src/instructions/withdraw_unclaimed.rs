use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
pub struct WithdrawUnclaimed<'info> {
    // State must exist and signer must be authority
    #[account(
        seeds = [STATE_SEED, state.snapshot_hash.as_ref()],
        bump = state.bump,
        has_one = authority @ AirdropError::Unauthorized,
        has_one = vault @ AirdropError::VaultMismatch,
        has_one = mint @ AirdropError::MintMismatch
    )]
    pub state: Account<'info, AirdropState>,

    /// CHECK: PDA signer for the vault, holds no data
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, state.snapshot_hash.as_ref()],
        bump = state.vault_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint
    )]
    pub recipient: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn withdraw_unclaimed(
    ctx: Context<WithdrawUnclaimed>,
    amount: u64,
) -> Result<()> {
    let state = &ctx.accounts.state;

    // Leftovers only move once no further claim can land
    state.require_closed()?;

    require!(
        amount <= ctx.accounts.vault.amount,
        AirdropError::InsufficientBalance
    );

    let seeds = &[
        VAULT_AUTHORITY_SEED,
        state.snapshot_hash.as_ref(),
        &[state.vault_bump],
    ];
    let signer = &[&seeds[..]];

    let cpi_accounts = TransferChecked {
        from: ctx.accounts.vault.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.recipient.to_account_info(),
        authority: ctx.accounts.vault_authority.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);
    token::transfer_checked(cpi_ctx, amount, ctx.accounts.mint.decimals)?;

    let clock = Clock::get()?;

    emit!(UnclaimedWithdrawn {
        state: state.key(),
        recipient: ctx.accounts.recipient.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Withdrawn {} unclaimed tokens to {}",
        amount,
        ctx.accounts.recipient.key()
    );

    Ok(())
}
