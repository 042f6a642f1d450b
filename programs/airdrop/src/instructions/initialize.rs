use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
#[instruction(snapshot_hash: [u8; 32])]
pub struct Initialize<'info> {
    /// CHECK: Retirement marker address, only its owner is read
    #[account(
        seeds = [RETIRED_SEED, snapshot_hash.as_ref()],
        bump,
        constraint = !RetiredAirdrop::is_retired(retired.owner) @ AirdropError::AirdropRetired
    )]
    pub retired: UncheckedAccount<'info>,

    // init_if_needed so a repeated call on a live airdrop reaches the handler
    // and fails with AlreadyInitialized instead of a system program error.
    // A closed one is stopped by `retired` above.
    #[account(
        init_if_needed,
        payer = authority,
        space = AirdropState::LEN,
        seeds = [STATE_SEED, snapshot_hash.as_ref()],
        bump
    )]
    pub state: Account<'info, AirdropState>,

    /// CHECK: PDA signer for the vault, holds no data
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, snapshot_hash.as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [VAULT_TOKENS_SEED, snapshot_hash.as_ref()],
        bump,
        token::mint = mint,
        token::authority = vault_authority
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(
    ctx: Context<Initialize>,
    snapshot_hash: [u8; 32],
    claim_start_ts: i64,
    claim_duration: i64,
    merkle_root: [u8; 32],
    total_claims: u64,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let mint = ctx.accounts.mint.key();
    let vault = ctx.accounts.vault.key();
    let state = &mut ctx.accounts.state;

    state.initialize(
        authority,
        snapshot_hash,
        mint,
        vault,
        merkle_root,
        claim_start_ts,
        claim_duration,
        total_claims,
        ctx.bumps.state,
        ctx.bumps.vault_authority,
    )?;

    emit!(AirdropInitialized {
        state: state.key(),
        authority,
        snapshot_hash,
        merkle_root,
        total_claims,
        claim_start_ts,
        claim_duration,
    });

    msg!(
        "Airdrop initialized: {} claims, window [{}, +{}), vault {}",
        total_claims,
        claim_start_ts,
        claim_duration,
        vault
    );

    Ok(())
}
