use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

/// The first claim landing in a ledger bucket pays that bucket's rent. After
/// the airdrop is closed `close_claim_bucket` refunds it to a recipient of the
/// authority's choosing, not to that claimer.
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct Claim<'info> {
    // State is read-only here, so claims landing in different buckets do not
    // contend with each other
    #[account(
        seeds = [STATE_SEED, state.snapshot_hash.as_ref()],
        bump = state.bump,
        has_one = vault @ AirdropError::VaultMismatch,
        has_one = mint @ AirdropError::MintMismatch
    )]
    pub state: Account<'info, AirdropState>,

    // Ledger shard owning this index, created by the first claim that needs it
    #[account(
        init_if_needed,
        payer = claimer,
        space = ClaimBucket::LEN,
        seeds = [BUCKET_SEED, state.key().as_ref(), bucket_id_for(index).to_le_bytes().as_ref()],
        bump
    )]
    pub bucket: Account<'info, ClaimBucket>,

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
        token::mint = mint,
        token::authority = claimer
    )]
    pub claimer_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub claimer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn claim(
    ctx: Context<Claim>,
    index: u64,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let state = &ctx.accounts.state;
    let claimer = ctx.accounts.claimer.key();
    let now = Clock::get()?.unix_timestamp;

    // Closed flag, window, index range and proof
    state.validate_claim(now, index, &claimer, amount, &proof)?;

    // Check-and-set the claim bit; a second claim for the index stops here
    let bucket = &mut ctx.accounts.bucket;
    bucket.init_if_new(state.key(), bucket_id_for(index), ctx.bumps.bucket);
    require_keys_eq!(bucket.state, state.key(), AirdropError::BucketMismatch);
    bucket.mark_claimed(index)?;

    let seeds = &[
        VAULT_AUTHORITY_SEED,
        state.snapshot_hash.as_ref(),
        &[state.vault_bump],
    ];
    let signer = &[&seeds[..]];

    let cpi_accounts = TransferChecked {
        from: ctx.accounts.vault.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.claimer_token_account.to_account_info(),
        authority: ctx.accounts.vault_authority.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);
    token::transfer_checked(cpi_ctx, amount, ctx.accounts.mint.decimals)?;

    emit!(Claimed {
        state: state.key(),
        claimer,
        index,
        amount,
        timestamp: now,
    });

    msg!(
        "Claim successful - Wallet: {}, Amount: {}, Index: {}",
        claimer,
        amount,
        index
    );

    Ok(())
}
