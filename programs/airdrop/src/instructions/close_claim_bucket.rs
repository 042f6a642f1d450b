use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
#[instruction(bucket_id: u16)]
pub struct CloseClaimBucket<'info> {
    #[account(
        seeds = [STATE_SEED, state.snapshot_hash.as_ref()],
        bump = state.bump,
        has_one = authority @ AirdropError::Unauthorized
    )]
    pub state: Account<'info, AirdropState>,

    #[account(
        mut,
        seeds = [BUCKET_SEED, state.key().as_ref(), bucket_id.to_le_bytes().as_ref()],
        bump = bucket.bump,
        constraint = bucket.state == state.key() @ AirdropError::BucketMismatch,
        close = recipient
    )]
    pub bucket: Account<'info, ClaimBucket>,

    pub authority: Signer<'info>,

    /// CHECK: Receives the bucket's rent, no data is read
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,
}

pub fn close_claim_bucket(ctx: Context<CloseClaimBucket>, bucket_id: u16) -> Result<()> {
    let state = &ctx.accounts.state;

    // With claims still possible, dropping a bucket would forget its claims
    state.require_closed()?;

    let clock = Clock::get()?;

    emit!(ClaimBucketClosed {
        state: state.key(),
        bucket_id,
        recipient: ctx.accounts.recipient.key(),
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Claim bucket {} closed ({} claims recorded)",
        bucket_id,
        ctx.accounts.bucket.claimed_count
    );

    Ok(())
}
