use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    #[msg("Unauthorized - signer is not the authority")]
    Unauthorized,

    #[msg("Invalid Merkle proof provided")]
    InvalidProof,

    #[msg("This index has already been claimed")]
    AlreadyClaimed,

    #[msg("Claim window has not started yet")]
    ClaimWindowNotStarted,

    #[msg("Claim window has ended")]
    ClaimWindowClosed,

    #[msg("Airdrop is closed")]
    ClaimClosed,

    #[msg("Claim index is out of range")]
    IndexOutOfRange,

    #[msg("Airdrop state is already initialized")]
    AlreadyInitialized,

    #[msg("Airdrop state is not initialized")]
    NotInitialized,

    #[msg("Claim duration must be greater than 0")]
    InvalidDuration,

    #[msg("Total claims exceeds the ledger capacity")]
    TotalClaimsTooLarge,

    #[msg("Index does not belong to this ledger bucket")]
    BucketMismatch,

    #[msg("Airdrop must be closed before reclaiming resources")]
    ClaimsStillOpen,

    #[msg("Arithmetic overflow occurred")]
    ArithmeticOverflow,

    #[msg("Mint mismatch - provided mint does not match the airdrop mint")]
    MintMismatch,

    #[msg("Insufficient vault balance for withdrawal")]
    InsufficientBalance,

    #[msg("Vault mismatch - provided vault does not match the airdrop vault")]
    VaultMismatch,

    #[msg("Airdrop was closed for good, its snapshot hash cannot be reused")]
    AirdropRetired,
}
