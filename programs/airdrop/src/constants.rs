/// Program constants for the snapshot airdrop

/// Largest allocation list a single airdrop may commit to
pub const MAX_CLAIMS: u64 = 1_000_000;

/// PDA seed for the airdrop state account: ["state", snapshot_hash]
pub const STATE_SEED: &[u8] = b"state";

/// PDA seed for the vault signer: ["vault", snapshot_hash]
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault";

/// PDA seed for the vault token account: ["vault_tokens", snapshot_hash]
pub const VAULT_TOKENS_SEED: &[u8] = b"vault_tokens";

/// PDA seed for the marker left by close_state: ["retired", snapshot_hash]
pub const RETIRED_SEED: &[u8] = b"retired";

/// PDA seed for claim ledger buckets: ["bucket", state, bucket_id (u16 LE)]
pub const BUCKET_SEED: &[u8] = b"bucket";

/// Number of ledger buckets. Prime, so coprime with BIT_MODULUS.
pub const BUCKET_MODULUS: u64 = 977;

/// Claim bits per bucket (2^10).
pub const BIT_MODULUS: u64 = 1024;

/// Bytes of bitmap held by one bucket
pub const BUCKET_BYTES: usize = (BIT_MODULUS / 8) as usize;

/// Inverse of BUCKET_MODULUS modulo BIT_MODULUS, used to reconstruct an
/// index from its residue pair.
pub const BUCKET_MODULUS_INV: u64 = 305;

/// Number of distinct indices addressable by the residue pair
pub const LEDGER_CAPACITY: u64 = BUCKET_MODULUS * BIT_MODULUS;

/// Account discriminator size (Anchor adds this automatically)
pub const DISCRIMINATOR_SIZE: usize = 8;
