//! Program addresses of an airdrop and decoding of its accounts.
//!
//! Every address is a PDA of the `airdrop` program derived from the snapshot
//! hash, so a client needs nothing but the manifest to find them.

use airdrop::constants::*;
use airdrop::errors::AirdropError;
use airdrop::states::{bucket_id_for, AirdropState, ClaimBucket};
use anchor_lang::prelude::*;

use crate::error::Result;

pub fn state_address(snapshot_hash: &[u8; 32]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED, snapshot_hash.as_ref()], &airdrop::ID)
}

pub fn vault_authority_address(snapshot_hash: &[u8; 32]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED, snapshot_hash.as_ref()], &airdrop::ID)
}

pub fn vault_address(snapshot_hash: &[u8; 32]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_TOKENS_SEED, snapshot_hash.as_ref()], &airdrop::ID)
}

/// Marker that `close_state` leaves behind. Once it exists the snapshot hash
/// can never be initialized again.
pub fn retired_address(snapshot_hash: &[u8; 32]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[RETIRED_SEED, snapshot_hash.as_ref()], &airdrop::ID)
}

/// Ledger bucket holding the claim bit of `index`
pub fn bucket_address(state: &Pubkey, index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            BUCKET_SEED,
            state.as_ref(),
            bucket_id_for(index).to_le_bytes().as_ref(),
        ],
        &airdrop::ID,
    )
}

/// Decode fetched state account data. `None` means the account does not
/// exist, either never created or already closed.
pub fn decode_state(data: Option<&[u8]>) -> Result<AirdropState> {
    let mut data = data.ok_or_else(|| error!(AirdropError::NotInitialized))?;
    Ok(AirdropState::try_deserialize(&mut data)?)
}

/// Whether `index` is claimed, given the fetched data of its bucket. A bucket
/// that does not exist yet has no claims.
pub fn is_claimed(bucket_data: Option<&[u8]>, index: u64) -> Result<bool> {
    match bucket_data {
        None => Ok(false),
        Some(mut data) => {
            let bucket = ClaimBucket::try_deserialize(&mut data)?;
            Ok(bucket.is_claimed(index)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BackendError;

    fn encode<T: AccountSerialize>(account: &T) -> Vec<u8> {
        let mut data = Vec::new();
        account.try_serialize(&mut data).unwrap();
        data
    }

    fn sample_state(snapshot_hash: [u8; 32]) -> AirdropState {
        AirdropState {
            authority: Pubkey::new_unique(),
            snapshot_hash,
            mint: Pubkey::new_unique(),
            vault: vault_address(&snapshot_hash).0,
            merkle_root: [3; 32],
            claim_start_ts: 100,
            claim_duration: 50,
            total_claims: 10,
            claim_closed: false,
            bump: state_address(&snapshot_hash).1,
            vault_bump: vault_authority_address(&snapshot_hash).1,
        }
    }

    #[test]
    fn test_addresses_are_distinct_per_snapshot() {
        let a = [1u8; 32];
        let b = [2u8; 32];
        assert_ne!(state_address(&a).0, state_address(&b).0);
        assert_ne!(state_address(&a).0, vault_authority_address(&a).0);
        assert_ne!(vault_authority_address(&a).0, vault_address(&a).0);
        assert_ne!(retired_address(&a).0, state_address(&a).0);
        assert_ne!(retired_address(&a).0, retired_address(&b).0);
        assert_eq!(state_address(&a), state_address(&a));
    }

    #[test]
    fn test_indices_in_the_same_residue_class_share_a_bucket() {
        let state = state_address(&[9u8; 32]).0;
        assert_eq!(bucket_address(&state, 5), bucket_address(&state, 5 + BUCKET_MODULUS));
        assert_ne!(bucket_address(&state, 5), bucket_address(&state, 6));
    }

    #[test]
    fn test_decode_state() {
        let state = sample_state([4u8; 32]);
        let decoded = decode_state(Some(encode(&state).as_slice())).unwrap();
        assert_eq!(decoded.authority, state.authority);
        assert_eq!(decoded.total_claims, 10);

        match decode_state(None) {
            Err(BackendError::Program(e)) => {
                assert_eq!(e, anchor_lang::error::Error::from(AirdropError::NotInitialized))
            }
            other => panic!("unexpected: {:?}", other.map(|s| s.total_claims)),
        }

        let garbage = vec![0u8; 16];
        assert!(decode_state(Some(garbage.as_slice())).is_err());
    }

    #[test]
    fn test_is_claimed_reads_bucket_bits() {
        let index = 1_500u64;
        let mut bucket = ClaimBucket {
            state: Pubkey::new_unique(),
            bucket_id: bucket_id_for(index),
            claimed_count: 0,
            bits: [0; BUCKET_BYTES],
            bump: 250,
        };
        assert!(!is_claimed(None, index).unwrap());
        assert!(!is_claimed(Some(encode(&bucket).as_slice()), index).unwrap());

        bucket.mark_claimed(index).unwrap();
        let data = encode(&bucket);
        assert!(is_claimed(Some(data.as_slice()), index).unwrap());
        assert!(!is_claimed(Some(data.as_slice()), index + BUCKET_MODULUS).unwrap());
        assert!(is_claimed(Some(data.as_slice()), index + 1).is_err());
    }
}
