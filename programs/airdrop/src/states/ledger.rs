use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::AirdropError;

/// Where an index lives in the claim ledger.
///
/// The pair `(index mod BUCKET_MODULUS, index mod BIT_MODULUS)` identifies
/// every index below `LEDGER_CAPACITY` uniquely (the moduli are coprime), so
/// each index owns exactly one bit in exactly one bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerSlot {
    pub bucket_id: u16,
    pub bit: u16,
}

/// Bucket holding the claim bit of `index`. Also the PDA seed of that bucket.
pub fn bucket_id_for(index: u64) -> u16 {
    (index % BUCKET_MODULUS) as u16
}

impl LedgerSlot {
    pub fn for_index(index: u64) -> Result<Self> {
        require!(index < LEDGER_CAPACITY, AirdropError::IndexOutOfRange);
        Ok(Self {
            bucket_id: bucket_id_for(index),
            bit: (index % BIT_MODULUS) as u16,
        })
    }

    /// Recover the index from its residue pair (Chinese Remainder Theorem).
    pub fn index(&self) -> u64 {
        let bucket = self.bucket_id as u64;
        let bit = self.bit as u64;
        // index = bucket + BUCKET_MODULUS * k, with k chosen so that
        // index == bit (mod BIT_MODULUS)
        let diff = (bit + BIT_MODULUS - bucket % BIT_MODULUS) % BIT_MODULUS;
        let k = diff * BUCKET_MODULUS_INV % BIT_MODULUS;
        bucket + BUCKET_MODULUS * k
    }
}

/// One shard of the claimed-set ledger. Holds the claim bits for every index
/// congruent to `bucket_id` modulo `BUCKET_MODULUS`.
#[account]
pub struct ClaimBucket {
    /// Airdrop state this bucket belongs to
    pub state: Pubkey,              // 32 bytes

    pub bucket_id: u16,             // 2 bytes

    /// Number of bits set so far
    pub claimed_count: u32,         // 4 bytes

    /// Claim bits, indexed by `index mod BIT_MODULUS`
    pub bits: [u8; BUCKET_BYTES],   // 128 bytes

    /// Bump seed for PDA verification
    pub bump: u8,                   // 1 byte
}

impl ClaimBucket {
    pub const LEN: usize = DISCRIMINATOR_SIZE +
        32 +                         // state
        2 +                          // bucket_id
        4 +                          // claimed_count
        BUCKET_BYTES +               // bits
        1;                           // bump

    /// Set up a freshly created bucket. A no-op on an existing one.
    pub fn init_if_new(&mut self, state: Pubkey, bucket_id: u16, bump: u8) {
        if self.state == Pubkey::default() {
            self.state = state;
            self.bucket_id = bucket_id;
            self.bump = bump;
        }
    }

    fn locate(&self, index: u64) -> Result<(usize, u8)> {
        let slot = LedgerSlot::for_index(index)?;
        require!(slot.bucket_id == self.bucket_id, AirdropError::BucketMismatch);
        Ok(((slot.bit / 8) as usize, 1u8 << (slot.bit % 8)))
    }

    /// Check if an index has been claimed
    pub fn is_claimed(&self, index: u64) -> Result<bool> {
        let (byte, mask) = self.locate(index)?;
        Ok(self.bits[byte] & mask != 0)
    }

    /// Mark an index as claimed. Fails if it already was.
    pub fn mark_claimed(&mut self, index: u64) -> Result<()> {
        let (byte, mask) = self.locate(index)?;
        require!(self.bits[byte] & mask == 0, AirdropError::AlreadyClaimed);
        self.bits[byte] |= mask;
        self.claimed_count = self
            .claimed_count
            .checked_add(1)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Every claimed index recorded in this bucket, ascending by bit.
    pub fn claimed_indices(&self) -> Vec<u64> {
        (0..BIT_MODULUS as u16)
            .filter(|bit| self.bits[(bit / 8) as usize] & (1 << (bit % 8)) != 0)
            .map(|bit| LedgerSlot { bucket_id: self.bucket_id, bit }.index())
            .collect()
    }
}
