use anchor_lang::prelude::*;

use crate::constants::*;

/// Marker created by `close_state`. While it exists the snapshot hash it is
/// keyed on can never back a new airdrop.
#[account]
pub struct RetiredAirdrop {
    pub snapshot_hash: [u8; 32],    // 32 bytes

    /// Authority that closed the airdrop
    pub closed_by: Pubkey,          // 32 bytes

    pub retired_at: i64,            // 8 bytes

    pub bump: u8,                   // 1 byte
}

impl RetiredAirdrop {
    pub const LEN: usize = DISCRIMINATOR_SIZE +
        32 +                         // snapshot_hash
        32 +                         // closed_by
        8 +                          // retired_at
        1;                           // bump

    /// Whether the marker address holds a marker. Only ownership counts:
    /// lamports sent there by anyone else leave it with the system program.
    pub fn is_retired(marker_owner: &Pubkey) -> bool {
        *marker_owner == crate::ID
    }
}
