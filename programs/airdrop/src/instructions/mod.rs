pub mod initialize;
pub mod claim;
pub mod update_claim_window;
pub mod update_merkle_root;
pub mod update_authority;
pub mod close_airdrop;
pub mod withdraw_unclaimed;
pub mod close_claim_bucket;
pub mod close_state;

pub use initialize::*;
pub use claim::*;
pub use update_claim_window::*;
pub use update_merkle_root::*;
pub use update_authority::*;
pub use close_airdrop::*;
pub use withdraw_unclaimed::*;
pub use close_claim_bucket::*;
pub use close_state::*;
