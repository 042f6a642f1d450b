pub mod airdrop;
pub mod ledger;
pub mod retired;

pub use airdrop::*;
pub use ledger::*;
pub use retired::*;
