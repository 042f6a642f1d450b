//! Off-chain companion to the `airdrop` program.
//!
//! Builds the allocation Merkle tree with the program's own leaf and pair
//! hashing, exports per-index proofs, derives the program addresses of an
//! airdrop and decodes its accounts.

pub mod accounts;
pub mod error;
pub mod snapshot;
pub mod tree;

pub use error::{BackendError, Result};
pub use tree::{Allocation, AllocationTree};
