//! Universe supply: built-in sample rows plus the merge step that joins and
//! enriches them into the records the scan engine consumes.

pub mod merge;
pub mod sample_data;

pub use merge::{merge_crypto_assets, merge_equity_assets, universe};
