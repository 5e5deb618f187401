//! Domain logic for the Talentscope talent-intelligence platform.
//!
//! This crate has no internal dependencies so the db/api layers and any
//! future CLI tooling can all use it: status/time formatting, tenure
//! parsing, the TTL query cache, enrichment display rules, and search
//! constants.

pub mod cache;
pub mod enrichment;
pub mod error;
pub mod formatting;
pub mod search;
pub mod tenure;
pub mod types;
