//! Static lookup data
//!
//! Command-name tables consumed by the readable-text rules.

pub mod symbols;
