//! Library components of the order ledger CLI.

pub mod logging;
pub mod pipeline;
