//! In-memory lending catalog: loanable items of several kinds, members with
//! per-member loan ledgers, and a catalog that routes borrow/return requests.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
