//! Shared persistence plumbing: ownership predicates, transaction helpers and
//! the in-memory store used by tests and local runs.

pub mod memory;
pub mod ownership;
pub(crate) mod tx;
