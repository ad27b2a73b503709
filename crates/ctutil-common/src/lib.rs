//! # ctutil-common
//!
//! Shared error definitions and constants used across the ctutil workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and carries the error taxonomy and fixed tokens that the
//! parsing primitives in `ctutil-core` build upon.

pub mod constants;
pub mod error;
