//! Describe a YANG module as a nested mapping of its containers and leaves.
//!
//! The YANG grammar itself is handled by an external compiler (`pyang`).
//! This crate runs it, waits for the generated artifact to become loadable,
//! and flattens the resulting schema tree.

pub mod argsets;
pub mod bindings;
pub mod command;
pub mod compiler;
pub mod config;
pub mod constants;
pub mod helpers;
pub mod schema;
