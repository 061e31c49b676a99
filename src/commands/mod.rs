//! Command implementations for the cleanup CLI

pub mod cleanup;
