//! Property-based tests for value objects and stores.

pub mod storage;
