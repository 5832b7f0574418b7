//! Scenario tests driving the public service API.

pub mod chat;
pub mod people;
pub mod storage;
