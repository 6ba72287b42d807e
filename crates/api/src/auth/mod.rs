//! Credential handling for user records.

pub mod password;
