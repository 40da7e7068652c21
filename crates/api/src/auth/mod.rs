//! Credential handling for user profiles.

pub mod password;
