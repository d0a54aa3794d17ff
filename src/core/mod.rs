//! Core library components.
//!
//! This module contains the reusable logic for dotenv parsing,
//! secret/variable classification, and driving the GitHub CLI.

pub mod agent;
pub mod classify;
pub mod dotenv;
pub mod gh;
pub mod repo;
pub mod sync;
