//! Flight time engine for a virtual airline.
//!
//! Keeps an append-only ledger of career and free fly minutes, drives PIREPs through review,
//! resolves which aircraft a pilot may fly and manages held type ratings. Rank changes are
//! reported on a channel after the transaction that caused them commits.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
