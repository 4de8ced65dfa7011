//! Planta Core - Shared domain types.
//!
//! This crate provides the types shared by all Planta components:
//! - `client` - The store/state-sync layer talking to the backend REST API
//! - `cli` - Command-line storefront built on top of the client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every type
//! serializes to the exact JSON shape the backend collections use, so the
//! client crate can pass them straight through `serde_json`.
//!
//! # Modules
//!
//! - [`types`] - Products, cart lines, user profiles, and order records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
