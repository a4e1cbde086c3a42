//! Todo API Core - Shared types library.
//!
//! This crate provides the types used across all Todo API components:
//! - `api` - The goal CRUD server
//! - `health` - Standalone health-check server
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe goal IDs, goal records, and pagination

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
