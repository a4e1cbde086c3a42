//! Core types for the Todo API.
//!
//! This module provides type-safe wrappers for the goal resource.

pub mod goal;
pub mod id;
pub mod page;

pub use goal::{Goal, GoalError, GoalInput};
pub use id::*;
pub use page::Page;
