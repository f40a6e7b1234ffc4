//! Test utilities for integration testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - A builder for constructing an `AppState` backed by the in-memory store

mod app_state_builder;
mod factories;

pub use app_state_builder::*;
pub use factories::*;
