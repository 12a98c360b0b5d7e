//! Amity Engine library.
//!
//! Room registries plus the allocation and reallocation engines built on them.
//!
//! ## Structure
//!
//! - `entities/` - Registry wrappers around the repository ports
//! - `use_cases/` - Room creation, registration, allocation, reallocation, queries
//! - `infrastructure/` - Ports, in-memory adapters, clock/random, config
//! - `app` - Application composition

pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// Shared helpers for unit tests.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end scenarios through a composed `App`.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
