//! End-to-end scenarios.
//!
//! Each test builds its own `App` over fresh in-memory registries, so tests
//! are isolated and can run in parallel.
//!
//! ```bash
//! cargo test -p amity-engine --lib e2e_tests
//! ```

mod e2e_helpers;
mod invariant_tests;
mod scenario_tests;
