//! Engine configuration loaded from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `AMITY_OFFICE_CAPACITY` | 6 |
//! | `AMITY_LIVING_SPACE_CAPACITY` | 4 |
//! | `AMITY_RANDOM_SEED` | unset (thread RNG) |

use amity_domain::value_objects::{DEFAULT_LIVING_SPACE_CAPACITY, DEFAULT_OFFICE_CAPACITY};
use amity_domain::RoomCapacities;

pub const OFFICE_CAPACITY_VAR: &str = "AMITY_OFFICE_CAPACITY";
pub const LIVING_SPACE_CAPACITY_VAR: &str = "AMITY_LIVING_SPACE_CAPACITY";
pub const RANDOM_SEED_VAR: &str = "AMITY_RANDOM_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmityConfig {
    pub capacities: RoomCapacities,
    /// Seed for room selection; `None` uses the thread RNG.
    pub random_seed: Option<u64>,
}

impl AmityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to
    /// defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let office = parse_var(&lookup, OFFICE_CAPACITY_VAR).unwrap_or(DEFAULT_OFFICE_CAPACITY);
        let living_space = parse_var(&lookup, LIVING_SPACE_CAPACITY_VAR)
            .unwrap_or(DEFAULT_LIVING_SPACE_CAPACITY);

        let capacities = RoomCapacities::new(office, living_space).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid room capacities, using defaults");
            RoomCapacities::default()
        });

        Self {
            capacities,
            random_seed: parse_var(&lookup, RANDOM_SEED_VAR),
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Option<T> {
    let raw = lookup(key)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = raw, "Ignoring unparseable config value");
            None
        }
    }
}
