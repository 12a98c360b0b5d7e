//! Registration result types.

use amity_domain::{Accommodation, Person};
use serde::Serialize;

use crate::use_cases::allocation::{Allocation, AllocationError};

/// What happened to one category of a registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AllocationOutcome {
    Allocated(Allocation),
    /// Attempted but no room could be assigned; the message says why.
    Unavailable { reason: String },
    /// Living space not asked for.
    NotRequested,
    /// Living space asked for by staff; informational, nothing was attempted.
    NotEligible { notice: String },
}

impl AllocationOutcome {
    pub fn allocation(&self) -> Option<&Allocation> {
        match self {
            Self::Allocated(allocation) => Some(allocation),
            _ => None,
        }
    }

    pub fn is_allocated(&self) -> bool {
        self.allocation().is_some()
    }

    pub(crate) fn unavailable(err: &AllocationError) -> Self {
        Self::Unavailable {
            reason: err.to_string(),
        }
    }
}

/// Input for registering a person.
#[derive(Debug, Clone)]
pub struct RegisterPersonInput {
    pub first_name: String,
    pub last_name: String,
    /// `fellow` or `staff`
    pub category: String,
    pub accommodation: Accommodation,
}

/// Result of a registration: the stored person plus one outcome per category.
///
/// `person` reflects the state after both allocation attempts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub person: Person,
    pub office: AllocationOutcome,
    pub living_space: AllocationOutcome,
}
