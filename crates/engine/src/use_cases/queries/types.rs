//! Query filters and read models.

use std::fmt;
use std::str::FromStr;

use amity_domain::{DomainError, Person, Room};
use serde::Serialize;

/// `all` or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<C> {
    All,
    Only(C),
}

impl<C> FromStr for Filter<C>
where
    C: FromStr<Err = DomainError>,
{
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// A room together with the people in it, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomDetail {
    pub room: Room,
    pub occupants: Vec<Person>,
}

impl fmt::Display for RoomDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.room)?;
        if self.occupants.is_empty() {
            return writeln!(f, "  (empty)");
        }
        for person in &self.occupants {
            writeln!(f, "  - {}", person)?;
        }
        Ok(())
    }
}

/// A person together with the rooms they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonDetail {
    pub person: Person,
    pub office: Option<Room>,
    pub living_space: Option<Room>,
}

impl PersonDetail {
    pub fn is_allocated(&self) -> bool {
        self.office.is_some() || self.living_space.is_some()
    }
}

impl fmt::Display for PersonDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let office = self.office.as_ref().map(|r| r.name().as_str());
        let living = self.living_space.as_ref().map(|r| r.name().as_str());
        write!(
            f,
            "{} | office: {} | living space: {}",
            self.person,
            office.unwrap_or("-"),
            living.unwrap_or("-")
        )
    }
}
