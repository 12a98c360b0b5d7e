//! Person aggregate - a fellow or staff member registered for allocation

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::RoomCategory;
use crate::error::DomainError;
use crate::value_objects::PersonName;
use amity_domain::PersonId;

/// Policy notice for staff asking for a living space.
pub const STAFF_LIVING_SPACE_NOTICE: &str = "Staff are not entitled to living spaces";

/// Whether a person is a fellow or a staff member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonCategory {
    /// Program participant, eligible for offices and living spaces
    Fellow,
    /// Eligible for offices only
    Staff,
}

impl PersonCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fellow => "fellow",
            Self::Staff => "staff",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Fellow => "Fellow",
            Self::Staff => "Staff",
        }
    }

    /// Staff never occupy living spaces.
    pub fn is_eligible_for(&self, room: RoomCategory) -> bool {
        match room {
            RoomCategory::Office => true,
            RoomCategory::LivingSpace => matches!(self, Self::Fellow),
        }
    }
}

impl fmt::Display for PersonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fellow" => Ok(Self::Fellow),
            "staff" => Ok(Self::Staff),
            _ => Err(DomainError::parse(format!(
                "A person can only be a fellow or staff, got '{}'",
                s
            ))),
        }
    }
}

/// Whether a registration asks for a living space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accommodation {
    Wanted,
    #[default]
    NotWanted,
}

impl Accommodation {
    pub fn is_wanted(&self) -> bool {
        matches!(self, Self::Wanted)
    }
}

impl From<bool> for Accommodation {
    fn from(wanted: bool) -> Self {
        if wanted {
            Self::Wanted
        } else {
            Self::NotWanted
        }
    }
}

impl FromStr for Accommodation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Self::Wanted),
            "no" | "n" | "" => Ok(Self::NotWanted),
            _ => Err(DomainError::parse(format!(
                "Accommodation must be yes or no, got '{}'",
                s
            ))),
        }
    }
}

/// A registered person
///
/// `is_accommodated` flips to true the first time the person is given a
/// living space and stays true when they are moved between living spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    id: PersonId,
    first_name: PersonName,
    last_name: PersonName,
    category: PersonCategory,
    is_accommodated: bool,
    created_at: DateTime<Utc>,
}

impl Person {
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        category: PersonCategory,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: PersonId::new(),
            first_name,
            last_name,
            category,
            is_accommodated: false,
            created_at: now,
        }
    }

    #[inline]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[inline]
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[inline]
    pub fn category(&self) -> PersonCategory {
        self.category
    }

    #[inline]
    pub fn is_accommodated(&self) -> bool {
        self.is_accommodated
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Record that the person now holds a living space.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` for staff.
    pub fn mark_accommodated(&mut self) -> Result<(), DomainError> {
        if !self.category.is_eligible_for(RoomCategory::LivingSpace) {
            return Err(DomainError::constraint(STAFF_LIVING_SPACE_NOTICE));
        }
        self.is_accommodated = true;
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.category.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(category: PersonCategory) -> Person {
        Person::new(
            PersonName::new("Ada").unwrap(),
            PersonName::new("Lovelace").unwrap(),
            category,
            Utc::now(),
        )
    }

    #[test]
    fn new_person_is_not_accommodated() {
        let p = person(PersonCategory::Fellow);
        assert!(!p.is_accommodated());
        assert_eq!(p.full_name(), "Ada Lovelace");
    }

    #[test]
    fn fellow_can_be_accommodated() {
        let mut p = person(PersonCategory::Fellow);
        p.mark_accommodated().unwrap();
        assert!(p.is_accommodated());
    }

    #[test]
    fn staff_cannot_be_accommodated() {
        let mut p = person(PersonCategory::Staff);
        assert_eq!(
            p.mark_accommodated(),
            Err(DomainError::constraint(STAFF_LIVING_SPACE_NOTICE))
        );
        assert!(!p.is_accommodated());
    }

    #[test]
    fn eligibility() {
        assert!(PersonCategory::Staff.is_eligible_for(RoomCategory::Office));
        assert!(!PersonCategory::Staff.is_eligible_for(RoomCategory::LivingSpace));
        assert!(PersonCategory::Fellow.is_eligible_for(RoomCategory::LivingSpace));
    }

    #[test]
    fn accommodation_flag_parsing() {
        assert_eq!("yes".parse::<Accommodation>().unwrap(), Accommodation::Wanted);
        assert_eq!("N".parse::<Accommodation>().unwrap(), Accommodation::NotWanted);
        assert!("maybe".parse::<Accommodation>().is_err());
    }

    #[test]
    fn category_parsing() {
        assert_eq!(" Staff ".parse::<PersonCategory>().unwrap(), PersonCategory::Staff);
        assert!(matches!(
            "intern".parse::<PersonCategory>(),
            Err(DomainError::Parse(_))
        ));
    }
}
