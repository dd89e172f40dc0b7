//! Viewers and their permitted ceiling

use crate::classification::Classification;
use crate::error::{RatingError, Result};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Oldest accepted viewer age.
pub const MAX_AGE: u32 = 150;

/// Age from which a viewer counts as an adult.
pub const ADULT_AGE: u32 = 18;

/// A person asking to watch something.
///
/// Identity is the trimmed name alone: two viewers with the same name are
/// equal (and hash equally) even when their ages or ceilings differ.
#[derive(Clone, Debug, Serialize)]
pub struct Viewer {
    name: String,
    age: u32,
    ceiling: Classification,
    adult: bool,
}

impl Viewer {
    /// Create a viewer with an explicit ceiling.
    pub fn new(name: &str, age: u32, ceiling: Classification) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RatingError::InvalidArgument(
                "viewer name cannot be empty".to_string(),
            ));
        }
        if age > MAX_AGE {
            return Err(RatingError::InvalidArgument(format!(
                "viewer age must be between 0 and {}, got {}",
                MAX_AGE, age
            )));
        }

        Ok(Self {
            name: name.to_string(),
            age,
            ceiling,
            adult: age >= ADULT_AGE,
        })
    }

    /// Create a viewer whose ceiling is derived from their age.
    pub fn with_default_ceiling(name: &str, age: u32) -> Result<Self> {
        Self::new(name, age, Classification::default_for_age(age))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Most restrictive classification this viewer may access.
    pub fn ceiling(&self) -> Classification {
        self.ceiling
    }

    pub fn is_adult(&self) -> bool {
        self.adult
    }

    /// Whether content rated `classification` falls under this viewer's ceiling.
    pub fn can_access(&self, classification: Classification) -> bool {
        classification.is_accessible_under(self.ceiling)
    }
}

impl PartialEq for Viewer {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Viewer {}

impl Hash for Viewer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (age {}, ceiling {}, adult: {})",
            self.name,
            self.age,
            self.ceiling.name(),
            self.adult
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_valid_viewer() {
        let viewer = Viewer::new("Alice", 15, Classification::Pg13).unwrap();
        assert_eq!(viewer.name(), "Alice");
        assert_eq!(viewer.age(), 15);
        assert_eq!(viewer.ceiling(), Classification::Pg13);
        assert!(!viewer.is_adult());
    }

    #[test]
    fn test_adult_flag() {
        assert!(!Viewer::new("Child", 10, Classification::Pg).unwrap().is_adult());
        assert!(!Viewer::new("Teen", 17, Classification::Pg13).unwrap().is_adult());
        assert!(Viewer::new("Adult", 18, Classification::Eighteen).unwrap().is_adult());
        assert!(Viewer::new("Elder", 150, Classification::R).unwrap().is_adult());
    }

    #[test]
    fn test_invalid_name() {
        assert!(matches!(
            Viewer::new("", 25, Classification::Eighteen),
            Err(RatingError::InvalidArgument(_))
        ));
        assert!(matches!(
            Viewer::new("   ", 25, Classification::Eighteen),
            Err(RatingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_age() {
        assert!(Viewer::new("Alice", 151, Classification::U).is_err());
        assert!(Viewer::new("Alice", 0, Classification::U).is_ok());
        assert!(Viewer::new("Alice", MAX_AGE, Classification::U).is_ok());
    }

    #[test]
    fn test_name_is_trimmed() {
        let viewer = Viewer::new("  Alice  ", 25, Classification::Eighteen).unwrap();
        assert_eq!(viewer.name(), "Alice");
    }

    #[test]
    fn test_can_access() {
        let child = Viewer::new("Child", 10, Classification::Pg).unwrap();
        assert!(child.can_access(Classification::U));
        assert!(child.can_access(Classification::Pg));
        assert!(!child.can_access(Classification::Pg13));
        assert!(!child.can_access(Classification::R));

        let adult = Viewer::new("Adult", 25, Classification::R).unwrap();
        assert!(Classification::ALL.iter().all(|c| adult.can_access(*c)));
    }

    #[test]
    fn test_default_ceiling() {
        let ceiling = |age| Viewer::with_default_ceiling("v", age).unwrap().ceiling();
        assert_eq!(ceiling(5), Classification::U);
        assert_eq!(ceiling(10), Classification::Pg);
        assert_eq!(ceiling(12), Classification::Twelve);
        assert_eq!(ceiling(13), Classification::Pg13);
        assert_eq!(ceiling(15), Classification::Fifteen);
        assert_eq!(ceiling(25), Classification::Eighteen);
        assert!(Viewer::with_default_ceiling("v", 200).is_err());
    }

    #[test]
    fn test_identity_is_name_only() {
        let a = Viewer::new("Alice", 25, Classification::Eighteen).unwrap();
        let b = Viewer::new("Alice", 30, Classification::Pg).unwrap();
        let c = Viewer::new("Bob", 25, Classification::Eighteen).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Viewer> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        let viewer = Viewer::new("Alice", 25, Classification::Eighteen).unwrap();
        let shown = viewer.to_string();
        assert!(shown.contains("Alice"));
        assert!(shown.contains("25"));
        assert!(shown.contains("EIGHTEEN"));
        assert!(shown.contains("true"));
    }
}
