//! The classification scale
//!
//! Levels are declared from least to most restrictive. A level's rank is its
//! position in that declaration and is the only thing comparisons look at.
//! The nominal minimum ages are descriptive data and are deliberately not
//! monotonic in rank (`TWELVE` sits above `PG_13`, `R` above `EIGHTEEN`).

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Static metadata attached to one level of the scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassificationInfo {
    /// Structural name, e.g. `PG_13`
    pub name: &'static str,
    /// Display label, e.g. `Parental Guidance 13`
    pub label: &'static str,
    pub description: &'static str,
    pub minimum_age: u32,
}

/// Metadata table, indexed by rank.
const LEVELS: [ClassificationInfo; 7] = [
    ClassificationInfo {
        name: "U",
        label: "Universal",
        description: "Suitable for all ages",
        minimum_age: 0,
    },
    ClassificationInfo {
        name: "PG",
        label: "Parental Guidance",
        description: "General viewing, some scenes may be unsuitable for young children",
        minimum_age: 8,
    },
    ClassificationInfo {
        name: "PG_13",
        label: "Parental Guidance 13",
        description: "Some material may be inappropriate for children under 13",
        minimum_age: 13,
    },
    ClassificationInfo {
        name: "TWELVE",
        label: "12",
        description: "Suitable only for persons of 12 years and over",
        minimum_age: 12,
    },
    ClassificationInfo {
        name: "FIFTEEN",
        label: "15",
        description: "Suitable only for persons of 15 years and over",
        minimum_age: 15,
    },
    ClassificationInfo {
        name: "EIGHTEEN",
        label: "18",
        description: "Suitable only for persons of 18 years and over",
        minimum_age: 18,
    },
    ClassificationInfo {
        name: "R",
        label: "Restricted",
        description: "Under 17 requires accompanying parent or adult guardian",
        minimum_age: 17,
    },
];

/// Default ceilings by age: the first band whose upper bound the age is
/// below wins. Ages past the last bound get [`Classification::Eighteen`].
const AGE_BANDS: [(u32, Classification); 5] = [
    (8, Classification::U),
    (12, Classification::Pg),
    (13, Classification::Twelve),
    (15, Classification::Pg13),
    (18, Classification::Fifteen),
];

/// One level of the content restrictiveness scale.
///
/// Variant order is rank order; the derived `Ord` therefore compares ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "U")]
    U,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG_13")]
    Pg13,
    #[serde(rename = "TWELVE")]
    Twelve,
    #[serde(rename = "FIFTEEN")]
    Fifteen,
    #[serde(rename = "EIGHTEEN")]
    Eighteen,
    #[serde(rename = "R")]
    R,
}

impl Classification {
    /// Every level, least restrictive first.
    pub const ALL: [Classification; 7] = [
        Self::U,
        Self::Pg,
        Self::Pg13,
        Self::Twelve,
        Self::Fifteen,
        Self::Eighteen,
        Self::R,
    ];

    /// Declaration-order position.
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn info(self) -> &'static ClassificationInfo {
        &LEVELS[self.rank()]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    pub fn minimum_age(self) -> u32 {
        self.info().minimum_age
    }

    /// True iff `self` ranks strictly above `other`.
    pub fn is_more_restrictive_than(self, other: Classification) -> bool {
        self.rank() > other.rank()
    }

    /// True iff content rated `self` may be shown under `ceiling`.
    ///
    /// This is the single rule behind every access decision.
    pub fn is_accessible_under(self, ceiling: Classification) -> bool {
        self.rank() <= ceiling.rank()
    }

    /// Default ceiling for a viewer of the given age.
    pub fn default_for_age(age: u32) -> Classification {
        AGE_BANDS
            .iter()
            .find(|(upper, _)| age < *upper)
            .map(|(_, level)| *level)
            .unwrap_or(Classification::Eighteen)
    }

    /// Resolve free text to a level.
    ///
    /// The structural name is tried first (`"pg 13"` and `"pg_13"` both hit
    /// `PG_13`), then each display label and structural name is compared
    /// case-insensitively against the trimmed input. There is no fallback
    /// level: blank or unmatched input is an error.
    pub fn parse(text: &str) -> Result<Classification> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(RatingError::InvalidArgument(
                "classification text cannot be empty".to_string(),
            ));
        }

        let structural = trimmed.to_uppercase().replace(' ', "_");
        if let Some(level) = Self::ALL.iter().find(|c| c.name() == structural) {
            return Ok(*level);
        }

        Self::ALL
            .iter()
            .find(|c| {
                c.label().eq_ignore_ascii_case(trimmed) || c.name().eq_ignore_ascii_case(&structural)
            })
            .copied()
            .ok_or_else(|| RatingError::UnknownClassification(text.to_string()))
    }
}

impl FromStr for Classification {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
