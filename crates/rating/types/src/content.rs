//! Content items

use crate::classification::Classification;
use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentId(pub u32);

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rated piece of content.
///
/// Identity is the `(id, title)` pair. Classification, genre and release
/// year do not take part in equality or hashing.
#[derive(Clone, Debug, Serialize)]
pub struct ContentItem {
    id: ContentId,
    title: String,
    classification: Classification,
    genre: String,
    release_year: i32,
}

impl ContentItem {
    pub fn new(
        id: ContentId,
        title: &str,
        classification: Classification,
        genre: Option<&str>,
        release_year: i32,
    ) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(RatingError::InvalidArgument(
                "content title cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id,
            title: title.to_string(),
            classification,
            genre: genre.map(str::trim).unwrap_or_default().to_string(),
            release_year,
        })
    }

    pub fn id(&self) -> ContentId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Genre, empty when none was given.
    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }
}

impl PartialEq for ContentItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.title == other.title
    }
}

impl Eq for ContentItem {}

impl Hash for ContentItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.title.hash(state);
    }
}

impl fmt::Display for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} '{}' [{}] {} ({})",
            self.id, self.title, self.classification.name(), self.genre, self.release_year
        )
    }
}
