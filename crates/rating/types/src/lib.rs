//! Rating Types - the vocabulary of the content rating gate
//!
//! Everything the access decision engine reasons about lives here:
//! the ordered [`Classification`] scale, the [`Viewer`] asking for access,
//! the [`ContentItem`] being asked for, and the [`Verdict`] that answers.
//! All of these are immutable once constructed.

#![deny(unsafe_code)]

pub mod classification;
pub mod content;
pub mod error;
pub mod verdict;
pub mod viewer;

pub use classification::{Classification, ClassificationInfo};
pub use content::{ContentId, ContentItem};
pub use error::{RatingError, Result};
pub use verdict::{Verdict, VerdictId};
pub use viewer::{Viewer, ADULT_AGE, MAX_AGE};
