//! Rating Catalog - where rated content lives
//!
//! The catalog is populated once at startup and only read afterwards.
//! The access gate needs exactly one thing from it, expressed by the
//! [`TitleResolver`] trait; the remaining queries serve reporting.

#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod resolver;
pub mod seed;

pub use catalog::ContentCatalog;
pub use error::{CatalogError, Result};
pub use resolver::{normalize_title, TitleResolver};
pub use seed::seed_items;
