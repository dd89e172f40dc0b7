//! Built-in titles loaded by [`crate::ContentCatalog::with_seed_titles`].

use rating_types::{Classification, ContentId, ContentItem, Result};

const SEED: [(u32, &str, Classification, &str, i32); 8] = [
    (1, "Baby's Day Out", Classification::U, "Comedy", 1994),
    (2, "Notting Hill", Classification::Pg13, "Romance", 1999),
    (3, "The Lion King", Classification::Pg, "Animation", 1994),
    (4, "Inception", Classification::Pg13, "Sci-Fi", 2010),
    (5, "The Matrix", Classification::R, "Action", 1999),
    (6, "Finding Nemo", Classification::U, "Animation", 2003),
    (7, "The Dark Knight", Classification::Pg13, "Action", 2008),
    (8, "Deadpool", Classification::R, "Action", 2016),
];

pub fn seed_items() -> Result<Vec<ContentItem>> {
    SEED.iter()
        .map(|(id, title, classification, genre, year)| {
            ContentItem::new(ContentId(*id), title, *classification, Some(*genre), *year)
        })
        .collect()
}
