use crate::error::{CatalogError, Result};
use rating_types::ContentItem;

/// Title resolution, the one catalog capability the access gate relies on.
///
/// `Ok(None)` means the title is unknown, which is an ordinary outcome.
/// `Err` is reserved for malformed queries such as a blank title.
pub trait TitleResolver: Send + Sync {
    /// Exact, case-insensitive match on the normalized title.
    fn resolve_by_title(&self, title: &str) -> Result<Option<ContentItem>>;
}

/// Trim and lower-case a title for keying. Blank titles are rejected.
pub fn normalize_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::InvalidInput(
            "content title cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  The Matrix ").unwrap(), "the matrix");
        assert_eq!(normalize_title("BABY'S DAY OUT").unwrap(), "baby's day out");
        assert!(matches!(
            normalize_title(" \t"),
            Err(CatalogError::InvalidInput(_))
        ));
    }
}
