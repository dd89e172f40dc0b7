//! String-in, string-out compatibility entry point.
//!
//! Older callers pass a title and a free-text classification and expect one
//! of three fixed strings back. The exact wording is part of that contract.

use crate::error::Result;
use crate::gate::AccessGate;
use rating_types::{Classification, Viewer};
use tracing::{debug, warn};

pub const LEGACY_ALLOWED: &str = "You have permission for this movie";
pub const LEGACY_DENIED: &str = "You can't watch this movie.......";

impl AccessGate {
    /// Check `title` for a synthetic viewer whose ceiling is `classification_text`.
    ///
    /// Never fails: errors come back as `"Error: {message}"`. Unknown titles
    /// are denials, because resolution goes through [`AccessGate::decide_by_title`].
    pub fn legacy_check(&self, title: &str, classification_text: &str) -> String {
        debug!(title = %title, classification = %classification_text, "Legacy access check");

        match self.legacy_verdict(title, classification_text) {
            Ok(true) => LEGACY_ALLOWED.to_string(),
            Ok(false) => LEGACY_DENIED.to_string(),
            Err(e) => {
                warn!(error = %e, "Legacy access check failed");
                format!("Error: {}", e)
            }
        }
    }

    fn legacy_verdict(&self, title: &str, classification_text: &str) -> Result<bool> {
        let ceiling = Classification::parse(classification_text)?;
        let viewer = Viewer::new(
            &self.config().legacy_viewer_name,
            self.config().legacy_viewer_age,
            ceiling,
        )?;
        Ok(self.decide_by_title(&viewer, title)?.is_allowed())
    }
}
