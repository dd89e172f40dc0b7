//! The access decision engine

use crate::config::GateConfig;
use crate::error::{GateError, Result};
use rating_catalog::{ContentCatalog, TitleResolver};
use rating_types::{ContentItem, Verdict, Viewer};
use std::sync::Arc;
use tracing::{info, warn};

/// Decides whether a viewer may watch a content item.
///
/// The gate holds no mutable state. Each decision depends only on its
/// arguments and on what the resolver returns, so a single gate can be
/// shared freely across threads.
pub struct AccessGate {
    resolver: Arc<dyn TitleResolver>,
    config: GateConfig,
}

impl AccessGate {
    /// Create a gate resolving titles through `resolver`
    pub fn new(resolver: Arc<dyn TitleResolver>) -> Self {
        Self {
            resolver,
            config: GateConfig::default(),
        }
    }

    /// Create a gate backed by a catalog of the built-in titles
    pub fn with_seed_catalog() -> Result<Self> {
        let catalog = ContentCatalog::with_seed_titles()?;
        Ok(Self::new(Arc::new(catalog)))
    }

    pub fn with_config(mut self, config: GateConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Decide on an already resolved item.
    ///
    /// Only ranks are compared. The viewer's age and the item's nominal
    /// minimum age play no part.
    pub fn decide(&self, viewer: &Viewer, item: &ContentItem) -> Verdict {
        let rating = item.classification();
        let ceiling = viewer.ceiling();

        let verdict = if viewer.can_access(rating) {
            Verdict::allowed(format!(
                "Access granted. You can watch '{}' (rated {})",
                item.title(),
                rating.label()
            ))
        } else {
            Verdict::denied(format!(
                "Access denied. '{}' is rated {}, but your maximum allowed rating is {}",
                item.title(),
                rating.label(),
                ceiling.label()
            ))
        };

        if self.config.emit_audit_events {
            self.log_decision(viewer, item, &verdict);
        }
        verdict
    }

    /// Resolve `title` and decide on it.
    ///
    /// An unknown title is a denial, not an error. A blank title is an error.
    pub fn decide_by_title(&self, viewer: &Viewer, title: &str) -> Result<Verdict> {
        let title = title.trim();
        if title.is_empty() {
            warn!(viewer = %viewer.name(), "Access check rejected: blank content title");
            return Err(GateError::InvalidArgument(
                "content title cannot be empty".to_string(),
            ));
        }

        match self.resolver.resolve_by_title(title)? {
            Some(item) => Ok(self.decide(viewer, &item)),
            None => {
                warn!(
                    viewer = %viewer.name(),
                    title = %title,
                    "Content not found for access check"
                );
                Ok(Verdict::denied(format!("content not found: {}", title)))
            }
        }
    }

    /// Whether the viewer may watch `title`. Errors count as "no".
    pub fn is_allowed(&self, viewer: &Viewer, title: &str) -> bool {
        self.decide_by_title(viewer, title)
            .map(|verdict| verdict.is_allowed())
            .unwrap_or(false)
    }

    fn log_decision(&self, viewer: &Viewer, item: &ContentItem, verdict: &Verdict) {
        if verdict.is_allowed() {
            info!(
                verdict_id = %verdict.id().0,
                viewer = %viewer.name(),
                title = %item.title(),
                rating = %item.classification().name(),
                "Access granted"
            );
        } else {
            info!(
                verdict_id = %verdict.id().0,
                viewer = %viewer.name(),
                title = %item.title(),
                rating = %item.classification().name(),
                ceiling = %viewer.ceiling().name(),
                "Access denied"
            );
        }
    }
}
