//! Access verdicts

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct VerdictId(pub String);

impl VerdictId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

/// Outcome of a single access decision.
///
/// Only [`Verdict::allowed`] and [`Verdict::denied`] create one; fields
/// cannot be changed afterwards.
#[derive(Clone, Debug, Serialize)]
pub struct Verdict {
    verdict_id: VerdictId,
    allowed: bool,
    reason: String,
    decided_at: DateTime<Utc>,
}

impl Verdict {
    pub fn allowed(reason: impl Into<String>) -> Self {
        Self::new(true, reason.into())
    }

    pub fn denied(reason: impl Into<String>) -> Self {
        Self::new(false, reason.into())
    }

    fn new(allowed: bool, reason: String) -> Self {
        Self {
            verdict_id: VerdictId::generate(),
            allowed,
            reason,
            decided_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &VerdictId {
        &self.verdict_id
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn is_denied(&self) -> bool {
        !self.allowed
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn decided_at(&self) -> DateTime<Utc> {
        self.decided_at
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Verdict{{allowed={}, reason='{}'}}", self.allowed, self.reason)
    }
}
