use serde::{Deserialize, Serialize};

/// Whether a finding deducts from the score (Issue) or is advisory (Suggestion).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FindingKind {
    Issue,
    Suggestion,
}

/// One detected deficiency or recommended improvement.
#[derive(Clone, Debug, Serialize)]
pub struct Finding {
    pub rule: &'static str,
    pub kind: FindingKind,
    pub message: String,
}

impl Finding {
    pub fn issue(rule: &'static str, message: impl Into<String>) -> Self {
        Self { rule, kind: FindingKind::Issue, message: message.into() }
    }

    pub fn suggestion(rule: &'static str, message: impl Into<String>) -> Self {
        Self { rule, kind: FindingKind::Suggestion, message: message.into() }
    }
}

/// Result of one validation call. Built fresh per call; the ordering of
/// `issues` and `suggestions` is the rule execution order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationReport {
    pub prompt: String,
    pub score: u8,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub word_count: usize,
    pub character_count: usize,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.suggestions.is_empty()
    }
}
