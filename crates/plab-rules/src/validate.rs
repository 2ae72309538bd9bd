use plab_core::{FindingKind, PromptStats, ValidationReport};

use crate::rule::{
    AudienceRule, ConstraintsRule, ContextRule, InstructionVerbRule, LengthRule, OutputFormatRule,
    PronounDensityRule, Rule, VagueWordsRule,
};
use crate::score::score;

/// The fixed evaluation order. Report ordering depends on it, so new rules
/// go at the end unless the contract changes.
static RULES: &[&dyn Rule] = &[
    &LengthRule,
    &VagueWordsRule,
    &PronounDensityRule,
    &InstructionVerbRule,
    &OutputFormatRule,
    &ConstraintsRule,
    &AudienceRule,
    &ContextRule,
];

/// Validate a prompt and build a fresh report.
///
/// Pure function: accumulators live on the stack of this call, so repeated
/// calls can never leak findings into each other. Any string is valid
/// input; an empty prompt simply scores as too short.
pub fn validate(prompt: &str) -> ValidationReport {
    let stats = PromptStats::of(prompt);

    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    for rule in RULES {
        for finding in rule.eval(&stats) {
            tracing::trace!(rule = rule.id(), kind = ?finding.kind, "finding");
            match finding.kind {
                FindingKind::Issue => issues.push(finding.message),
                FindingKind::Suggestion => suggestions.push(finding.message),
            }
        }
    }

    let score = score(issues.len(), suggestions.len());
    tracing::debug!(
        score,
        issues = issues.len(),
        suggestions = suggestions.len(),
        words = stats.word_count,
        "prompt validated"
    );

    ValidationReport {
        prompt: prompt.to_string(),
        score,
        issues,
        suggestions,
        word_count: stats.word_count,
        character_count: stats.char_count,
    }
}
