use std::sync::LazyLock;

use plab_core::{Finding, PromptStats};
use regex::Regex;

use crate::keywords::*;

/// One heuristic check over the prompt text. Rules are pure: same prompt,
/// same findings. They never see each other's output.
pub trait Rule: Send + Sync {
    fn id(&self) -> &'static str;
    fn eval(&self, prompt: &PromptStats<'_>) -> Vec<Finding>;
}

/// Word count below 5 or above 500 is flagged; 5..=500 is fine.
pub struct LengthRule;

impl Rule for LengthRule {
    fn id(&self) -> &'static str {
        "length"
    }

    fn eval(&self, prompt: &PromptStats<'_>) -> Vec<Finding> {
        if prompt.word_count < 5 {
            return vec![
                Finding::issue(self.id(), "Prompt is too short - may lack necessary detail"),
                Finding::suggestion(self.id(), "Add more context and specific instructions"),
            ];
        }
        if prompt.word_count > 500 {
            return vec![
                Finding::issue(self.id(), "Prompt is very long - may be overwhelming"),
                Finding::suggestion(self.id(), "Consider breaking into smaller, focused prompts"),
            ];
        }
        vec![]
    }
}

/// Flags vague filler words. Deliberately substring containment, so "thing"
/// also matches inside "something"; the matched words are reported in table
/// order with the table's casing.
pub struct VagueWordsRule;

impl Rule for VagueWordsRule {
    fn id(&self) -> &'static str {
        "vague_words"
    }

    fn eval(&self, prompt: &PromptStats<'_>) -> Vec<Finding> {
        let found: Vec<&str> = VAGUE_WORDS.iter().copied().filter(|w| prompt.contains(w)).collect();
        if found.is_empty() {
            return vec![];
        }
        vec![
            Finding::issue(self.id(), format!("Contains vague words: {}", found.join(", "))),
            Finding::suggestion(self.id(), "Replace vague words with specific terms"),
        ]
    }
}

static PRONOUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(it|this|that|they|them)\b").expect("invalid pronoun regex"));

/// More than 3 whole-word pronoun occurrences reads as unclear referents.
/// Word-boundary matching here, unlike the vague-word check.
pub struct PronounDensityRule;

impl Rule for PronounDensityRule {
    fn id(&self) -> &'static str {
        "pronoun_density"
    }

    fn eval(&self, prompt: &PromptStats<'_>) -> Vec<Finding> {
        let count = PRONOUNS.find_iter(&prompt.lower).count();
        if count <= 3 {
            return vec![];
        }
        vec![
            Finding::issue(self.id(), "Many unclear pronouns - may cause confusion"),
            Finding::suggestion(self.id(), "Replace pronouns with specific nouns"),
        ]
    }
}

/// A prompt without any instruction verb gives the model nothing to do.
pub struct InstructionVerbRule;

impl Rule for InstructionVerbRule {
    fn id(&self) -> &'static str {
        "instruction_verb"
    }

    fn eval(&self, prompt: &PromptStats<'_>) -> Vec<Finding> {
        if INSTRUCTION_VERBS.iter().any(|w| prompt.contains(w)) {
            return vec![];
        }
        vec![
            Finding::issue(self.id(), "No clear instruction verb found"),
            Finding::suggestion(
                self.id(),
                "Start with a clear action verb (write, create, analyze, etc.)",
            ),
        ]
    }
}

/// Longer prompts (> 20 words) without any output-format hint get a
/// suggestion only, never an issue.
pub struct OutputFormatRule;

impl Rule for OutputFormatRule {
    fn id(&self) -> &'static str {
        "output_format"
    }

    fn eval(&self, prompt: &PromptStats<'_>) -> Vec<Finding> {
        let has_format = FORMAT_INDICATORS.iter().any(|w| prompt.contains(w));
        if has_format || prompt.word_count <= 20 {
            return vec![];
        }
        vec![Finding::suggestion(self.id(), "Consider specifying the desired output format")]
    }
}

/// No constraint vocabulary at all, regardless of length, earns a suggestion.
pub struct ConstraintsRule;

impl Rule for ConstraintsRule {
    fn id(&self) -> &'static str {
        "constraints"
    }

    fn eval(&self, prompt: &PromptStats<'_>) -> Vec<Finding> {
        if CONSTRAINT_WORDS.iter().any(|w| prompt.contains(w)) {
            return vec![];
        }
        vec![Finding::suggestion(self.id(), "Add specific constraints (length, format, examples)")]
    }
}

/// Prompts above 15 words without an audience hint get a suggestion.
pub struct AudienceRule;

impl Rule for AudienceRule {
    fn id(&self) -> &'static str {
        "audience"
    }

    fn eval(&self, prompt: &PromptStats<'_>) -> Vec<Finding> {
        let has_audience = AUDIENCE_WORDS.iter().any(|w| prompt.contains(w));
        if has_audience || prompt.word_count <= 15 {
            return vec![];
        }
        vec![Finding::suggestion(self.id(), "Consider specifying the target audience")]
    }
}

/// Prompts above 10 words without any context marker get a suggestion.
/// "for" and "about" are substrings too, so this fires rarely in practice.
pub struct ContextRule;

impl Rule for ContextRule {
    fn id(&self) -> &'static str {
        "context"
    }

    fn eval(&self, prompt: &PromptStats<'_>) -> Vec<Finding> {
        let has_context = CONTEXT_INDICATORS.iter().any(|w| prompt.contains(w));
        if has_context || prompt.word_count <= 10 {
            return vec![];
        }
        vec![Finding::suggestion(self.id(), "Provide relevant context or background information")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plab_core::FindingKind;

    fn eval(rule: &dyn Rule, text: &str) -> Vec<Finding> {
        rule.eval(&PromptStats::of(text))
    }

    #[test]
    fn length_rule_in_range_is_silent() {
        assert!(eval(&LengthRule, "one two three four five").is_empty());
    }

    #[test]
    fn length_rule_too_short() {
        let findings = eval(&LengthRule, "too short");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].kind, FindingKind::Issue);
        assert!(findings[0].message.contains("too short"));
        assert_eq!(findings[1].kind, FindingKind::Suggestion);
    }

    #[test]
    fn length_rule_too_long() {
        let long = "word ".repeat(501);
        let findings = eval(&LengthRule, &long);
        assert_eq!(findings.len(), 2);
        assert!(findings[0].message.contains("very long"));
    }

    #[test]
    fn length_rule_boundaries() {
        assert!(eval(&LengthRule, &"w ".repeat(5)).is_empty());
        assert!(eval(&LengthRule, &"w ".repeat(500)).is_empty());
        assert!(!eval(&LengthRule, &"w ".repeat(4)).is_empty());
        assert!(!eval(&LengthRule, &"w ".repeat(501)).is_empty());
    }

    #[test]
    fn vague_words_substring_match() {
        // "something" matches both "thing" and "something", in table order
        let findings = eval(&VagueWordsRule, "Tell me something nice");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].message, "Contains vague words: thing, something");
    }

    #[test]
    fn vague_words_case_insensitive() {
        let findings = eval(&VagueWordsRule, "STUFF happens");
        assert_eq!(findings[0].message, "Contains vague words: stuff");
    }

    #[test]
    fn vague_words_clean_prompt() {
        assert!(eval(&VagueWordsRule, "Write a sonnet about autumn").is_empty());
    }

    #[test]
    fn pronoun_rule_fires_above_three() {
        let findings = eval(&PronounDensityRule, "It does this and that and they agree");
        assert_eq!(findings.len(), 2);
        assert!(findings[0].message.contains("pronouns"));
    }

    #[test]
    fn pronoun_rule_three_is_fine() {
        assert!(eval(&PronounDensityRule, "It does this and that only").is_empty());
    }

    #[test]
    fn pronoun_rule_is_word_boundary() {
        // "item", "items", "thematic" must not count as "it" / "them"
        assert!(eval(&PronounDensityRule, "item items thematic itself theme blitz").is_empty());
    }

    #[test]
    fn instruction_verb_missing() {
        let findings = eval(&InstructionVerbRule, "a poem please");
        assert_eq!(findings.len(), 2);
        assert!(findings[0].message.contains("instruction verb"));
    }

    #[test]
    fn instruction_verb_present() {
        assert!(eval(&InstructionVerbRule, "Summarize the meeting").is_empty());
    }

    #[test]
    fn output_format_only_for_long_prompts() {
        let short = "no hints here at all";
        assert!(eval(&OutputFormatRule, short).is_empty());

        let long = "please tell me much more and even more and yet more and still more again ok then now go right away please";
        assert!(PromptStats::of(long).word_count > 20);
        let findings = eval(&OutputFormatRule, long);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::Suggestion);
    }

    #[test]
    fn output_format_indicator_silences() {
        let long = "please reply in json and tell me much more and even more and yet more and still more again ok then now";
        assert!(eval(&OutputFormatRule, long).is_empty());
    }

    #[test]
    fn constraints_fire_regardless_of_length() {
        let findings = eval(&ConstraintsRule, "hi");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::Suggestion);
        assert!(eval(&ConstraintsRule, "give one example").is_empty());
    }

    #[test]
    fn audience_rule_threshold() {
        let long_no_audience =
            "please compose the most elaborate and winding narrative imaginable spanning several themes entirely unrelated to each other";
        assert!(PromptStats::of(long_no_audience).word_count > 15);
        assert_eq!(eval(&AudienceRule, long_no_audience).len(), 1);

        assert!(eval(&AudienceRule, "short and plain").is_empty());
        let with_audience =
            "please compose the most elaborate and winding narrative imaginable spanning several themes for an expert reader base";
        assert!(eval(&AudienceRule, with_audience).is_empty());
    }

    #[test]
    fn context_rule_threshold() {
        // "for"/"about" count as context markers, avoid them in the negative case
        let long_no_context =
            "please compose the most elaborate winding narrative imaginable spanning several themes";
        assert!(PromptStats::of(long_no_context).word_count > 10);
        assert_eq!(eval(&ContextRule, long_no_context).len(), 1);

        let with_context =
            "please compose the most elaborate winding narrative imaginable about several themes";
        assert!(eval(&ContextRule, with_context).is_empty());
    }
}
