//! Keyword tables backing the heuristic rules.
//!
//! All tables are immutable statics; matching is case-insensitive substring
//! containment on the whole prompt unless the rule says otherwise.

pub const VAGUE_WORDS: &[&str] = &["thing", "stuff", "something", "anything", "everything"];

pub const INSTRUCTION_VERBS: &[&str] = &[
    "write",
    "create",
    "analyze",
    "explain",
    "describe",
    "generate",
    "summarize",
    "translate",
    "compare",
];

pub const FORMAT_INDICATORS: &[&str] = &[
    "format",
    "structure",
    "bullet points",
    "numbered list",
    "paragraph",
    "json",
    "table",
    "markdown",
];

pub const CONSTRAINT_WORDS: &[&str] = &[
    "word",
    "sentence",
    "paragraph",
    "page",
    "minute",
    "example",
    "step",
    "point",
    "item",
];

pub const AUDIENCE_WORDS: &[&str] = &[
    "audience",
    "reader",
    "user",
    "customer",
    "student",
    "professional",
    "beginner",
    "expert",
];

pub const CONTEXT_INDICATORS: &[&str] =
    &["context", "background", "situation", "scenario", "for", "about", "regarding"];
