/// Derived attributes of a prompt, computed once and shared by all rules.
///
/// Word count is the whitespace-split token count; character count is the
/// number of Unicode scalars, not bytes. The lower-cased copy backs the
/// case-insensitive containment checks so each rule does not re-lower the
/// whole prompt.
#[derive(Clone, Debug)]
pub struct PromptStats<'a> {
    pub text: &'a str,
    pub lower: String,
    pub word_count: usize,
    pub char_count: usize,
}

impl<'a> PromptStats<'a> {
    pub fn of(text: &'a str) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
        }
    }

    /// Case-insensitive substring containment against the cached lower-case copy.
    pub fn contains(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }
}
