use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

use crate::catalog;
use crate::error::TemplateError;

/// Render a category's structure lines, substituting every `{name}`
/// placeholder with `[NAME: description]`. Caller overrides win per key;
/// unknown names are left verbatim so a typo in the catalog shows up in the
/// output instead of disappearing.
pub fn render(
    category: &str,
    overrides: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let cat = catalog::find(category)
        .ok_or_else(|| TemplateError::UnknownCategory(category.to_string()))?;

    let mut vars: HashMap<&str, &str> = cat.variables.iter().copied().collect();
    for (name, value) in overrides {
        vars.insert(name.as_str(), value.as_str());
    }

    tracing::debug!(category, overrides = overrides.len(), "rendering template");

    let lines: Vec<String> =
        cat.structure.iter().map(|line| substitute_line(line, &vars)).collect();
    Ok(lines.join("\n"))
}

/// Single left-to-right scan for `{name}` tokens, substituting by exact
/// name match. Unlike a per-variable find-and-replace this cannot collide
/// on variable names that are substrings of one another.
fn substitute_line(line: &str, vars: &HashMap<&str, &str>) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find(['{', '}']) {
            Some(end) if after.as_bytes()[end] == b'}' => {
                let name = &after[..end];
                match vars.get(name) {
                    Some(desc) => {
                        out.push('[');
                        out.push_str(&name.to_uppercase());
                        out.push_str(": ");
                        out.push_str(desc);
                        out.push(']');
                    }
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            // literal '{' (either unclosed, or another '{' opened first)
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Write a rendered template to `path` with a title line and usage trailer.
pub fn save(
    category: &str,
    path: &Path,
    overrides: &HashMap<String, String>,
) -> anyhow::Result<()> {
    let body = render(category, overrides)?;
    let mut text = format!("# {} Prompt Template\n\n", title_case(category));
    text.push_str(&body);
    text.push_str("\n\n# Usage Instructions\n");
    text.push_str("Replace the bracketed placeholders with your specific content.\n");
    text.push_str("Remove any sections that don't apply to your use case.\n");
    std::fs::write(path, text).with_context(|| format!("write template: {}", path.display()))?;
    tracing::debug!(category, path = %path.display(), "template saved");
    Ok(())
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
