//! The built-in template catalog.
//!
//! Static data, defined once, immutable. Structure lines carry `{name}`
//! placeholders; `variables` maps each name to its human-readable
//! description in display order.

use crate::error::TemplateError;

pub struct TemplateCategory {
    pub name: &'static str,
    pub structure: &'static [&'static str],
    pub variables: &'static [(&'static str, &'static str)],
}

pub static CATALOG: &[TemplateCategory] = &[
    TemplateCategory {
        name: "analysis",
        structure: &[
            "Analyze {content} and provide:",
            "1. **Summary**: {summary_instruction}",
            "2. **Key Findings**: {findings_instruction}",
            "3. **Implications**: {implications_instruction}",
            "4. **Recommendations**: {recommendations_instruction}",
            "",
            "**Context**: {context}",
            "**Audience**: {audience}",
            "**Format**: {format_requirements}",
        ],
        variables: &[
            ("content", "Content to analyze"),
            ("summary_instruction", "Brief overview requirement"),
            ("findings_instruction", "Key findings requirement"),
            ("implications_instruction", "Implications description"),
            ("recommendations_instruction", "Recommendations requirement"),
            ("context", "Relevant background information"),
            ("audience", "Target audience"),
            ("format_requirements", "Output format specifications"),
        ],
    },
    TemplateCategory {
        name: "writing",
        structure: &[
            "Write a {content_type} about {topic} that:",
            "- {requirement_1}",
            "- {requirement_2}",
            "- {requirement_3}",
            "",
            "**Target Audience**: {audience}",
            "**Tone**: {tone}",
            "**Length**: {length}",
            "**Format**: {format}",
            "",
            "**Additional Requirements**:",
            "{additional_requirements}",
        ],
        variables: &[
            ("content_type", "Type of content (article, email, etc.)"),
            ("topic", "Main topic or subject"),
            ("requirement_1", "First key requirement"),
            ("requirement_2", "Second key requirement"),
            ("requirement_3", "Third key requirement"),
            ("audience", "Target audience description"),
            ("tone", "Desired tone (professional, casual, etc.)"),
            ("length", "Content length specification"),
            ("format", "Output format requirements"),
            ("additional_requirements", "Any additional specifications"),
        ],
    },
    TemplateCategory {
        name: "coding",
        structure: &[
            "Write a {language} {code_type} that {functionality}.",
            "",
            "**Requirements**:",
            "- {requirement_1}",
            "- {requirement_2}",
            "- {requirement_3}",
            "",
            "**Input**: {input_description}",
            "**Output**: {output_description}",
            "**Constraints**: {constraints}",
            "",
            "**Additional Notes**:",
            "- Include error handling",
            "- Add appropriate comments",
            "- Follow {language} best practices",
            "- {additional_notes}",
        ],
        variables: &[
            ("language", "Programming language"),
            ("code_type", "Type of code (function, class, script, etc.)"),
            ("functionality", "What the code should do"),
            ("requirement_1", "First technical requirement"),
            ("requirement_2", "Second technical requirement"),
            ("requirement_3", "Third technical requirement"),
            ("input_description", "Expected input format/type"),
            ("output_description", "Expected output format/type"),
            ("constraints", "Any limitations or constraints"),
            ("additional_notes", "Additional implementation notes"),
        ],
    },
    TemplateCategory {
        name: "creative",
        structure: &[
            "Create a {creative_type} with the following elements:",
            "",
            "**Theme**: {theme}",
            "**Style**: {style}",
            "**Mood**: {mood}",
            "**Setting**: {setting}",
            "",
            "**Key Elements to Include**:",
            "- {element_1}",
            "- {element_2}",
            "- {element_3}",
            "",
            "**Length**: {length}",
            "**Target Audience**: {audience}",
            "**Additional Instructions**: {additional_instructions}",
        ],
        variables: &[
            ("creative_type", "Type of creative content"),
            ("theme", "Main theme or concept"),
            ("style", "Writing or artistic style"),
            ("mood", "Desired mood or atmosphere"),
            ("setting", "Setting or context"),
            ("element_1", "First key element to include"),
            ("element_2", "Second key element to include"),
            ("element_3", "Third key element to include"),
            ("length", "Content length"),
            ("audience", "Target audience"),
            ("additional_instructions", "Any additional creative directions"),
        ],
    },
];

/// Category keys in catalog order.
pub fn categories() -> Vec<&'static str> {
    CATALOG.iter().map(|c| c.name).collect()
}

pub fn find(name: &str) -> Option<&'static TemplateCategory> {
    CATALOG.iter().find(|c| c.name == name)
}

/// Placeholder name -> description pairs for one category, in display order.
pub fn variables(name: &str) -> Result<&'static [(&'static str, &'static str)], TemplateError> {
    find(name)
        .map(|c| c.variables)
        .ok_or_else(|| TemplateError::UnknownCategory(name.to_string()))
}
