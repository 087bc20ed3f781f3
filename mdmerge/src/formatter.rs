//! Block-level markdown formatting.
//!
//! This module provides functionality for:
//! - Escaping markdown-special characters in body text
//! - Wrapping span text in emphasis markers without disturbing whitespace
//! - Applying the type-specific markdown surround to a finalized block

use crate::models::BlockType;

/// Escapes markdown-special characters in the given text.
///
/// Only `#` is escaped: a literal `#` at the start of a line would otherwise
/// be parsed as a heading. The character set is fixed; other markdown
/// metacharacters pass through untouched.
pub fn escape_markdown(text: &str) -> String {
    return text.replace('#', "\\#");
}

/// Wraps the trimmed content of `text` in `marker`, preserving the original
/// leading and trailing whitespace outside the markers.
///
/// # Arguments
///
/// * `text` - The span text to wrap.
/// * `marker` - The emphasis marker, e.g. `*` or `**`.
///
/// # Returns
///
/// The wrapped string, e.g. `" word "` with marker `*` becomes `" *word* "`.
pub fn surround_text(text: &str, marker: &str) -> String {
    let stripped = text.trim();
    let leading = &text[..text.len() - text.trim_start().len()];
    let trailing = &text[text.trim_end().len()..];
    return format!("{}{}{}{}{}", leading, marker, stripped, marker, trailing);
}

/// Title-cases the given text: the first alphabetic character of every word
/// is uppercased and the rest are lowercased, where a word boundary is any
/// non-alphabetic character.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alphabetic = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    return out;
}

/// Applies the type-specific markdown surround to a finalized block's raw
/// merged text.
///
/// Headings are only generated when the text does not already start with a
/// heading marker. Section headers use `heading_level` (defaulting to level
/// 2) and carry a leading newline; titles are always level 1. Unrecognized
/// block types pass through unchanged.
///
/// # Arguments
///
/// * `text` - The raw merged block text.
/// * `block_type` - The type of the block being closed.
/// * `heading_level` - The heading depth, only used for section headers.
///
/// # Returns
///
/// The markdown-formatted block text.
pub fn block_surround(text: &str, block_type: &BlockType, heading_level: Option<i8>) -> String {
    match block_type {
        BlockType::Title => {
            if text.starts_with('#') {
                text.to_string()
            } else {
                format!("# {}\n", title_case(text.trim()))
            }
        }
        BlockType::SectionHeader => {
            if text.starts_with('#') {
                text.to_string()
            } else {
                let marks = "#".repeat(heading_level.unwrap_or(2).max(1) as usize);
                format!("\n{} {}\n", marks, title_case(text.trim()))
            }
        }
        BlockType::Table => format!("\n{}\n", text),
        BlockType::ListItem => format!("{}\n", escape_markdown(text.trim_end())),
        BlockType::Code => format!("\n```\n{}\n```\n", text),
        BlockType::Text => escape_markdown(text),
        BlockType::Formula => {
            let trimmed = text.trim();
            if trimmed.starts_with("$$") && trimmed.ends_with("$$") {
                format!("\n{}\n", trimmed)
            } else {
                text.to_string()
            }
        }
        BlockType::Caption => format!("\n{}\n", escape_markdown(text)),
        BlockType::Figure | BlockType::Footnote | BlockType::Other => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markdown_noop_without_hash() {
        assert_eq!(escape_markdown("plain text, *stars* kept"), "plain text, *stars* kept");
    }

    #[test]
    fn test_escape_markdown_hash() {
        assert_eq!(escape_markdown("issue #42"), "issue \\#42");
        assert_eq!(escape_markdown("# not a heading"), "\\# not a heading");
    }

    #[test]
    fn test_surround_text_preserves_whitespace() {
        assert_eq!(surround_text(" word ", "*"), " *word* ");
        assert_eq!(surround_text("word", "**"), "**word**");
        assert_eq!(surround_text("  two words\t", "*"), "  *two words*\t");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("MIXED case TEXT"), "Mixed Case Text");
        assert_eq!(title_case("3rd section"), "3Rd Section");
    }

    #[test]
    fn test_title_block() {
        assert_eq!(
            block_surround("hello world", &BlockType::Title, None),
            "# Hello World\n"
        );
        // An existing heading marker suppresses re-wrapping.
        assert_eq!(
            block_surround("# Already A Title", &BlockType::Title, None),
            "# Already A Title"
        );
    }

    #[test]
    fn test_section_header_levels() {
        assert_eq!(
            block_surround("background", &BlockType::SectionHeader, None),
            "\n## Background\n"
        );
        assert_eq!(
            block_surround("details", &BlockType::SectionHeader, Some(3)),
            "\n### Details\n"
        );
    }

    #[test]
    fn test_list_item_escapes_and_trims() {
        assert_eq!(
            block_surround("item #1  ", &BlockType::ListItem, None),
            "item \\#1\n"
        );
    }

    #[test]
    fn test_code_fence() {
        assert_eq!(
            block_surround("let x = 1;", &BlockType::Code, None),
            "\n```\nlet x = 1;\n```\n"
        );
    }

    #[test]
    fn test_formula_delimited() {
        assert_eq!(
            block_surround(" $$x^2$$ ", &BlockType::Formula, None),
            "\n$$x^2$$\n"
        );
        // Without both delimiters the text is left alone.
        assert_eq!(
            block_surround("x^2", &BlockType::Formula, None),
            "x^2"
        );
    }

    #[test]
    fn test_caption_and_table_padding() {
        assert_eq!(
            block_surround("Figure 1: #overview", &BlockType::Caption, None),
            "\nFigure 1: \\#overview\n"
        );
        assert_eq!(
            block_surround("a | b", &BlockType::Table, None),
            "\na | b\n"
        );
    }

    #[test]
    fn test_other_types_pass_through() {
        assert_eq!(
            block_surround("raw #text", &BlockType::Other, None),
            "raw #text"
        );
        assert_eq!(
            block_surround("footnote #1", &BlockType::Footnote, None),
            "footnote #1"
        );
    }
}
