//! Line joining heuristics.
//!
//! `line_separator` decides how two adjacent line strings inside one block
//! are concatenated: hyphenation repair, space join, paragraph break, or a
//! plain newline. The character classes use Unicode categories so that
//! Latin, Cyrillic, and caseless scripts are handled uniformly.

use crate::models::BlockType;
use regex::Regex;
use std::sync::LazyLock;

// Letters that can legitimately be split by an end-of-line hyphen: lowercase
// letters, caseless-script letters, and digits.
static HYPHEN_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Lo}\p{Ll}\d][-—¬]\s?$").unwrap());
static HYPHEN_TRAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-—¬]\s?$").unwrap());
static LOWER_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s?[\p{Lo}\p{Ll}\d]").unwrap());

// Mid-sentence wrap: a letter/digit optionally followed by continuation
// punctuation at the end of the first line, a letter/digit at the start of
// the second.
static LINE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\p{Lo}\p{Ll}\d][,;(—"'*]?\s?$"#).unwrap());
static LETTER_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s?[\p{L}\d]").unwrap());

// Sentence-terminal punctuation, including the CJK full stop and the Thai
// repetition character.
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[。ๆ.?!]\s?$").unwrap());

/// Returns whether the block type holds prose whose lines may wrap
/// mid-sentence.
fn is_text_like(block_type: &BlockType) -> bool {
    matches!(
        block_type,
        BlockType::Text
            | BlockType::ListItem
            | BlockType::Footnote
            | BlockType::Caption
            | BlockType::Figure
    )
}

/// Joins two adjacent line strings belonging to the same block.
///
/// The rules are checked in precedence order:
///
/// 1. Hyphen repair: a word split across the line break is rejoined with no
///    separator and the hyphen removed.
/// 2. Titles and section headers always join with a single space.
/// 3. Formula lines keep their line breaks.
/// 4. A mid-sentence wrap in a text-like block joins with a single space.
/// 5. A geometric continuation joins with a single space regardless of the
///    text shape.
/// 6. A finished sentence in a text-like block starts a new paragraph.
/// 7. Table rows are separated by a blank line.
/// 8. Everything else keeps the line break (code blocks in particular).
///
/// # Arguments
///
/// * `line1` - The accumulated text so far.
/// * `line2` - The next line's text.
/// * `block_type` - The type of the enclosing block.
/// * `is_continuation` - Geometric continuation signal from the accumulator.
///
/// # Returns
///
/// The joined string.
pub fn line_separator(
    line1: &str,
    line2: &str,
    block_type: &BlockType,
    is_continuation: bool,
) -> String {
    if !line1.is_empty() && HYPHEN_END.is_match(line1) && LOWER_START.is_match(line2) {
        let repaired = HYPHEN_TRAIL.replace(line1, "");
        return format!("{}{}", repaired.trim_end(), line2.trim_start());
    }

    if matches!(block_type, BlockType::Title | BlockType::SectionHeader) {
        return format!("{} {}", line1.trim_end(), line2.trim_start());
    }
    if *block_type == BlockType::Formula {
        return format!("{}\n{}", line1, line2);
    }
    if is_text_like(block_type) && LINE_END.is_match(line1) && LETTER_START.is_match(line2) {
        return format!("{} {}", line1.trim_end(), line2.trim_start());
    }
    if is_continuation {
        return format!("{} {}", line1.trim_end(), line2.trim_start());
    }
    if is_text_like(block_type) && SENTENCE_END.is_match(line1) {
        return format!("{}\n\n{}", line1, line2);
    }
    if *block_type == BlockType::Table {
        return format!("{}\n\n{}", line1, line2);
    }
    return format!("{}\n{}", line1, line2);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_repair() {
        assert_eq!(
            line_separator("exam-", "ple", &BlockType::Text, false),
            "example"
        );
        // A trailing space after the hyphen is tolerated.
        assert_eq!(
            line_separator("exam- ", "ple", &BlockType::Text, false),
            "example"
        );
        // Em-dash counts as a hyphen-like character when preceded by a letter.
        assert_eq!(
            line_separator("The cat sat on the— ", "mat.", &BlockType::Text, false),
            "The cat sat on themat."
        );
    }

    #[test]
    fn test_hyphen_repair_requires_preceding_letter() {
        // A space before the dash means this is punctuation, not a split
        // word, so the joiner falls through to the default newline join.
        assert_eq!(
            line_separator("The cat sat on the — ", "mat.", &BlockType::Text, false),
            "The cat sat on the — \nmat."
        );
    }

    #[test]
    fn test_hyphen_repair_requires_lowercase_continuation() {
        // Uppercase after the hyphen looks like a compound name, not a wrap.
        assert_eq!(
            line_separator("anti-", "Patterns here", &BlockType::Text, false),
            "anti-\nPatterns here"
        );
    }

    #[test]
    fn test_hyphen_repair_cyrillic() {
        assert_eq!(
            line_separator("пере-", "нос", &BlockType::Text, false),
            "перенос"
        );
    }

    #[test]
    fn test_heading_join() {
        assert_eq!(
            line_separator("A Study of ", "Everything", &BlockType::Title, false),
            "A Study of Everything"
        );
        assert_eq!(
            line_separator("Related", "Work", &BlockType::SectionHeader, false),
            "Related Work"
        );
    }

    #[test]
    fn test_formula_keeps_newline() {
        assert_eq!(
            line_separator("$$a + b$$", "$$c$$", &BlockType::Formula, false),
            "$$a + b$$\n$$c$$"
        );
    }

    #[test]
    fn test_sentence_continuation_space_join() {
        assert_eq!(
            line_separator("the model was trained,", "and then evaluated", &BlockType::Text, false),
            "the model was trained, and then evaluated"
        );
        // Plain letter end also counts as a mid-sentence wrap.
        assert_eq!(
            line_separator("the quick brown", "fox", &BlockType::Text, false),
            "the quick brown fox"
        );
    }

    #[test]
    fn test_sentence_end_paragraph_break() {
        assert_eq!(
            line_separator("It was over.", "A new idea emerged", &BlockType::Text, false),
            "It was over.\n\nA new idea emerged"
        );
        assert_eq!(
            line_separator("これで終わり。", "次の段落", &BlockType::Text, false),
            "これで終わり。\n\n次の段落"
        );
    }

    #[test]
    fn test_continuation_overrides_sentence_end() {
        // Geometric continuation wins even when the first line ends a
        // sentence.
        assert_eq!(
            line_separator("It was over.", "A new idea emerged", &BlockType::Text, true),
            "It was over. A new idea emerged"
        );
    }

    #[test]
    fn test_table_blank_line() {
        assert_eq!(
            line_separator("| a | b |", "| c | d |", &BlockType::Table, false),
            "| a | b |\n\n| c | d |"
        );
    }

    #[test]
    fn test_code_default_newline() {
        assert_eq!(
            line_separator("let x = 1;", "let y = 2;", &BlockType::Code, false),
            "let x = 1;\nlet y = 2;"
        );
    }

    #[test]
    fn test_unknown_type_default_newline() {
        assert_eq!(
            line_separator("alpha.", "beta", &BlockType::Other, false),
            "alpha.\nbeta"
        );
    }
}
