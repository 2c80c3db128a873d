//! Splits a single-file problem statement into its sections

use crate::constants::sections;

/// The five sections of a problem statement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemSections {
    pub description: String,
    pub input: String,
    pub output: String,
    pub constraints: String,
    pub notes: String,
}

impl ProblemSections {
    fn buffer_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            sections::DESCRIPTION => Some(&mut self.description),
            sections::INPUT => Some(&mut self.input),
            sections::OUTPUT => Some(&mut self.output),
            sections::CONSTRAINTS => Some(&mut self.constraints),
            sections::NOTES => Some(&mut self.notes),
            _ => None,
        }
    }

    fn trim(&mut self) {
        for buffer in [
            &mut self.description,
            &mut self.input,
            &mut self.output,
            &mut self.constraints,
            &mut self.notes,
        ] {
            *buffer = buffer.trim().to_string();
        }
    }
}

/// Normalized section name of a level-2 heading line, if it is one
///
/// `## Sample Input` becomes `sample_input`. Deeper or shallower headings are
/// body text.
fn heading_key(line: &str) -> Option<String> {
    let text = line.strip_prefix(sections::HEADING_MARKER)?;
    Some(text.trim().to_lowercase().replace(' ', "_"))
}

/// Split `markdown` on `## <Section>` headings
///
/// Lines under an unrecognized heading are dropped until the next recognized
/// one. Text before the first heading is dropped as well.
pub fn split_sections(markdown: &str) -> ProblemSections {
    let mut result = ProblemSections::default();
    let mut current: Option<&'static str> = None;

    let markdown = markdown.strip_prefix('\u{feff}').unwrap_or(markdown);
    for line in markdown.lines() {
        if let Some(key) = heading_key(line) {
            current = sections::ALL.iter().copied().find(|name| *name == key);
            continue;
        }

        if let Some(buffer) = current.and_then(|name| result.buffer_mut(name)) {
            buffer.push_str(line);
            buffer.push('\n');
        }
    }

    result.trim();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_all_sections() {
        let doc = "\
## Description
Find the sum.

Of two numbers.

## Input
Two integers a and b.

## Output
Print a + b.

## Constraints
1 <= a, b <= 10^9

## Notes
Watch for overflow.
";
        let s = split_sections(doc);
        assert_eq!(s.description, "Find the sum.\n\nOf two numbers.");
        assert_eq!(s.input, "Two integers a and b.");
        assert_eq!(s.output, "Print a + b.");
        assert_eq!(s.constraints, "1 <= a, b <= 10^9");
        assert_eq!(s.notes, "Watch for overflow.");
    }

    #[test]
    fn test_no_headings_yields_empty_sections() {
        assert_eq!(split_sections("just text\nmore text"), ProblemSections::default());
        assert_eq!(split_sections(""), ProblemSections::default());
    }

    #[test]
    fn test_heading_match_is_case_insensitive() {
        let s = split_sections("## DESCRIPTION\nabc\n##   notes  \nxyz");
        assert_eq!(s.description, "abc");
        assert_eq!(s.notes, "xyz");
    }

    #[test]
    fn test_unknown_heading_discards_until_next_known() {
        let s = split_sections("## Input\nn\n## Sample Explanation\nignored\n## Output\nm");
        assert_eq!(s.input, "n");
        assert_eq!(s.output, "m");
        assert!(!s.input.contains("ignored"));
        assert!(!s.output.contains("ignored"));
    }

    #[test]
    fn test_other_heading_levels_are_body_text() {
        let s = split_sections("# Title\n## Description\nintro\n### Subtask 1\ndetails\n#### deep");
        assert_eq!(s.description, "intro\n### Subtask 1\ndetails\n#### deep");
    }

    #[test]
    fn test_marker_requires_space() {
        let s = split_sections("## Description\na\n##Input\nb");
        assert_eq!(s.description, "a\n##Input\nb");
        assert!(s.input.is_empty());
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let s = split_sections("\u{feff}## Description\nhello\n## Notes\nbye");
        assert_eq!(s.description, "hello");
        assert_eq!(s.notes, "bye");
    }

    #[test]
    fn test_handles_crlf_line_endings() {
        let s = split_sections("## Input\r\nline one\r\n## Output\r\nline two\r\n");
        assert_eq!(s.input, "line one");
        assert_eq!(s.output, "line two");
    }
}
