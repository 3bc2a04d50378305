//! Follow-up suggestion extraction from an assembled chat answer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal delimiter separating the visible answer from the trailing
/// follow-up-question block the chat prompt asks the model to append.
///
/// Known fragility, kept as documented behavior: the marker is matched as
/// plain text, so a marker occurring inside a legitimate answer truncates
/// it, and a model that omits or malforms the marker yields no suggestions.
pub const SUGGESTIONS_MARKER: &str = "---SUGGESTIONS---";

const MAX_SUGGESTIONS: usize = 3;

static NUMBERED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("numbered-list pattern is valid"));

/// Split the fully-assembled assistant text into the text shown to the
/// user and up to three follow-up questions.
///
/// Runs exactly once, after stream completion — never mid-stream, where
/// the marker could be only partially arrived. Marker presence alone hides
/// everything after it, even when no numbered lines matched.
pub fn split_suggestions(text: &str) -> (String, Vec<String>) {
    let Some(pos) = text.find(SUGGESTIONS_MARKER) else {
        return (text.to_string(), Vec::new());
    };

    let suggestions = text[pos + SUGGESTIONS_MARKER.len()..]
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            NUMBERED_LINE
                .find(line)
                .map(|m| line[m.end()..].trim().to_string())
        })
        .take(MAX_SUGGESTIONS)
        .collect();

    let display = text[..pos].trim().to_string();
    (display, suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_at_most_three_suggestions_in_order() {
        let text = "Answer text.\n---SUGGESTIONS---\n1. First?\n2. Second?\n3. Third?\n4. Fourth?";
        let (display, suggestions) = split_suggestions(text);

        assert_eq!(display, "Answer text.");
        assert_eq!(suggestions, ["First?", "Second?", "Third?"]);
    }

    #[test]
    fn marker_without_numbered_lines_still_hides_the_tail() {
        let text = "Answer text.\n---SUGGESTIONS---\nno list here, just prose";
        let (display, suggestions) = split_suggestions(text);

        assert_eq!(display, "Answer text.");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn marker_with_nothing_after_it_yields_no_suggestions() {
        let (display, suggestions) = split_suggestions("Answer text.\n---SUGGESTIONS---");
        assert_eq!(display, "Answer text.");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn text_without_marker_passes_through_unchanged() {
        let text = "Just an answer with 1. a numbered list\n2. in the body";
        let (display, suggestions) = split_suggestions(text);

        assert_eq!(display, text);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn numbering_prefix_is_stripped_and_lines_kept_in_order() {
        let text = "A.\n---SUGGESTIONS---\n1.   Spaced out?\nnot numbered\n12. Double digits?";
        let (_, suggestions) = split_suggestions(text);

        assert_eq!(suggestions, ["Spaced out?", "Double digits?"]);
    }
}
