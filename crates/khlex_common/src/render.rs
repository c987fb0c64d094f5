//! Presentation helpers shared by the CLI and the terminal viewer.

/// Strip control characters from user-supplied text before display.
///
/// The documents come off the network; a stray escape sequence inside a term
/// field must not be able to rewrite the terminal.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Results-count label shown above the card list.
pub fn results_count_label(count: usize) -> String {
    format!("{} terms found", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize("plain text"), "plain text");
        assert_eq!(sanitize("tricky\x1b[31mred\x1b[0m"), "tricky[31mred[0m");
        assert_eq!(sanitize("line\nbreak\ttab"), "linebreaktab");
    }

    #[test]
    fn test_sanitize_keeps_khmer_script() {
        let khmer = "ឃ្លាំងសម្ងាត់";
        assert_eq!(sanitize(khmer), khmer);
    }

    #[test]
    fn test_results_count_label() {
        assert_eq!(results_count_label(0), "0 terms found");
        assert_eq!(results_count_label(42), "42 terms found");
    }
}
