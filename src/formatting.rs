use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;

/// Box-drawing characters for the strike zone and table borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "┌".to_string(),
            top_right: "┐".to_string(),
            bottom_left: "└".to_string(),
            bottom_right: "┘".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Collapse runs of whitespace (including newlines) into single spaces
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedy word wrap to at most `width` display columns per line
///
/// Words longer than `width` are split across lines.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.width() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split_at = split_index(&word, width);
            let rest = word.split_off(split_at);
            lines.push(word);
            word = rest;
        }

        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Byte index of the longest prefix of `word` fitting in `width` columns
fn split_index(word: &str, width: usize) -> usize {
    let mut used = 0;
    for (idx, ch) in word.char_indices() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            return idx.max(ch.len_utf8());
        }
        used += w;
    }
    word.len()
}

/// Column at which `text` starts when centred on `mid`
pub fn centered_start(mid: u16, text: &str) -> u16 {
    mid.saturating_sub((text.width() / 2) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_header_single_line_unicode() {
        let display = DisplayConfig::default();
        let result = format_header("Batter", false, &display);
        assert_eq!(result, "Batter\n──────\n");
    }

    #[test]
    fn test_format_header_double_line_ascii() {
        let display = DisplayConfig {
            box_chars: BoxChars::ascii(),
            ..Default::default()
        };
        let result = format_header("Pitcher", true, &display);
        assert_eq!(result, "Pitcher\n=======\n");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("Bo Bichette   singles on a  line drive\n to left."),
            "Bo Bichette singles on a line drive to left."
        );
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_wrap_words_respects_width() {
        let lines = wrap_words("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(lines.iter().all(|l| l.width() <= 10));
    }

    #[test]
    fn test_wrap_words_splits_long_words() {
        let lines = wrap_words("abcdefghij xy", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_words_empty() {
        assert!(wrap_words("", 10).is_empty());
    }

    #[test]
    fn test_centered_start() {
        assert_eq!(centered_start(40, "abcd"), 38);
        assert_eq!(centered_start(1, "abcdef"), 0);
    }
}
