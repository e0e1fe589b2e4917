//! Shared rendering utilities.
//!
//! Cursor positioning, width-aware truncation, and search match highlighting
//! used across components. All widths and ranges are in characters, not bytes.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `width` characters, ending in `…` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Truncates or right-pads `text` to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let len = cut.chars().count();
    format!("{cut}{}", " ".repeat(width.saturating_sub(len)))
}

/// Character ranges where `query` occurs in `text`, compared case-insensitively.
///
/// Matches are non-overlapping and scanned left to right. An empty query yields
/// no ranges.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return vec![];
    }

    let hay: Vec<char> = text.chars().collect();
    let lowered: Vec<char> = hay
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= lowered.len() {
        if lowered[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Prints `text` with the given character ranges highlighted.
///
/// Selected rows skip match highlighting so the selection colors stay intact.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            print!("{}", chars[current_pos..start].iter().collect::<String>());
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        print!("{}", chars[start..end].iter().collect::<String>());
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        print!("{}", chars[current_pos..].iter().collect::<String>());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("Romaguera-Crona", 8), "Romague…");
        assert_eq!(truncate("Acme", 8), "Acme");
        assert_eq!(truncate("Acme", 0), "");
    }

    #[test]
    fn fit_pads_to_width() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4).chars().count(), 4);
    }

    #[test]
    fn match_ranges_are_case_insensitive_and_repeat() {
        assert_eq!(match_ranges("Anna Banana", "an"), vec![(0, 2), (6, 8), (8, 10)]);
        assert_eq!(match_ranges("Leanne", "ZED"), vec![]);
        assert_eq!(match_ranges("Leanne", ""), vec![]);
    }

    #[test]
    fn match_ranges_count_characters_not_bytes() {
        assert_eq!(match_ranges("Zoë Ëlla", "ël"), vec![(4, 6)]);
    }
}
