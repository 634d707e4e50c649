//! Shared rendering helpers.
//!
//! Components append to a frame `String`; the renderer prints the frame once.

use crate::ui::theme::Theme;

/// Appends an ANSI cursor move to `row`, `col` (both 1-indexed).
///
/// ```
/// use countrydeck::ui::helpers::position_cursor;
///
/// let mut frame = String::new();
/// position_cursor(&mut frame, 5, 1);
/// assert_eq!(frame, "\u{1b}[5;1H");
/// ```
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Appends `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

/// Display width of `text`, counted in characters.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Appends `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive. Selected rows
/// skip highlighting so the selection colours stay intact.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_wraps_only_the_range() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "Brazil", &[(2, 4)], &theme, false);

        let highlight = Theme::fg(&theme.colors.match_highlight_fg);
        let at = out.find(&highlight).unwrap();
        assert_eq!(&out[..at], "Br");
        assert!(out.contains("az"));
        assert!(out.ends_with("il"));
    }

    #[test]
    fn selected_rows_are_plain() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "Chile", &[(0, 2)], &theme, true);
        assert_eq!(out, "Chile");
    }

    #[test]
    fn out_of_bounds_ranges_are_clamped() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "Peru", &[(2, 10)], &theme, false);
        assert!(out.starts_with("Pe"));
        assert!(out.contains("ru"));
    }

    #[test]
    fn width_counts_chars() {
        assert_eq!(width("Åland"), 5);
    }
}
