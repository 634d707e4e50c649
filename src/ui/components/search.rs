//! Boxed search input.

use crate::ui::helpers::{pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 5;

/// Draws the three-row search box. A focused box shows a cursor; a pending
/// debounce shows an ellipsis on the right.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(out, row, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let cursor = if search.focused { "_" } else { "" };
    let search_text = if search.query.is_empty() && !search.focused {
        " Search countries (/)".to_string()
    } else {
        format!(" Search: {}{cursor}", search.query)
    };
    let marker = if search.pending { "… " } else { "" };
    let search_text: String = search_text
        .chars()
        .take(inner_width.saturating_sub(width(marker)))
        .collect();
    let padding = inner_width.saturating_sub(width(&search_text) + width(marker));

    position_cursor(out, row + 1, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('│');
    if search.query.is_empty() && !search.focused {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    out.push_str(&search_text);
    pad(out, padding);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(marker);
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}
