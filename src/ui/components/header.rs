//! Title row with the sort toggle label.

use crate::ui::helpers::{pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Draws the centred title, with the sort label right-aligned when it fits.
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = width(&header.title);
    let label_len = width(&header.sort_label);
    let padding = cols.saturating_sub(title_len) / 2;
    let show_label = padding + title_len + label_len + 2 <= cols;

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }

    pad(out, padding);
    out.push_str(&header.title);

    if show_label {
        pad(out, cols - (padding + title_len + label_len + 1));
        out.push_str(&Theme::fg(&theme.colors.accent_fg));
        out.push_str(&header.sort_label);
        pad(out, 1);
    } else {
        pad(out, cols.saturating_sub(padding + title_len));
    }

    out.push_str(Theme::reset());
    row + 1
}
