use crate::ui::helpers::{pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, Notice};

/// Draws the centred notice and its subtitle at `row` and the row below.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let color = match empty.notice {
        Notice::Info => &theme.colors.empty_state_fg,
        Notice::Error => &theme.colors.error_fg,
    };

    let msg_len = width(&empty.message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    pad(out, msg_padding);
    out.push_str(&empty.message);
    pad(out, cols.saturating_sub(msg_padding + msg_len));
    out.push_str(Theme::reset());

    let sub_len = width(&empty.subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, sub_padding);
    out.push_str(&empty.subtitle);
    pad(out, cols.saturating_sub(sub_padding + sub_len));
    out.push_str(Theme::reset());
}
