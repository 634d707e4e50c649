use crate::ui::helpers::{pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Draws the centred keybinding hints.
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text: String = footer.keybindings.chars().take(cols).collect();
    let text_len = width(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, padding);
    out.push_str(&help_text);
    pad(out, cols.saturating_sub(padding + text_len));
    out.push_str(Theme::reset());
    row + 1
}
