use crate::ui::helpers::{pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Draws "Flag of X · Population: N · url" for the selected country.
pub fn render_detail(out: &mut String, row: usize, detail: &DetailInfo, theme: &Theme, cols: usize) -> usize {
    let mut line = format!(" {} · {}", detail.flag_alt, detail.population);
    if !detail.flag_url.is_empty() {
        line.push_str(" · ");
        line.push_str(&detail.flag_url);
    }
    let line: String = line.chars().take(cols).collect();

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&line);
    pad(out, cols.saturating_sub(width(&line)));
    out.push_str(Theme::reset());
    row + 1
}
