//! Frame components. Each appends ANSI output to the frame and returns the
//! next free row.

mod detail;
mod empty;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Lays out the full frame: header, search box, list or notice, detail line,
/// footer.
pub fn render_layout(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(out, current_row, &vm.search_bar, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, current_row + 2, empty, theme, cols);
    } else {
        current_row = render_table_headers(out, current_row, theme);
        render_table_rows(out, current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let detail_row = border_row.saturating_sub(1);

    if let Some(detail) = &vm.detail {
        render_detail(out, detail_row, detail, theme, cols);
    }
    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}
