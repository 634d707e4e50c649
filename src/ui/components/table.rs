//! Country table: NAME, POPULATION, FLAG.

use crate::app::state::{NAME_COLUMN_WIDTH, POPULATION_COLUMN_WIDTH};
use crate::ui::helpers::{self, pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

pub fn render_table_headers(out: &mut String, row: usize, theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&format!(
        "{:<name$}{:>pop$} {}",
        "NAME",
        "POPULATION",
        "FLAG",
        name = NAME_COLUMN_WIDTH,
        pop = POPULATION_COLUMN_WIDTH
    ));
    out.push_str(Theme::reset());
    row + 1
}

pub fn render_table_rows(out: &mut String, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current_row, item| render_table_row(out, current_row, item, theme, cols))
}

fn render_table_row(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    out.push_str(&base);

    helpers::render_highlighted_text(out, &item.name, &item.highlight_ranges, theme, item.is_selected);
    pad(out, NAME_COLUMN_WIDTH.saturating_sub(width(&item.name)));

    if !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.accent_fg));
    }
    out.push_str(&format!(
        "{:>pop$} ",
        item.population,
        pop = POPULATION_COLUMN_WIDTH
    ));

    if !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(&item.flag_url);

    let line_len = NAME_COLUMN_WIDTH + POPULATION_COLUMN_WIDTH + 1 + width(&item.flag_url);
    pad(out, cols.saturating_sub(line_len));

    out.push_str(Theme::reset());
    row + 1
}
