//! Table component renderer.
//!
//! Renders the user list as a four-column table (NAME, EMAIL, ADDRESS, COMPANY)
//! with sort indicators on the sortable headers, selection highlighting, search
//! match highlighting on names, and the pagination line beneath the rows.

use crate::app::list::SortDirective;
use crate::ui::helpers::{self, fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, PaginationInfo};

/// Gap between columns.
const COLUMN_GAP: usize = 2;

/// Column widths for NAME, EMAIL, ADDRESS, and COMPANY at a terminal width.
///
/// Name and email get a quarter each, address gets 30%, and company takes the
/// rest. Gaps are subtracted first.
#[must_use]
pub fn column_widths(cols: usize) -> [usize; 4] {
    let usable = cols.saturating_sub(COLUMN_GAP * 3);
    let name = usable / 4;
    let email = usable / 4;
    let address = usable * 3 / 10;
    let company = usable.saturating_sub(name + email + address);
    [name, email, address, company]
}

/// Marker glyph and color for a sort directive.
fn sort_marker(directive: SortDirective, theme: &Theme) -> (&'static str, &str) {
    match directive {
        SortDirective::Descending => ("▼", &theme.colors.sort_descending),
        SortDirective::Neutral => ("−", &theme.colors.text_dim),
        SortDirective::Ascending => ("▲", &theme.colors.sort_ascending),
    }
}

/// Renders the column headers with sort markers on NAME and EMAIL.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(
    row: usize,
    name_sort: SortDirective,
    email_sort: SortDirective,
    theme: &Theme,
    cols: usize,
) -> usize {
    let [name_w, email_w, address_w, company_w] = column_widths(cols);
    let gap = " ".repeat(COLUMN_GAP);

    position_cursor(row, 1);
    print!("{}", Theme::bold());

    for (label, directive, width) in [("NAME", name_sort, name_w), ("EMAIL", email_sort, email_w)] {
        let (marker, color) = sort_marker(directive, theme);
        print!("{}", Theme::fg(&theme.colors.header_fg));
        print!("{}", fit(label, width.saturating_sub(2)));
        print!("{}", Theme::fg(color));
        print!("{marker} ");
        print!("{gap}");
    }

    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}{gap}", fit("ADDRESS", address_w));
    print!("{}", fit("COMPANY", company_w));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one user row.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Search match highlights on the name (unless selected)
/// 3. Normal text color
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let [name_w, email_w, address_w, company_w] = column_widths(cols);
    let gap = " ".repeat(COLUMN_GAP);

    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let name = truncate(&item.name, name_w);
    helpers::render_highlighted_text(&name, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat(name_w.saturating_sub(name.chars().count())));
    print!("{gap}");

    print!("{}{gap}", fit(&item.email, email_w));
    print!("{}{gap}", fit(&item.address, address_w));
    print!("{}", fit(&item.company, company_w));

    let line_len = name_w + email_w + address_w + company_w + COLUMN_GAP * 3;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the pagination line: arrows, page label, and rows per page.
///
/// Arrows are dimmed when that direction is unavailable.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pagination(row: usize, pagination: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let arrow = |enabled: bool| {
        if enabled {
            Theme::fg(&theme.colors.accent)
        } else {
            Theme::fg(&theme.colors.text_dim)
        }
    };

    let text = format!(
        "◀ {} ▶   per page: {}",
        pagination.label, pagination.page_size
    );
    let padding = cols.saturating_sub(text.chars().count()) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}◀ ", arrow(pagination.can_go_back));
    print!("{}{}", Theme::fg(&theme.colors.text_normal), pagination.label);
    print!("{} ▶", arrow(pagination.can_go_forward));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("   per page: {}", pagination.page_size);
    print!("{}", Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_widths_fill_terminal() {
        let widths = column_widths(86);
        assert_eq!(widths, [20, 20, 24, 16]);
        assert_eq!(widths.iter().sum::<usize>() + COLUMN_GAP * 3, 86);
    }

    #[test]
    fn column_widths_survive_tiny_terminals() {
        assert_eq!(column_widths(4), [0, 0, 0, 0]);
    }
}
