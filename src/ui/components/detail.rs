//! Detail screen renderer.

use crate::ui::helpers::{fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailBody;

const LABEL_WIDTH: usize = 14;

/// Renders the record title followed by one labeled line per field.
///
/// # Returns
///
/// The next available row position.
pub fn render_detail(row: usize, detail: &DetailBody, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 3);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    print!("{}", truncate(&detail.title, cols.saturating_sub(4)));
    print!("{}", Theme::reset());

    let value_width = cols.saturating_sub(LABEL_WIDTH + 4);
    let mut current = row + 2;
    for (label, value) in &detail.fields {
        position_cursor(current, 3);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", fit(label, LABEL_WIDTH));
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", truncate(value, value_width));
        print!("{}", Theme::reset());
        current += 1;
    }
    current
}
