//! Header component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar with the title centered and the display mode at the right edge.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [padding] dark
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let mode_len = header.mode_label.chars().count() + 1;
    let padding = cols.saturating_sub(title_len) / 2;
    let trailing = cols.saturating_sub(padding + title_len + mode_len);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(trailing));

    print!("{}", Theme::fg(&theme.colors.accent));
    if padding + title_len + mode_len <= cols {
        print!("{} ", header.mode_label);
    }

    print!("{}", Theme::reset());
    row + 1
}
