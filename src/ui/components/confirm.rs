//! Delete confirmation dialog renderer.

use crate::ui::helpers::{fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ConfirmInfo;

const DIALOG_WIDTH: usize = 50;

/// Renders the dialog centered on screen over whatever is already drawn.
pub fn render_confirm(confirm: &ConfirmInfo, theme: &Theme, rows: usize, cols: usize) {
    let width = DIALOG_WIDTH.min(cols);
    let inner = width.saturating_sub(2);
    let col = cols.saturating_sub(width) / 2 + 1;
    let top = rows.saturating_sub(6) / 2 + 1;

    let bg = Theme::bg(&theme.colors.panel_bg);
    let border = Theme::fg(&theme.colors.border);

    let centered = |text: &str| {
        let text = truncate(text, inner);
        let pad = inner.saturating_sub(text.chars().count()) / 2;
        fit(&format!("{}{text}", " ".repeat(pad)), inner)
    };

    let lines = [
        (centered(&confirm.title), Theme::fg(&theme.colors.error_fg), true),
        (centered(&confirm.message), Theme::fg(&theme.colors.text_normal), false),
        (" ".repeat(inner), String::new(), false),
        (
            centered("[y] Delete    [n] Cancel"),
            Theme::fg(&theme.colors.text_dim),
            false,
        ),
    ];

    position_cursor(top, col);
    print!("{bg}{border}┌{}┐{}", "─".repeat(inner), Theme::reset());

    for (offset, (text, color, bold)) in lines.iter().enumerate() {
        position_cursor(top + 1 + offset, col);
        print!("{bg}{border}│{color}");
        if *bold {
            print!("{}", Theme::bold());
        }
        print!("{text}{}{bg}{border}│{}", Theme::reset(), Theme::reset());
    }

    position_cursor(top + 1 + lines.len(), col);
    print!("{bg}{border}└{}┘{}", "─".repeat(inner), Theme::reset());
}
