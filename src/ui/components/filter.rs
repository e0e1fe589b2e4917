//! Filter dropdown renderer.
//!
//! Drawn over the right side of the table, one section per filter category.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterPanelInfo;

const PANEL_WIDTH: usize = 32;

/// Renders the filter dropdown with its top edge at `row`.
///
/// Checked options show `[x]`, and the cursor row is drawn with the selection
/// colors.
///
/// # Returns
///
/// The row after the panel's bottom border.
pub fn render_filter_panel(row: usize, panel: &FilterPanelInfo, theme: &Theme, cols: usize) -> usize {
    let width = PANEL_WIDTH.min(cols);
    let inner = width.saturating_sub(2);
    let col = cols.saturating_sub(width) + 1;
    let bg = Theme::bg(&theme.colors.panel_bg);

    let edge = |row: usize, left: char, right: char| {
        position_cursor(row, col);
        print!("{bg}{}", Theme::fg(&theme.colors.border));
        print!("{left}{}{right}", "─".repeat(inner));
        print!("{}", Theme::reset());
    };

    edge(row, '┌', '┐');
    let mut current = row + 1;

    for section in &panel.sections {
        position_cursor(current, col);
        print!("{bg}{}│", Theme::fg(&theme.colors.border));
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
        print!("{}", fit(&format!(" {}", section.title), inner));
        print!("{}{bg}{}│", Theme::reset(), Theme::fg(&theme.colors.border));
        print!("{}", Theme::reset());
        current += 1;

        for option in &section.options {
            let mark = if option.checked { "[x]" } else { "[ ]" };
            let text = fit(&format!("  {mark} {}", option.label), inner);

            position_cursor(current, col);
            print!("{bg}{}│", Theme::fg(&theme.colors.border));
            if option.is_cursor {
                print!("{}", Theme::fg(&theme.colors.selection_fg));
                print!("{}", Theme::bg(&theme.colors.selection_bg));
            } else {
                print!("{}", Theme::fg(&theme.colors.text_normal));
            }
            print!("{text}");
            print!("{}{bg}{}│", Theme::reset(), Theme::fg(&theme.colors.border));
            print!("{}", Theme::reset());
            current += 1;
        }
    }

    edge(current, '└', '┘');
    current + 1
}
