//! Add and edit form renderer.
//!
//! One line per field: label (with `*` when required), the value in brackets,
//! and the validation message to the right when the field has one. The focused
//! field uses the accent color and shows a caret; read-only fields are dimmed.

use crate::ui::helpers::{fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormBody;

const LABEL_WIDTH: usize = 15;
const VALUE_WIDTH: usize = 36;

/// Renders the form starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_form(row: usize, form: &FormBody, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 3);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    print!("{}", form.title);
    print!("{}", Theme::reset());

    let value_width = VALUE_WIDTH.min(cols.saturating_sub(LABEL_WIDTH + 6));
    let error_width = cols.saturating_sub(LABEL_WIDTH + value_width + 8);

    let mut current = row + 2;
    for field in &form.fields {
        let label = if field.required {
            format!("{}*", field.label)
        } else {
            field.label.clone()
        };
        let caret = if field.focused { "▏" } else { "" };
        let value = fit(&format!("{}{caret}", field.value), value_width);

        let color = if field.focused {
            &theme.colors.accent
        } else if field.read_only {
            &theme.colors.text_dim
        } else {
            &theme.colors.text_normal
        };

        position_cursor(current, 3);
        print!("{}", Theme::fg(color));
        if field.focused {
            print!("{}", Theme::bold());
        }
        print!("{}", fit(&label, LABEL_WIDTH));
        print!("[{value}]");
        print!("{}", Theme::reset());

        if let Some(error) = &field.error {
            print!("  {}", Theme::fg(&theme.colors.error_fg));
            print!("{}", truncate(error, error_width));
            print!("{}", Theme::reset());
        }
        current += 1;
    }
    current
}
