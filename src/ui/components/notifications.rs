//! Notification card renderer.
//!
//! Cards stack downward from the top-right corner, oldest on top. Colors come
//! from the notification kind rather than the theme so success and error read
//! the same in both display modes.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NotificationInfo;

const MAX_CARD_WIDTH: usize = 40;

/// Renders the cards with the first one at `row`.
pub fn render_notifications(row: usize, cards: &[NotificationInfo], cols: usize) {
    let max_width = MAX_CARD_WIDTH.min(cols.saturating_sub(2));

    for (offset, card) in cards.iter().enumerate() {
        let text = truncate(&format!(" {} {} ", card.kind.icon(), card.message), max_width);
        let width = text.chars().count();
        let col = cols.saturating_sub(width + 1) + 1;

        position_cursor(row + offset, col);
        print!("{}", Theme::bg(card.kind.background()));
        print!("{}", Theme::fg(card.kind.foreground()));
        print!("{text}");
        print!("{}", Theme::reset());
    }
}
