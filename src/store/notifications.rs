//! Notification queue with scheduled expiry.
//!
//! Every card added through [`NotificationQueue::push`] gets exactly one expiry
//! slot. Zellij timers carry no payload, so the slots are kept in schedule order
//! and each timer firing pops the oldest one. All cards share the same lifetime,
//! which keeps firing order and schedule order identical.

use crate::domain::NotificationCard;
use std::collections::VecDeque;

/// Lifetime of a notification card, in seconds.
pub const NOTIFICATION_TTL_SECS: f64 = 5.0;

/// Ordered stack of visible notification cards.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    cards: Vec<NotificationCard>,
    expiry: ExpiryQueue,
    last_issued: i64,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unique, strictly increasing identifier derived from the current time.
    pub fn next_id(&mut self, now_millis: i64) -> String {
        let id = now_millis.max(self.last_issued.saturating_add(1));
        self.last_issued = id;
        id.to_string()
    }

    /// Appends a card to the tail without scheduling its removal.
    pub fn add(&mut self, card: NotificationCard) {
        tracing::debug!(id = %card.id, kind = ?card.kind, message = %card.message, "notification added");
        self.cards.push(card);
    }

    /// Appends a card and records its expiry slot.
    ///
    /// The caller must arm one timer of [`NOTIFICATION_TTL_SECS`] per call.
    pub fn push(&mut self, card: NotificationCard) {
        self.expiry.schedule(card.id.clone());
        self.add(card);
    }

    /// Removes the card with the given identifier. Idempotent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        let removed = self.cards.len() != before;
        tracing::debug!(id, removed, "notification removal");
        removed
    }

    /// Handles one timer firing: removes the oldest scheduled card if it is
    /// still visible. Returns the identifier that expired.
    pub fn expire_next(&mut self) -> Option<String> {
        let id = self.expiry.pop()?;
        self.remove(&id);
        Some(id)
    }

    /// Most recently added card still on screen.
    #[must_use]
    pub fn latest(&self) -> Option<&NotificationCard> {
        self.cards.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NotificationCard> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of expiry slots still waiting on a timer.
    #[must_use]
    pub fn pending_expiries(&self) -> usize {
        self.expiry.len()
    }
}

/// FIFO of notification identifiers awaiting their one-shot timer.
#[derive(Debug, Clone, Default)]
pub struct ExpiryQueue {
    pending: VecDeque<String>,
}

impl ExpiryQueue {
    pub fn schedule(&mut self, id: String) {
        self.pending.push_back(id);
    }

    pub fn pop(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_within_one_millisecond() {
        let mut queue = NotificationQueue::new();
        let a = queue.next_id(1_700_000_000_000);
        let b = queue.next_id(1_700_000_000_000);
        assert_ne!(a, b);
        assert_eq!(b, "1700000000001");
    }

    #[test]
    fn cards_keep_insertion_order() {
        let mut queue = NotificationQueue::new();
        queue.push(NotificationCard::success("1".into(), "User added."));
        queue.push(NotificationCard::error("2".into(), "boom"));

        let messages: Vec<_> = queue.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["User added.", "boom"]);
        assert_eq!(queue.latest().map(|c| c.id.as_str()), Some("2"));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut queue = NotificationQueue::new();
        queue.push(NotificationCard::success("1".into(), "User added."));

        assert!(queue.remove("1"));
        assert!(!queue.remove("1"));
        assert!(queue.is_empty());
    }

    #[test]
    fn expiry_after_manual_dismissal_is_harmless() {
        let mut queue = NotificationQueue::new();
        queue.push(NotificationCard::success("1".into(), "User added."));
        queue.push(NotificationCard::success("2".into(), "User updated."));

        queue.remove("1");
        assert_eq!(queue.expire_next().as_deref(), Some("1"));
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.expire_next().as_deref(), Some("2"));
        assert!(queue.is_empty());
        assert_eq!(queue.expire_next(), None);
    }

    #[test]
    fn add_does_not_schedule_expiry() {
        let mut queue = NotificationQueue::new();
        queue.add(NotificationCard::success("1".into(), "pinned"));
        assert_eq!(queue.pending_expiries(), 0);
        assert_eq!(queue.expire_next(), None);
        assert_eq!(queue.len(), 1);
    }
}
