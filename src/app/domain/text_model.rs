//! Length-capped snippet buffer with a live character count.
//!
//! Lengths and offsets are measured in Unicode scalar values (`char`), so
//! `"é"` and `"🦀"` each count as one character toward the cap.

use std::ops::Range;

use tracing::debug;

use crate::app::infrastructure::error::{AppError, Result};

/// Maximum number of characters a snippet may hold.
pub const MAX_CHARS: usize = 140;

/// Published to subscribers after every mutation of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountEvent {
    pub count: usize,
    pub remaining: usize,
    /// Part of the input was discarded to stay within the cap.
    pub truncated: bool,
}

/// Result of an edit. Input that did not fit is reported in `dropped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    /// Buffer length after the edit.
    pub count: usize,
    /// Characters of the input that were discarded.
    pub dropped: usize,
    /// Character offset just past the accepted input.
    pub cursor: usize,
}

impl EditOutcome {
    pub fn truncated(&self) -> bool {
        self.dropped > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type CountCallback = Box<dyn FnMut(&CountEvent)>;

pub struct ConstrainedTextModel {
    text: String,
    count: usize,
    subscribers: Vec<(SubscriptionId, CountCallback)>,
    next_subscription: u64,
}

impl Default for ConstrainedTextModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstrainedTextModel {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            count: 0,
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current length in characters. Always within `0..=MAX_CHARS`.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn remaining(&self) -> usize {
        MAX_CHARS - self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Register a callback that runs synchronously after every mutation.
    /// Callbacks run in subscription order.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CountEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the handle was unknown (already removed).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Replace the whole buffer, keeping only the first `MAX_CHARS` characters.
    pub fn set_text(&mut self, candidate: &str) -> EditOutcome {
        let (kept, dropped) = take_chars(candidate, MAX_CHARS);
        self.text.clear();
        self.text.push_str(kept);
        self.count = kept.chars().count();

        let outcome = EditOutcome {
            count: self.count,
            dropped,
            cursor: self.count,
        };
        self.publish(&outcome);
        outcome
    }

    pub fn clear(&mut self) -> EditOutcome {
        self.set_text("")
    }

    /// Insert at a character offset. Only the prefix of `text` that fits is kept.
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<EditOutcome> {
        self.replace(offset..offset, text)
    }

    pub fn delete(&mut self, range: Range<usize>) -> Result<EditOutcome> {
        self.replace(range, "")
    }

    /// Replace a character range with `text`, accepting as much of `text` as
    /// the cap allows once the range is removed.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> Result<EditOutcome> {
        if range.start > range.end || range.end > self.count {
            return Err(AppError::EditRange {
                start: range.start,
                end: range.end,
                len: self.count,
            });
        }

        let removed = range.end - range.start;
        let room = MAX_CHARS - (self.count - removed);
        let (accepted, dropped) = take_chars(text, room);
        let accepted_chars = accepted.chars().count();

        let start = byte_offset(&self.text, range.start);
        let end = byte_offset(&self.text, range.end);
        self.text.replace_range(start..end, accepted);
        self.count = self.count - removed + accepted_chars;

        let outcome = EditOutcome {
            count: self.count,
            dropped,
            cursor: range.start + accepted_chars,
        };
        self.publish(&outcome);
        Ok(outcome)
    }

    /// Reconcile the buffer with a full candidate text produced by an editor
    /// widget. The difference is applied as a single `replace`, so characters
    /// typed past the cap are the ones discarded, wherever the cursor is.
    pub fn apply_edit(&mut self, candidate: &str) -> EditOutcome {
        if candidate == self.text {
            return EditOutcome {
                count: self.count,
                dropped: 0,
                cursor: self.count,
            };
        }

        let old_len = self.count;
        let new_len = candidate.chars().count();

        let prefix = self
            .text
            .chars()
            .zip(candidate.chars())
            .take_while(|(a, b)| a == b)
            .count();
        let max_suffix = old_len.min(new_len) - prefix;
        let suffix = self
            .text
            .chars()
            .rev()
            .zip(candidate.chars().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();

        let inserted_start = byte_offset(candidate, prefix);
        let inserted_end = byte_offset(candidate, new_len - suffix);
        let inserted = &candidate[inserted_start..inserted_end];

        match self.replace(prefix..old_len - suffix, inserted) {
            Ok(outcome) => outcome,
            Err(_) => self.set_text(candidate),
        }
    }

    fn publish(&mut self, outcome: &EditOutcome) {
        if outcome.truncated() {
            debug!(dropped = outcome.dropped, "input truncated at {} characters", MAX_CHARS);
        }
        let event = CountEvent {
            count: self.count,
            remaining: MAX_CHARS - self.count,
            truncated: outcome.truncated(),
        };
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&event);
        }
    }
}

/// Split off at most `limit` characters, returning the kept prefix and the
/// number of characters left over.
fn take_chars(s: &str, limit: usize) -> (&str, usize) {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => (&s[..idx], s[idx..].chars().count()),
        None => (s, 0),
    }
}

fn byte_offset(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}
