//! Counted trigger events.
//!
//! Signals are a multiset, not a flag set: the same event name may be raised
//! several times before any tree looks at it, and each `consume` call burns
//! exactly one unit. This is what keeps one player click from triggering the
//! same reaction on two different actor trees unless the content re-raises it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A multiset of named trigger events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalBus {
    counts: HashMap<String, u32>,
}

impl SignalBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a signal, incrementing its count. Never fails.
    pub fn raise(&mut self, name: impl Into<String>) {
        *self.counts.entry(name.into()).or_insert(0) += 1;
    }

    /// Check whether at least one unit of the signal is pending.
    pub fn peek(&self, name: &str) -> bool {
        self.count(name) > 0
    }

    /// The number of pending units for a signal (0 for absent names).
    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Consume one unit of the signal.
    ///
    /// Returns `true` and decrements iff a unit was pending; the name is
    /// removed entirely when its count reaches zero. Returns `false` with no
    /// side effect otherwise.
    pub fn consume(&mut self, name: &str) -> bool {
        match self.counts.get_mut(name) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(name);
                true
            }
            None => false,
        }
    }

    /// Whether no signals are pending.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Remove all pending signals.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn raise_and_peek() {
        let mut bus = SignalBus::new();
        assert!(!bus.peek("alarm"));
        bus.raise("alarm");
        assert!(bus.peek("alarm"));
        assert_eq!(bus.count("alarm"), 1);
    }

    #[test]
    fn consume_is_at_most_once() {
        let mut bus = SignalBus::new();
        bus.raise("order_ale");
        assert!(bus.consume("order_ale"));
        assert!(!bus.consume("order_ale"));
        assert!(!bus.peek("order_ale"));
    }

    #[test]
    fn counts_accumulate() {
        let mut bus = SignalBus::new();
        bus.raise("tip_2");
        bus.raise("tip_2");
        bus.raise("tip_2");
        assert_eq!(bus.count("tip_2"), 3);
        assert!(bus.consume("tip_2"));
        assert_eq!(bus.count("tip_2"), 2);
    }

    #[test]
    fn consume_absent_has_no_effect() {
        let mut bus = SignalBus::new();
        assert!(!bus.consume("nothing"));
        assert!(bus.is_empty());
    }

    #[test]
    fn key_removed_at_zero() {
        let mut bus = SignalBus::new();
        bus.raise("theft");
        bus.consume("theft");
        assert!(bus.is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let mut bus = SignalBus::new();
        bus.raise("a");
        bus.raise("b");
        bus.clear();
        assert!(bus.is_empty());
    }

    proptest! {
        #[test]
        fn consume_succeeds_exactly_raise_count_times(raises in 0u32..20) {
            let mut bus = SignalBus::new();
            for _ in 0..raises {
                bus.raise("sig");
            }
            let mut consumed = 0;
            while bus.consume("sig") {
                consumed += 1;
            }
            prop_assert_eq!(consumed, raises);
            prop_assert!(!bus.peek("sig"));
        }
    }
}
