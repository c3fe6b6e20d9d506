//! Insertion-ordered string set.

use std::collections::HashSet;

/// Collects strings once each, remembering the order they were first seen.
///
/// Iteration order of the backing `HashSet` never leaks out: callers only
/// ever observe the `order` list.
#[derive(Debug, Default, Clone)]
pub struct UniqueList {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl UniqueList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `s` unless it is empty or already present. Returns true when added.
    pub fn push(&mut self, s: impl Into<String>) -> bool {
        let s = s.into();
        if s.is_empty() || self.seen.contains(&s) {
            return false;
        }
        self.seen.insert(s.clone());
        self.order.push(s);
        true
    }

    pub fn extend<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            self.push(item);
        }
    }

    pub fn contains(&self, s: &str) -> bool {
        self.seen.contains(s)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let mut list = UniqueList::new();
        list.extend(["b", "a", "b", "", "c", "a"]);
        assert_eq!(list.into_vec(), vec!["b", "a", "c"]);
    }

    #[test]
    fn push_reports_insertion() {
        let mut list = UniqueList::new();
        assert!(list.push("x"));
        assert!(!list.push("x"));
        assert!(list.contains("x"));
        assert_eq!(list.len(), 1);
    }
}
