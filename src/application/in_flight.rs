//! In-flight action registry.
//!
//! Tracks which `(action, resource)` pairs are currently running so that a
//! second click on the same button for the same post is rejected instead of
//! sending a duplicate request.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

type Key = (&'static str, String);

/// Registry of running actions. Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct InFlightActions {
    running: Arc<Mutex<HashSet<Key>>>,
}

impl InFlightActions {
    pub fn new() -> Self {
        Self::default()
    }

    fn running(&self) -> MutexGuard<'_, HashSet<Key>> {
        self.running
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Marks `action` on `resource` as running.
    ///
    /// Returns `None` when the same action on the same resource is already
    /// running. The returned guard releases the slot when dropped.
    pub fn begin(&self, action: &'static str, resource: impl Into<String>) -> Option<InFlightGuard> {
        let key = (action, resource.into());
        if !self.running().insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard {
            registry: self.clone(),
            key,
        })
    }

    pub fn is_running(&self, action: &'static str, resource: &str) -> bool {
        self.running()
            .iter()
            .any(|(a, r)| *a == action && r == resource)
    }

    pub fn len(&self) -> usize {
        self.running().len()
    }

    pub fn is_empty(&self) -> bool {
        self.running().is_empty()
    }
}

/// Releases its `(action, resource)` slot on drop.
#[derive(Debug)]
pub struct InFlightGuard {
    registry: InFlightActions,
    key: Key,
}

impl InFlightGuard {
    pub fn action(&self) -> &'static str {
        self.key.0
    }

    pub fn resource(&self) -> &str {
        &self.key.1
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.registry.running().remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_for_same_pair_is_rejected() {
        let actions = InFlightActions::new();
        let guard = actions.begin("like", "p1");
        assert!(guard.is_some());
        assert!(actions.begin("like", "p1").is_none());
    }

    #[test]
    fn different_action_or_resource_is_allowed() {
        let actions = InFlightActions::new();
        let _like = actions.begin("like", "p1").unwrap();
        assert!(actions.begin("delete", "p1").is_some());
        assert!(actions.begin("like", "p2").is_some());
    }

    #[test]
    fn dropping_guard_releases_slot() {
        let actions = InFlightActions::new();
        {
            let guard = actions.begin("delete", "p1").unwrap();
            assert_eq!(guard.action(), "delete");
            assert_eq!(guard.resource(), "p1");
            assert!(actions.is_running("delete", "p1"));
        }
        assert!(actions.is_empty());
        assert!(actions.begin("delete", "p1").is_some());
    }

    #[test]
    fn clones_share_the_registry() {
        let actions = InFlightActions::new();
        let shared = actions.clone();
        let _guard = actions.begin("publish", "doc").unwrap();
        assert!(shared.begin("publish", "doc").is_none());
        assert_eq!(shared.len(), 1);
    }
}
