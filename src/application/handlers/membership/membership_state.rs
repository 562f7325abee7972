//! MembershipState - the signed-in client's membership tier.
//!
//! The tier lives in memory for cheap reads and is mirrored to the
//! key-value store under [`TIER_STORAGE_KEY`]. Every change is written
//! first; the in-memory tier only moves once the write succeeded, so a
//! failed write never leaves the two disagreeing.

use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;

use super::MembershipError;
use crate::domain::membership::{MembershipTier, TIER_STORAGE_KEY};
use crate::ports::{KeyValueStore, StorageError};

/// Shared membership tier, persisted through a `KeyValueStore`.
pub struct MembershipState {
    store: Arc<dyn KeyValueStore>,
    tier: RwLock<MembershipTier>,
    /// Serializes writes so the stored and in-memory tier change together.
    write_lock: Mutex<()>,
}

impl MembershipState {
    /// Restores the tier from the store.
    ///
    /// A missing or unrecognised value yields `Free`. A store that cannot be
    /// read is an error.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let stored = store.get(TIER_STORAGE_KEY).await?;
        let tier = MembershipTier::from_persisted(stored.as_deref());

        tracing::debug!(tier = tier.as_str(), "Restored membership tier");

        Ok(Self {
            store,
            tier: RwLock::new(tier),
            write_lock: Mutex::new(()),
        })
    }

    pub fn tier(&self) -> MembershipTier {
        *self
            .tier
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn is_paid_member(&self) -> bool {
        self.tier().is_paid()
    }

    /// Sets the tier to `member`. Idempotent.
    pub async fn upgrade_to_member(&self) -> Result<(), MembershipError> {
        self.set_tier(MembershipTier::Member).await
    }

    /// Sets the tier to `creator`. Idempotent.
    pub async fn upgrade_to_creator(&self) -> Result<(), MembershipError> {
        self.set_tier(MembershipTier::Creator).await
    }

    /// Drops back to `free`.
    pub async fn cancel_membership(&self) -> Result<(), MembershipError> {
        self.set_tier(MembershipTier::Free).await
    }

    pub(crate) async fn set_tier(&self, tier: MembershipTier) -> Result<(), MembershipError> {
        let _write = self.write_lock.lock().await;

        self.store
            .set(TIER_STORAGE_KEY, tier.as_str())
            .await
            .map_err(|e| {
                tracing::error!(tier = tier.as_str(), error = %e, "Failed to persist membership tier");
                MembershipError::Persistence(e)
            })?;

        let previous = {
            let mut current = self
                .tier
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            std::mem::replace(&mut *current, tier)
        };

        tracing::info!(
            from = previous.as_str(),
            to = tier.as_str(),
            "Membership tier updated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use async_trait::async_trait;

    /// Store whose writes always fail.
    struct ReadOnlyStore(InMemoryKeyValueStore);

    #[async_trait]
    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key).await
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io("read-only".into()))
        }

        async fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Io("read-only".into()))
        }
    }

    async fn state_with(stored: Option<&str>) -> (MembershipState, InMemoryKeyValueStore) {
        let store = match stored {
            Some(value) => InMemoryKeyValueStore::with_entries([(TIER_STORAGE_KEY, value)]),
            None => InMemoryKeyValueStore::new(),
        };
        let state = MembershipState::load(Arc::new(store.clone())).await.unwrap();
        (state, store)
    }

    #[tokio::test]
    async fn fresh_client_is_free() {
        let (state, _) = state_with(None).await;
        assert_eq!(state.tier(), MembershipTier::Free);
        assert!(!state.is_paid_member());
    }

    #[tokio::test]
    async fn persisted_tier_is_restored() {
        let (state, _) = state_with(Some("creator")).await;
        assert_eq!(state.tier(), MembershipTier::Creator);
        assert!(state.is_paid_member());
    }

    #[tokio::test]
    async fn unknown_persisted_value_is_free() {
        let (state, _) = state_with(Some("platinum")).await;
        assert_eq!(state.tier(), MembershipTier::Free);
    }

    #[tokio::test]
    async fn upgrade_persists_before_returning() {
        let (state, store) = state_with(None).await;

        state.upgrade_to_member().await.unwrap();

        assert_eq!(state.tier(), MembershipTier::Member);
        assert_eq!(
            store.get(TIER_STORAGE_KEY).await.unwrap().as_deref(),
            Some("member")
        );
    }

    #[tokio::test]
    async fn upgrades_are_idempotent() {
        let (state, store) = state_with(None).await;

        state.upgrade_to_creator().await.unwrap();
        state.upgrade_to_creator().await.unwrap();

        assert_eq!(state.tier(), MembershipTier::Creator);
        assert_eq!(
            store.get(TIER_STORAGE_KEY).await.unwrap().as_deref(),
            Some("creator")
        );
    }

    #[tokio::test]
    async fn cancel_returns_to_free() {
        let (state, store) = state_with(Some("member")).await;

        state.cancel_membership().await.unwrap();

        assert_eq!(state.tier(), MembershipTier::Free);
        assert_eq!(
            store.get(TIER_STORAGE_KEY).await.unwrap().as_deref(),
            Some("free")
        );
    }

    #[tokio::test]
    async fn new_state_over_same_store_sees_upgrade() {
        let store = InMemoryKeyValueStore::new();
        let first = MembershipState::load(Arc::new(store.clone())).await.unwrap();
        first.upgrade_to_member().await.unwrap();

        let second = MembershipState::load(Arc::new(store)).await.unwrap();
        assert_eq!(second.tier(), MembershipTier::Member);
    }

    #[tokio::test]
    async fn failed_write_leaves_tier_unchanged() {
        let store = ReadOnlyStore(InMemoryKeyValueStore::new());
        let state = MembershipState::load(Arc::new(store)).await.unwrap();

        let result = state.upgrade_to_member().await;

        assert!(matches!(result, Err(MembershipError::Persistence(_))));
        assert_eq!(state.tier(), MembershipTier::Free);
    }
}
