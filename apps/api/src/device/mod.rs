//! Simulated wearable-device provisioning.
//!
//! A request moves `Pending -> Fulfilled` after a fixed delay; there is no
//! real device on the other end, no failure state, and no cancellation of
//! the timer. Discarding a request while its timer runs makes the eventual
//! fulfillment write a no-op, so a departing client never observes a
//! transition on a request it dropped.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceRequestStatus {
    Pending,
    Fulfilled,
}

/// One provisioning request. "Idle" is the absence of a request; the store
/// never holds an idle record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRequest {
    pub id: Uuid,
    pub status: DeviceRequestStatus,
    /// Impulse categories the device should support, as submitted.
    pub category_ids: Vec<String>,
    pub requested_at: DateTime<Utc>,
    pub fulfilled_at: Option<DateTime<Utc>>,
}

/// In-memory store of provisioning requests. Nothing survives a restart.
#[derive(Clone, Default)]
pub struct DeviceRequestStore {
    inner: Arc<RwLock<HashMap<Uuid, DeviceRequest>>>,
}

impl DeviceRequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new request in `Pending` state.
    pub async fn create(&self, category_ids: Vec<String>) -> DeviceRequest {
        let request = DeviceRequest {
            id: Uuid::new_v4(),
            status: DeviceRequestStatus::Pending,
            category_ids,
            requested_at: Utc::now(),
            fulfilled_at: None,
        };
        self.inner
            .write()
            .await
            .insert(request.id, request.clone());
        request
    }

    pub async fn get(&self, id: Uuid) -> Option<DeviceRequest> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Marks a pending request fulfilled. A no-op when the request was
    /// discarded while the timer ran, or was already fulfilled.
    pub async fn fulfill(&self, id: Uuid) -> bool {
        let mut requests = self.inner.write().await;
        match requests.get_mut(&id) {
            Some(request) if request.status == DeviceRequestStatus::Pending => {
                request.status = DeviceRequestStatus::Fulfilled;
                request.fulfilled_at = Some(Utc::now());
                true
            }
            _ => {
                debug!("Fulfillment for {id} dropped: request gone or already fulfilled");
                false
            }
        }
    }

    /// Removes a request regardless of state. Returns whether one existed.
    pub async fn discard(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    /// Spawns the timer that fulfills `id` after `delay`.
    pub fn schedule_fulfillment(&self, id: Uuid, delay: Duration) {
        let store = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            store.fulfill(id).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_request_starts_pending() {
        let store = DeviceRequestStore::new();
        let created = store.create(vec!["gambling".to_string()]).await;
        assert_eq!(created.status, DeviceRequestStatus::Pending);
        assert!(created.fulfilled_at.is_none());

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched.status, DeviceRequestStatus::Pending);
        assert_eq!(fetched.category_ids, vec!["gambling".to_string()]);
    }

    #[tokio::test]
    async fn test_fulfill_marks_request_and_stamps_time() {
        let store = DeviceRequestStore::new();
        let created = store.create(vec![]).await;
        assert!(store.fulfill(created.id).await);

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched.status, DeviceRequestStatus::Fulfilled);
        assert!(fetched.fulfilled_at.is_some());
    }

    #[tokio::test]
    async fn test_fulfill_is_not_reapplied() {
        let store = DeviceRequestStore::new();
        let created = store.create(vec![]).await;
        assert!(store.fulfill(created.id).await);
        assert!(!store.fulfill(created.id).await);
    }

    #[tokio::test]
    async fn test_fulfill_unknown_request_is_noop() {
        let store = DeviceRequestStore::new();
        assert!(!store.fulfill(Uuid::new_v4()).await);
    }

    #[tokio::test]
    async fn test_discard_then_fulfill_is_noop() {
        let store = DeviceRequestStore::new();
        let created = store.create(vec![]).await;
        assert!(store.discard(created.id).await);
        assert!(!store.fulfill(created.id).await);
        assert!(store.get(created.id).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_fulfillment_fires_after_delay() {
        let store = DeviceRequestStore::new();
        let created = store.create(vec![]).await;
        store.schedule_fulfillment(created.id, Duration::from_secs(2));

        // Before the delay elapses the request is still pending
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(
            store.get(created.id).await.unwrap().status,
            DeviceRequestStatus::Pending
        );

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(
            store.get(created.id).await.unwrap().status,
            DeviceRequestStatus::Fulfilled
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_fulfillment_after_discard_changes_nothing() {
        let store = DeviceRequestStore::new();
        let created = store.create(vec![]).await;
        store.schedule_fulfillment(created.id, Duration::from_secs(2));
        assert!(store.discard(created.id).await);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(store.get(created.id).await.is_none());
    }
}
