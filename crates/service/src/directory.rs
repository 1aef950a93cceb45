use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// One restaurant entry. `id` is intended to be unique but the directory
/// never enforces it; duplicates are stored as-is.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
}

/// Create input. Both fields are optional on the wire; a missing field
/// takes its default (`0` / `""`) rather than failing the request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestaurantInput {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Rename input for PUT; only the display name can change.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenameInput {
    #[serde(default)]
    pub name: String,
}

/// In-memory store owning the ordered restaurant collection for the
/// lifetime of the process.
///
/// Every operation takes the collection lock, so each appears atomic to
/// observers. Insertion order is preserved modulo removals.
pub struct RestaurantDirectory {
    inner: RwLock<Vec<Restaurant>>,
}

impl RestaurantDirectory {
    /// Empty directory.
    pub fn new() -> Arc<Self> {
        Arc::new(Self { inner: RwLock::new(Vec::new()) })
    }

    /// Directory seeded with the five fixed records the service starts with.
    pub fn with_seed() -> Arc<Self> {
        let seed = vec![
            Restaurant { id: 1, name: "The Gourmet Kitchen".into() },
            Restaurant { id: 2, name: "Pasta Palace".into() },
            Restaurant { id: 3, name: "Sushi Central".into() },
            Restaurant { id: 4, name: "Burger Haven".into() },
            Restaurant { id: 5, name: "Taco Town".into() },
        ];
        Arc::new(Self { inner: RwLock::new(seed) })
    }

    /// Snapshot of all records in current order.
    pub async fn list(&self) -> Vec<Restaurant> {
        self.inner.read().await.clone()
    }

    /// Current record count.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Append a record exactly as given. No uniqueness check on `id`.
    pub async fn create(&self, input: RestaurantInput) -> Restaurant {
        let rec = Restaurant { id: input.id, name: input.name };
        let mut records = self.inner.write().await;
        records.push(rec.clone());
        rec
    }

    /// Overwrite the name of the first record matching `id`, keeping its
    /// position and id. `NotFound` when nothing matches.
    pub async fn rename(&self, id: i64, name: String) -> Result<Restaurant, ServiceError> {
        let mut records = self.inner.write().await;
        let rec = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ServiceError::not_found("restaurant"))?;
        rec.name = name;
        Ok(rec.clone())
    }

    /// Remove every record matching `id` and return how many were removed.
    /// Zero matches is a successful no-op.
    pub async fn remove(&self, id: i64) -> usize {
        let mut records = self.inner.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        before - records.len()
    }
}
