use std::sync::{Mutex, MutexGuard};
use shared::store::DesignStore;
use tracing::error;
use crate::error::ApiError;

pub type SharedStore = Mutex<DesignStore>;

/// Every read and every retract-then-increment pair runs under this lock.
pub fn lock(store: &SharedStore) -> Result<MutexGuard<'_, DesignStore>, ApiError> {
    store.lock().map_err(|e| {
        error!("Failed to acquire design store lock: {}", e);
        ApiError::LockFailed
    })
}
