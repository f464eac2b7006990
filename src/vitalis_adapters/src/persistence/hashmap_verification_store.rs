use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use vitalis_core::{Otp, Verification, VerificationStore, VerificationStoreError};

/// In-memory verification store, keyed by user id so the one-row-per-user
/// overwrite semantics fall out of the map itself.
#[derive(Default, Clone)]
pub struct HashMapVerificationStore {
    rows: Arc<RwLock<HashMap<i64, Verification>>>,
}

impl HashMapVerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current_otp(&self, user_id: i64) -> Option<String> {
        self.rows.read().await.get(&user_id).map(|v| v.otp.clone())
    }
}

#[async_trait::async_trait]
impl VerificationStore for HashMapVerificationStore {
    async fn create_for_user(
        &self,
        user_id: i64,
        otp: &Otp,
    ) -> Result<(), VerificationStoreError> {
        let now = Utc::now();
        self.rows.write().await.insert(
            user_id,
            Verification {
                otp: otp.code(),
                user_id,
                issued_at: now,
                updated_at: now,
            },
        );
        Ok(())
    }

    async fn update_all_for_user(
        &self,
        user_id: i64,
        otp: &Otp,
    ) -> Result<(), VerificationStoreError> {
        // zero matching rows is a silent no-op, like a relational update-many
        if let Some(row) = self.rows.write().await.get_mut(&user_id) {
            row.otp = otp.code();
            row.updated_at = Utc::now();
        }
        Ok(())
    }
}
