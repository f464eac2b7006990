use sqlx::{Pool, Postgres};
use vitalis_core::{Otp, VerificationStore, VerificationStoreError};

#[derive(Clone)]
pub struct PostgresVerificationStore {
    pool: sqlx::PgPool,
}

impl PostgresVerificationStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresVerificationStore { pool }
    }
}

#[async_trait::async_trait]
impl VerificationStore for PostgresVerificationStore {
    #[tracing::instrument(name = "Adding verification row to PostgreSQL", skip_all)]
    async fn create_for_user(
        &self,
        user_id: i64,
        otp: &Otp,
    ) -> Result<(), VerificationStoreError> {
        sqlx::query(
            r#"
                INSERT INTO verifications (user_id, otp)
                VALUES ($1, $2)
            "#,
        )
        .bind(user_id)
        .bind(otp.code())
        .execute(&self.pool)
        .await
        .map_err(|e| VerificationStoreError::UnexpectedError(e.to_string()))?;

        Ok(())
    }

    #[tracing::instrument(name = "Rotating verification codes in PostgreSQL", skip_all)]
    async fn update_all_for_user(
        &self,
        user_id: i64,
        otp: &Otp,
    ) -> Result<(), VerificationStoreError> {
        // zero affected rows is fine, the caller does not track row counts
        sqlx::query(
            r#"
                UPDATE verifications
                SET otp = $2, updated_at = now()
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(otp.code())
        .execute(&self.pool)
        .await
        .map_err(|e| VerificationStoreError::UnexpectedError(e.to_string()))?;

        Ok(())
    }
}
