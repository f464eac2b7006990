use chrono::{DateTime, NaiveDate, Utc};
use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres};
use vitalis_core::{
    AuthProvider, Email, NationalId, NewUser, User, UserPatch, UserStore, UserStoreError,
};

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    national_id: Option<String>,
    email: String,
    date_of_birth: Option<NaiveDate>,
    gender: Option<String>,
    agreement_accepted: bool,
    password_hash: Option<String>,
    photo_url: Option<String>,
    phone_code: Option<String>,
    phone_number: Option<String>,
    push_token: Option<String>,
    federated_id: Option<String>,
    auth_provider: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::try_from(Secret::from(row.email))
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let national_id = row
            .national_id
            .map(NationalId::try_from)
            .transpose()
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let auth_provider = AuthProvider::try_from(row.auth_provider.as_str())
            .map_err(UserStoreError::UnexpectedError)?;

        Ok(User {
            id: row.id,
            name: row.name,
            national_id,
            email,
            date_of_birth: row.date_of_birth,
            gender: row.gender,
            agreement_accepted: row.agreement_accepted,
            password_hash: row.password_hash.map(Secret::from),
            photo_url: row.photo_url,
            phone_code: row.phone_code,
            phone_number: row.phone_number,
            push_token: row.push_token,
            federated_id: row.federated_id,
            auth_provider,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const USER_COLUMNS: &str = "id, name, national_id, email, date_of_birth, gender, \
     agreement_accepted, password_hash, photo_url, phone_code, phone_number, \
     push_token, federated_id, auth_provider, created_at, updated_at";

async fn fetch_one_by(
    pool: &sqlx::PgPool,
    column: &str,
    value: &str,
) -> Result<Option<User>, UserStoreError> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = $1");
    let row: Option<UserRow> = sqlx::query_as(&sql)
        .bind(value)
        .fetch_optional(pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

    row.map(User::try_from).transpose()
}

fn map_insert_error(e: sqlx::Error) -> UserStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return UserStoreError::DuplicateUser;
        }
    }
    UserStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, UserStoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    #[tracing::instrument(name = "Retrieving user by national id from PostgreSQL", skip_all)]
    async fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<Option<User>, UserStoreError> {
        fetch_one_by(&self.pool, "national_id", national_id.as_str()).await
    }

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        fetch_one_by(&self.pool, "email", email.as_ref().expose_secret()).await
    }

    #[tracing::instrument(name = "Retrieving user by federated id from PostgreSQL", skip_all)]
    async fn find_by_federated_id(
        &self,
        federated_id: &str,
    ) -> Result<Option<User>, UserStoreError> {
        fetch_one_by(&self.pool, "federated_id", federated_id).await
    }

    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn create(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let sql = format!(
            r#"
                INSERT INTO users (name, national_id, email, date_of_birth, gender,
                    agreement_accepted, password_hash, photo_url, phone_code,
                    phone_number, push_token, federated_id, auth_provider)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                RETURNING {USER_COLUMNS}
            "#
        );
        let row: UserRow = sqlx::query_as(&sql)
            .bind(&new_user.name)
            .bind(new_user.national_id.as_ref().map(|n| n.as_str()))
            .bind(new_user.email.as_ref().expose_secret())
            .bind(new_user.date_of_birth)
            .bind(&new_user.gender)
            .bind(new_user.agreement_accepted)
            .bind(new_user.password_hash.as_ref().map(|h| h.expose_secret()))
            .bind(&new_user.photo_url)
            .bind(&new_user.phone_code)
            .bind(&new_user.phone_number)
            .bind(&new_user.push_token)
            .bind(&new_user.federated_id)
            .bind(new_user.auth_provider.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_insert_error)?;

        User::try_from(row)
    }

    #[tracing::instrument(name = "Updating user in PostgreSQL", skip_all)]
    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, UserStoreError> {
        let sql = format!(
            r#"
                UPDATE users
                SET name = COALESCE($2, name),
                    photo_url = COALESCE($3, photo_url),
                    federated_id = COALESCE($4, federated_id),
                    auth_provider = COALESCE($5, auth_provider),
                    updated_at = now()
                WHERE id = $1
                RETURNING {USER_COLUMNS}
            "#
        );
        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.photo_url)
            .bind(&patch.federated_id)
            .bind(patch.auth_provider.map(|p| p.as_str()))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_insert_error)?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        User::try_from(row)
    }
}
