use sqlx::PgPool;
use uuid::Uuid;

use super::jwt::Role;
use super::repo_types::User;

impl User {
    /// Find a user by email. Callers lowercase the input first, which gives
    /// case-insensitive matching since stored emails are lowercased.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, phone, role, addresses, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, phone, role, addresses, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with hashed password. Role defaults to `user`.
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
        phone: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, phone, role, addresses, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(phone)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Out-of-band role elevation used by the `make-admin` binary.
    pub async fn promote_to_admin(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET role = $1
            WHERE email = $2
            RETURNING id, name, email, password_hash, phone, role, addresses, created_at
            "#,
        )
        .bind(Role::Admin)
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }
}
