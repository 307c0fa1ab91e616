use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// User record in the database. The password is stored only as an argon2
/// hash and never leaves the server.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password_hash: String,
}

impl User {
    /// Find a user by email address, the login principal.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email_address, password_hash
            FROM users
            WHERE email_address = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with an already-hashed password.
    pub async fn create(
        db: &PgPool,
        first_name: &str,
        last_name: &str,
        email_address: &str,
        password_hash: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email_address, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email_address, password_hash
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email_address)
        .bind(password_hash)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
