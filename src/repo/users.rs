//! User persistence.
//!
//! Registration hashes the plaintext before anything touches the database;
//! the uniqueness of `email` is enforced by the store's constraint rather
//! than a read-then-write check.

use crate::auth::hash_password;
use crate::error::AppError;
use crate::models::{CreateUser, User, UserRow};
use sqlx::PgPool;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
    bcrypt_cost: u32,
}

impl UserRepository {
    pub fn new(pool: PgPool, bcrypt_cost: u32) -> Self {
        Self { pool, bcrypt_cost }
    }

    /// Registers a new user. The stored record carries the bcrypt hash in
    /// place of the plaintext; the returned `User` carries neither. A
    /// unique violation on `email` surfaces as `Conflict` via the
    /// `From<sqlx::Error>` mapping.
    pub async fn register(&self, input: CreateUser) -> Result<User, AppError> {
        let password_hash = hash_password(&input.password, self.bcrypt_cost)?;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) \
             RETURNING id, email, password_hash, created_at",
        )
        .bind(&input.email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(User::from(row))
    }

    /// Looks up the full credential row for an email, for password
    /// verification. `None` when no such user exists.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
