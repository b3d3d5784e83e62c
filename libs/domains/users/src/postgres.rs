use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, DbBackend, DbErr, FromQueryResult, SqlErr, Statement,
};

use crate::{
    error::{UserError, UserResult},
    models::{NewUser, User},
    repository::UserRepository,
};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
        }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: NewUser) -> UserResult<User> {
        let sql = r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash
        "#;

        let row = UserRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [user.email.clone().into(), user.password_hash.into()],
        ))
        .one(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                UserError::DuplicateEmail(user.email.clone())
            } else {
                UserError::from(e)
            }
        })?
        .ok_or_else(|| UserError::Database("INSERT returned no row".to_string()))?;

        tracing::info!(user_id = row.id, email = %row.email, "Created user");
        Ok(row.into())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let sql = "SELECT id, email, password_hash FROM users WHERE email = $1";

        let row = UserRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [email.into()],
        ))
        .one(&self.db)
        .await?;

        Ok(row.map(Into::into))
    }
}
