//! Contact message repository for database operations.

use sqlx::PgPool;

use crate::entities::ContactMessageEntity;
use crate::metrics::QueryTimer;

/// Fields for a new contact message.
#[derive(Debug, Clone)]
pub struct CreateContactMessageInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Repository for contact-message database operations. Messages are
/// append-only; there is no update path.
#[derive(Clone)]
pub struct ContactMessageRepository {
    pool: PgPool,
}

impl ContactMessageRepository {
    /// Creates a new ContactMessageRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Messages newest first, up to `limit`.
    pub async fn list_all(&self, limit: i64) -> Result<Vec<ContactMessageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_contact_messages");
        let result = sqlx::query_as::<_, ContactMessageEntity>(
            r#"
            SELECT id, name, email, subject, message, created_at
            FROM contact_messages
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a new message.
    pub async fn create(
        &self,
        input: &CreateContactMessageInput,
    ) -> Result<ContactMessageEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_contact_message");
        let result = sqlx::query_as::<_, ContactMessageEntity>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, subject, message, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.subject)
        .bind(&input.message)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
