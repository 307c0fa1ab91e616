use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Course record. `user_id` references the owning user and is never
/// changed after creation.
#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

impl Course {
    /// All courses, newest first.
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Course>> {
        let rows = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, user_id, title, description, estimated_time, materials_needed
            FROM courses
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, user_id, title, description, estimated_time, materials_needed
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(course)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        title: &str,
        description: &str,
        estimated_time: Option<&str>,
        materials_needed: Option<&str>,
    ) -> anyhow::Result<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (user_id, title, description, estimated_time, materials_needed)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, description, estimated_time, materials_needed
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(estimated_time)
        .bind(materials_needed)
        .fetch_one(db)
        .await?;
        Ok(course)
    }

    /// Replaces the mutable columns; owner and id stay as created.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: &str,
        description: &str,
        estimated_time: Option<&str>,
        materials_needed: Option<&str>,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE courses
            SET title = $2, description = $3, estimated_time = $4, materials_needed = $5,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(estimated_time)
        .bind(materials_needed)
        .execute(db)
        .await?;
        Ok(())
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
