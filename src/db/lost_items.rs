use sqlx::PgPool;

use crate::models::{LostItemReport, NewLostItem};

pub async fn insert(pool: &PgPool, item: &NewLostItem) -> Result<LostItemReport, sqlx::Error> {
    sqlx::query_as::<_, LostItemReport>(
        "INSERT INTO lost_items (name, description, location, extras)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&item.name)
    .bind(&item.description)
    .bind(&item.location)
    .bind(&item.extras)
    .fetch_one(pool)
    .await
}

pub async fn list_newest_first(pool: &PgPool) -> Result<Vec<LostItemReport>, sqlx::Error> {
    sqlx::query_as::<_, LostItemReport>(
        "SELECT * FROM lost_items ORDER BY reported_at DESC, seq DESC",
    )
    .fetch_all(pool)
    .await
}
