use sqlx::PgPool;
use tracing::debug;

use super::{Entity, Filter, Store, StoreError};

/// [`Store`] backed by a postgres connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn quoted(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| format!("\"{c}\"")).collect()
}

/// `$start, $start+1, ...` for `count` parameters.
fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn where_clause(filter: &Filter) -> String {
    match filter {
        Filter::Id(_) => "id = $1".to_string(),
        Filter::Columns(conditions) => conditions
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("\"{}\" = ${}", column, i + 1))
            .collect::<Vec<_>>()
            .join(" AND "),
    }
}

impl Store for PgStore {
    async fn sync<E: Entity>(&self) -> Result<(), StoreError> {
        let columns = quoted(E::COLUMNS)
            .into_iter()
            .map(|c| format!("{c} TEXT"))
            .collect::<Vec<_>>()
            .join(", ");

        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {} (id BIGSERIAL PRIMARY KEY, {})",
            E::TABLE,
            columns
        ))
        .execute(&self.pool)
        .await?;

        // tables created by an older build may lack newer columns
        for column in quoted(E::COLUMNS) {
            sqlx::query(&format!(
                "ALTER TABLE {} ADD COLUMN IF NOT EXISTS {} TEXT",
                E::TABLE,
                column
            ))
            .execute(&self.pool)
            .await?;
        }

        debug!(table = E::TABLE, "Table synchronized");
        Ok(())
    }

    async fn create<E: Entity>(&self, draft: &E::Draft) -> Result<(), StoreError> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            quoted(E::COLUMNS).join(", "),
            placeholders(1, E::COLUMNS.len())
        );

        let mut query = sqlx::query(&sql);
        for value in E::values(draft) {
            query = query.bind(value);
        }

        query.execute(&self.pool).await?;
        Ok(())
    }

    async fn find_all<E: Entity>(&self) -> Result<Vec<E>, StoreError> {
        let sql = format!("SELECT * FROM {} ORDER BY id", E::TABLE);

        Ok(sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?)
    }

    async fn find_one<E: Entity>(&self, filter: Filter) -> Result<E, StoreError> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} ORDER BY id LIMIT 1",
            E::TABLE,
            where_clause(&filter)
        );

        let mut query = sqlx::query_as::<_, E>(&sql);
        match filter {
            Filter::Id(id) => query = query.bind(id),
            Filter::Columns(conditions) => {
                for (_, value) in conditions {
                    query = query.bind(value);
                }
            }
        }

        query
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete<E: Entity>(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", E::TABLE))
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(table = E::TABLE, id, rows = result.rows_affected(), "Delete executed");
        Ok(())
    }
}
