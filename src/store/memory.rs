use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{Entity, Filter, Store, StoreError};

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: Vec<(i64, Vec<Option<String>>)>,
}

/// In-memory [`Store`] used by the handler tests.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<&'static str, Table>>,
    failing: AtomicBool,
    calls: Mutex<usize>,
}

impl MemoryStore {
    /// Makes every following call fail like a lost connection.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Number of store calls made so far.
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn check(&self) -> Result<(), StoreError> {
        *self.calls.lock().unwrap() += 1;
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    fn matches<E: Entity>(id: i64, values: &[Option<String>], filter: &Filter) -> bool {
        match filter {
            Filter::Id(wanted) => id == *wanted,
            Filter::Columns(conditions) => conditions.iter().all(|(column, wanted)| {
                let Some(index) = E::COLUMNS.iter().position(|c| c == column) else {
                    return false;
                };
                match (wanted, &values[index]) {
                    (Some(wanted), Some(stored)) => wanted == stored,
                    _ => false,
                }
            }),
        }
    }
}

impl Store for MemoryStore {
    async fn sync<E: Entity>(&self) -> Result<(), StoreError> {
        self.check()?;
        self.tables.lock().unwrap().entry(E::TABLE).or_default();
        Ok(())
    }

    async fn create<E: Entity>(&self, draft: &E::Draft) -> Result<(), StoreError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let table = tables.entry(E::TABLE).or_default();
        table.last_id += 1;
        let id = table.last_id;
        table.rows.push((id, E::values(draft)));
        Ok(())
    }

    async fn find_all<E: Entity>(&self) -> Result<Vec<E>, StoreError> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .get(E::TABLE)
            .map(|table| {
                table
                    .rows
                    .iter()
                    .map(|(id, values)| E::hydrate(*id, values.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_one<E: Entity>(&self, filter: Filter) -> Result<E, StoreError> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        tables
            .get(E::TABLE)
            .and_then(|table| {
                table
                    .rows
                    .iter()
                    .find(|(id, values)| Self::matches::<E>(*id, values, &filter))
            })
            .map(|(id, values)| E::hydrate(*id, values.clone()))
            .ok_or(StoreError::NotFound)
    }

    async fn delete<E: Entity>(&self, id: i64) -> Result<(), StoreError> {
        self.check()?;
        if let Some(table) = self.tables.lock().unwrap().get_mut(E::TABLE) {
            table.rows.retain(|(row_id, _)| *row_id != id);
        }
        Ok(())
    }
}
