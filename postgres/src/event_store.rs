//! `PostgresEventStore`: `EventStore` over a single `events` table.

use crate::config::PostgresConfig;
use chrono::{DateTime, NaiveTime, Utc};
use event_space_core::{Event, EventId, EventPatch, EventStore, EventStoreError, NewEvent, StoreFuture};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::Instrument;
use uuid::Uuid;

/// Columns returned by every read, in `EventRow` order.
const EVENT_COLUMNS: &str = "id, name, email, phone_number, event_date, event_time, hall";

/// Table definition. `IF NOT EXISTS` keeps it safe to run on every start.
const CREATE_EVENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS events (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL CHECK (name <> ''),
        email TEXT NOT NULL CHECK (email <> ''),
        phone_number TEXT NOT NULL CHECK (phone_number <> ''),
        event_date TIMESTAMPTZ NOT NULL,
        event_time TIME NOT NULL,
        hall TEXT NOT NULL CHECK (hall <> ''),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
";

#[derive(sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    name: String,
    email: String,
    phone_number: String,
    event_date: DateTime<Utc>,
    event_time: NaiveTime,
    hall: String,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            id: EventId::from_uuid(row.id),
            name: row.name,
            email: row.email,
            phone_number: row.phone_number,
            date: row.event_date,
            time: row.event_time,
            hall: row.hall,
        }
    }
}

/// Classify a sqlx failure.
fn store_error(err: sqlx::Error) -> EventStoreError {
    match &err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => EventStoreError::Unavailable(err.to_string()),
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_) => EventStoreError::Corrupt(err.to_string()),
        _ => EventStoreError::Database(err.to_string()),
    }
}

fn record_write(operation: &'static str) {
    metrics::counter!("event_store.writes", "operation" => operation).increment(1);
}

/// `PostgreSQL`-backed [`EventStore`].
///
/// Cheap to clone: clones share the connection pool.
#[derive(Clone, Debug)]
pub struct PostgresEventStore {
    pool: PgPool,
}

impl PostgresEventStore {
    /// Open a connection pool and verify it with one round trip.
    ///
    /// # Errors
    ///
    /// Returns `EventStoreError::Unavailable` if no connection can be made
    /// within the configured timeout.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, EventStoreError> {
        tracing::info!(
            url = %config.redacted_url(),
            max_connections = config.max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .connect(&config.url)
            .await
            .map_err(|e| EventStoreError::Unavailable(e.to_string()))?;

        let store = Self::from_pool(pool);
        store.ping_now().await?;
        Ok(store)
    }

    /// Wrap an existing pool.
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `events` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a store error if the DDL statement fails.
    pub async fn migrate(&self) -> Result<(), EventStoreError> {
        sqlx::query(CREATE_EVENTS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        tracing::debug!("events table ready");
        Ok(())
    }

    async fn ping_now(&self) -> Result<(), EventStoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(store_error)
    }

    async fn insert(&self, new_event: NewEvent) -> Result<Event, EventStoreError> {
        let id = EventId::new();
        let row: EventRow = sqlx::query_as(&format!(
            "INSERT INTO events (id, name, email, phone_number, event_date, event_time, hall)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(new_event.name())
        .bind(new_event.email())
        .bind(new_event.phone_number())
        .bind(new_event.date())
        .bind(new_event.time())
        .bind(new_event.hall())
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;

        record_write("create");
        tracing::debug!(event_id = %id, "Event stored");
        Ok(row.into())
    }

    async fn fetch(&self, id: EventId) -> Result<Event, EventStoreError> {
        let row: Option<EventRow> =
            sqlx::query_as(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(store_error)?;

        row.map(Event::from).ok_or(EventStoreError::NotFound(id))
    }

    async fn fetch_all(&self) -> Result<Vec<Event>, EventStoreError> {
        let rows: Vec<EventRow> = sqlx::query_as(&format!("SELECT {EVENT_COLUMNS} FROM events"))
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn patch(&self, id: EventId, patch: EventPatch) -> Result<Event, EventStoreError> {
        let EventPatch {
            name,
            email,
            phone_number,
            date,
            time,
            hall,
        } = patch;

        let row: Option<EventRow> = sqlx::query_as(&format!(
            "UPDATE events SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone_number = COALESCE($4, phone_number),
                event_date = COALESCE($5, event_date),
                event_time = COALESCE($6, event_time),
                hall = COALESCE($7, hall),
                updated_at = now()
             WHERE id = $1
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(name)
        .bind(email)
        .bind(phone_number)
        .bind(date)
        .bind(time)
        .bind(hall)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        let event = row.map(Event::from).ok_or(EventStoreError::NotFound(id))?;
        record_write("update");
        tracing::debug!(event_id = %id, "Event updated");
        Ok(event)
    }

    async fn remove(&self, id: EventId) -> Result<(), EventStoreError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(EventStoreError::NotFound(id));
        }

        record_write("delete");
        tracing::debug!(event_id = %id, "Event deleted");
        Ok(())
    }
}

impl EventStore for PostgresEventStore {
    fn create(&self, event: NewEvent) -> StoreFuture<'_, Event> {
        Box::pin(
            self.insert(event)
                .instrument(tracing::debug_span!("event_store.create")),
        )
    }

    fn get(&self, id: EventId) -> StoreFuture<'_, Event> {
        Box::pin(
            self.fetch(id)
                .instrument(tracing::debug_span!("event_store.get", event_id = %id)),
        )
    }

    fn list(&self) -> StoreFuture<'_, Vec<Event>> {
        Box::pin(
            self.fetch_all()
                .instrument(tracing::debug_span!("event_store.list")),
        )
    }

    fn update(&self, id: EventId, patch: EventPatch) -> StoreFuture<'_, Event> {
        Box::pin(
            self.patch(id, patch)
                .instrument(tracing::debug_span!("event_store.update", event_id = %id)),
        )
    }

    fn delete(&self, id: EventId) -> StoreFuture<'_, ()> {
        Box::pin(
            self.remove(id)
                .instrument(tracing::debug_span!("event_store.delete", event_id = %id)),
        )
    }

    fn ping(&self) -> StoreFuture<'_, ()> {
        Box::pin(self.ping_now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_exhaustion_is_unavailable() {
        assert!(matches!(
            store_error(sqlx::Error::PoolTimedOut),
            EventStoreError::Unavailable(_)
        ));
        assert!(matches!(
            store_error(sqlx::Error::PoolClosed),
            EventStoreError::Unavailable(_)
        ));
    }

    #[test]
    fn decode_failure_is_corrupt() {
        assert!(matches!(
            store_error(sqlx::Error::ColumnNotFound("event_time".to_string())),
            EventStoreError::Corrupt(_)
        ));
    }

    #[test]
    fn missing_row_is_database_error() {
        assert!(matches!(
            store_error(sqlx::Error::RowNotFound),
            EventStoreError::Database(_)
        ));
    }

    #[test]
    fn table_has_no_nullable_payload_columns() {
        for column in ["name", "email", "phone_number", "event_date", "event_time", "hall"] {
            let definition = CREATE_EVENTS_TABLE
                .lines()
                .find(|line| line.trim_start().starts_with(column))
                .unwrap_or_default();
            assert!(definition.contains("NOT NULL"), "{column} must be NOT NULL");
        }
    }
}
