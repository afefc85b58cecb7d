//! Document store: generic create/list access to named collections.
//!
//! The production store keeps one JSONB-payload table per collection inside
//! the schema named by `DATABASE_NAME`. Collection tables are created on
//! first insert, so reading a collection that does not exist yet yields an
//! empty list rather than an error.

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// SQLSTATE for "relation does not exist".
const UNDEFINED_TABLE: &str = "42P01";

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document into the named collection and return its
    /// generated id.
    async fn create_document(&self, collection: &str, document: Value) -> Result<String, AppError>;

    /// Documents in insertion order, optionally capped at `limit`. A missing
    /// or empty collection yields an empty list.
    async fn get_documents(
        &self,
        collection: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Value>, AppError>;

    /// Names of the collections currently present in the store.
    async fn collection_names(&self) -> Result<Vec<String>, AppError>;
}

/// PostgreSQL-backed store. One table per collection, `payload` JSONB,
/// `seq` for arrival order.
pub struct PgDocumentStore {
    pool: PgPool,
    /// Schema grouping the collection tables. Must be a valid PostgreSQL identifier.
    schema: String,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        Self {
            pool,
            schema: schema.to_string(),
        }
    }

    /// Build a store over a lazily-connecting pool. No round trip happens
    /// here; the first operation surfaces connectivity problems instead.
    pub fn connect_lazy(database_url: &str, schema: &str) -> Result<Self, AppError> {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(database_url)
            .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
        Ok(Self::new(pool, schema))
    }

    fn qualified(&self, collection: &str) -> String {
        format!("{}.{}", self.schema, collection)
    }

    async fn ensure_collection(&self, collection: &str) -> Result<(), AppError> {
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", self.schema))
            .execute(&self.pool)
            .await?;
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id UUID PRIMARY KEY,
                seq BIGSERIAL,
                payload JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            self.qualified(collection)
        );
        sqlx::query(&ddl).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn create_document(&self, collection: &str, document: Value) -> Result<String, AppError> {
        self.ensure_collection(collection).await?;
        let id = Uuid::new_v4();
        sqlx::query(&format!(
            "INSERT INTO {} (id, payload) VALUES ($1, $2)",
            self.qualified(collection)
        ))
        .bind(id)
        .bind(&document)
        .execute(&self.pool)
        .await?;
        tracing::debug!(collection, id = %id, "document created");
        Ok(id.to_string())
    }

    async fn get_documents(
        &self,
        collection: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Value>, AppError> {
        let sql = format!(
            "SELECT id, payload FROM {} ORDER BY seq ASC LIMIT $1",
            self.qualified(collection)
        );
        let rows: Vec<(Uuid, Value)> = match sqlx::query_as(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
        {
            Ok(rows) => rows,
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(UNDEFINED_TABLE) => {
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(rows
            .into_iter()
            .map(|(id, payload)| with_id(id, payload))
            .collect())
    }

    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT table_name FROM information_schema.tables WHERE table_schema = $1 ORDER BY table_name",
        )
        .bind(&self.schema)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}

/// In-memory store for tests and for running without a database.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<(Uuid, Value)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(&self, collection: &str, document: Value) -> Result<String, AppError> {
        let id = Uuid::new_v4();
        let mut collections = self.collections.write().expect("collections lock poisoned");
        collections
            .entry(collection.to_string())
            .or_default()
            .push((id, document));
        Ok(id.to_string())
    }

    async fn get_documents(
        &self,
        collection: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Value>, AppError> {
        let collections = self.collections.read().expect("collections lock poisoned");
        let docs = collections.get(collection).map(Vec::as_slice).unwrap_or(&[]);
        let cap = limit.map(|n| n.max(0) as usize).unwrap_or(docs.len());
        Ok(docs
            .iter()
            .take(cap)
            .map(|(id, payload)| with_id(*id, payload.clone()))
            .collect())
    }

    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        let collections = self.collections.read().expect("collections lock poisoned");
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

/// Merge the generated id into the stored payload as an `id` field.
fn with_id(id: Uuid, payload: Value) -> Value {
    match payload {
        Value::Object(mut map) => {
            map.insert("id".to_string(), Value::String(id.to_string()));
            Value::Object(map)
        }
        other => serde_json::json!({ "id": id.to_string(), "value": other }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn memory_store_returns_documents_in_insertion_order() {
        let store = MemoryStore::new();
        for n in [3, 1, 2] {
            store
                .create_document("steps", json!({"n": n}))
                .await
                .unwrap();
        }
        let docs = store.get_documents("steps", None).await.unwrap();
        let ns: Vec<i64> = docs.iter().map(|d| d["n"].as_i64().unwrap()).collect();
        assert_eq!(ns, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn memory_store_applies_limit() {
        let store = MemoryStore::new();
        for n in 0..4 {
            store
                .create_document("items", json!({"n": n}))
                .await
                .unwrap();
        }
        let docs = store.get_documents("items", Some(1)).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["n"], 0);
    }

    #[tokio::test]
    async fn missing_collection_reads_as_empty() {
        let store = MemoryStore::new();
        let docs = store.get_documents("nothing", None).await.unwrap();
        assert!(docs.is_empty());
        assert!(store.collection_names().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn created_documents_carry_their_generated_id() {
        let store = MemoryStore::new();
        let id = store
            .create_document("company", json!({"name": "Acme"}))
            .await
            .unwrap();
        let docs = store.get_documents("company", None).await.unwrap();
        assert_eq!(docs[0]["id"].as_str().unwrap(), id);
        assert_eq!(docs[0]["name"], "Acme");
    }

    #[tokio::test]
    async fn collection_names_are_sorted() {
        let store = MemoryStore::new();
        store.create_document("service", json!({})).await.unwrap();
        store.create_document("company", json!({})).await.unwrap();
        assert_eq!(
            store.collection_names().await.unwrap(),
            vec!["company".to_string(), "service".to_string()]
        );
    }
}
