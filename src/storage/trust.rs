//! Trusted domain and URI persistence.
//!
//! Two allow-lists decide whether a deshortened link may open without
//! confirmation: trusted hosts (`goo.gl`) and trusted short links
//! (`http://goo.gl/fbsS`). A short link is trusted when either list matches.

use std::path::Path;

use log::{debug, info};
use sqlx::{Pool, Sqlite};
use url::Url;

use crate::error_handling::DatabaseError;
use crate::storage::migrations::run_migrations;
use crate::storage::pool::{init_db_pool_in_memory, init_db_pool_with_path};

/// SQLite-backed trust store.
///
/// The pool is safe to share between tasks; clone the store to hand it out.
/// [`close`](Self::close) consumes the store, so no query can run afterwards.
#[derive(Debug, Clone)]
pub struct TrustStore {
    pool: Pool<Sqlite>,
}

impl TrustStore {
    /// Opens (and creates if needed) the trust store at `db_path`.
    pub async fn open(db_path: &Path) -> Result<Self, DatabaseError> {
        let pool = init_db_pool_with_path(db_path).await?;
        Self::from_pool(pool).await
    }

    /// Opens a throwaway store that lives as long as the returned value.
    pub async fn open_in_memory() -> Result<Self, DatabaseError> {
        let pool = init_db_pool_in_memory().await?;
        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, applying migrations first.
    pub async fn from_pool(pool: Pool<Sqlite>) -> Result<Self, DatabaseError> {
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn close(self) {
        self.pool.close().await;
    }

    /// Trusts every short link on `domain`. Returns `false` if it was already trusted.
    pub async fn add_domain(&self, domain: &str) -> Result<bool, DatabaseError> {
        let result = sqlx::query("INSERT OR IGNORE INTO trusted_domain (domain) VALUES (?)")
            .bind(domain)
            .execute(&self.pool)
            .await?;
        let added = result.rows_affected() > 0;
        if added {
            info!("Trusting domain {domain}");
        }
        Ok(added)
    }

    /// Returns `true` if `domain` was trusted before.
    pub async fn remove_domain(&self, domain: &str) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM trusted_domain WHERE domain = ?")
            .bind(domain)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns the number of domains removed.
    pub async fn remove_all_domains(&self) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM trusted_domain")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Trusts one short link. Returns `false` if it was already trusted.
    pub async fn add_uri(&self, uri: &Url) -> Result<bool, DatabaseError> {
        let result = sqlx::query("INSERT OR IGNORE INTO trusted_uri (uri) VALUES (?)")
            .bind(uri.as_str())
            .execute(&self.pool)
            .await?;
        let added = result.rows_affected() > 0;
        if added {
            info!("Trusting uri {uri}");
        }
        Ok(added)
    }

    /// Returns `true` if `uri` was trusted before.
    pub async fn remove_uri(&self, uri: &Url) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM trusted_uri WHERE uri = ?")
            .bind(uri.as_str())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns the number of URIs removed.
    pub async fn remove_all_uris(&self) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM trusted_uri")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Removes every trusted domain and URI, returning `(domains, uris)` removed.
    pub async fn clear(&self) -> Result<(u64, u64), DatabaseError> {
        let domains = self.remove_all_domains().await?;
        let uris = self.remove_all_uris().await?;
        Ok((domains, uris))
    }

    pub async fn is_domain_trusted(&self, domain: &str) -> Result<bool, DatabaseError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM trusted_domain WHERE domain = ?")
                .bind(domain)
                .fetch_one(&self.pool)
                .await?;
        let trusted = count > 0;
        debug!("Trust check for domain {domain}: {trusted}");
        Ok(trusted)
    }

    pub async fn is_uri_trusted(&self, uri: &Url) -> Result<bool, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trusted_uri WHERE uri = ?")
            .bind(uri.as_str())
            .fetch_one(&self.pool)
            .await?;
        let trusted = count > 0;
        debug!("Trust check for uri {uri}: {trusted}");
        Ok(trusted)
    }

    /// A short link is trusted when its host or the link itself is.
    pub async fn is_trusted(&self, uri: &Url) -> Result<bool, DatabaseError> {
        if let Some(host) = uri.host_str() {
            if self.is_domain_trusted(host).await? {
                return Ok(true);
            }
        }
        self.is_uri_trusted(uri).await
    }

    /// All trusted domains, sorted.
    pub async fn domains(&self) -> Result<Vec<String>, DatabaseError> {
        let domains: Vec<String> =
            sqlx::query_scalar("SELECT domain FROM trusted_domain ORDER BY domain")
                .fetch_all(&self.pool)
                .await?;
        Ok(domains)
    }

    /// All trusted URIs, sorted by their serialized form.
    pub async fn uris(&self) -> Result<Vec<String>, DatabaseError> {
        let uris: Vec<String> = sqlx::query_scalar("SELECT uri FROM trusted_uri ORDER BY uri")
            .fetch_all(&self.pool)
            .await?;
        Ok(uris)
    }
}
