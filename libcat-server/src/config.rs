//! Catalog configuration - store selection
//!
//! The CLI fills `database_url` from `--database-url` / `DATABASE_URL`. When
//! unset, the embedded SQLite store is used.

use std::path::PathBuf;

/// Default file for the embedded store, relative to the working directory
pub const DEFAULT_SQLITE_PATH: &str = "library.db";

/// Catalog configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Primary store connection string
    pub database_url: Option<String>,

    /// Embedded store file, used when the primary store is absent or unreachable
    pub sqlite_path: PathBuf,
}

impl CatalogConfig {
    /// Config that always uses the embedded store
    pub fn embedded() -> Self {
        Self {
            database_url: None,
            sqlite_path: PathBuf::from(DEFAULT_SQLITE_PATH),
        }
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn with_sqlite_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sqlite_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults() {
        let config = CatalogConfig::embedded();
        assert!(config.database_url.is_none());
        assert_eq!(config.sqlite_path, PathBuf::from("library.db"));
    }

    #[test]
    fn builders_override_fields() {
        let config = CatalogConfig::embedded()
            .with_database_url("postgres://localhost/library")
            .with_sqlite_path("/tmp/catalog.db");

        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/library")
        );
        assert_eq!(config.sqlite_path, PathBuf::from("/tmp/catalog.db"));
    }
}
