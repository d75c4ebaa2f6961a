//! GeoIP database loading from files.

use anyhow::{Context, Result};
use maxminddb::Reader;
use std::path::Path;

/// Loads a GeoIP database from a local file path.
///
/// The whole file is read into memory and handed to the reader as an owned
/// buffer; the reader is then shared read-only for the lifetime of the
/// process. A missing or unparseable file is an error — the caller treats a
/// configured-but-unloadable database as fatal at startup.
pub(crate) async fn load_reader(path: &Path) -> Result<Reader<Vec<u8>>> {
    log::info!("Loading GeoIP database from: {}", path.display());

    let db_bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read GeoIP database from {}", path.display()))?;

    let reader = Reader::from_source(db_bytes)
        .with_context(|| format!("Failed to parse GeoIP database from {}", path.display()))?;

    Ok(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn test_load_reader_not_found() {
        let nonexistent = Path::new("nonexistent").join("GeoLite2-City.mmdb");
        let result = load_reader(&nonexistent).await;
        assert!(result.is_err());
        let error_msg = result.unwrap_err().to_string();
        assert!(
            error_msg.contains("Failed to read"),
            "Expected read error, got: {}",
            error_msg
        );
    }

    #[tokio::test]
    async fn test_load_reader_invalid_database() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("invalid.mmdb");
        let mut file = tokio::fs::File::create(&db_path)
            .await
            .expect("Failed to create test file");
        file.write_all(b"not a valid mmdb file")
            .await
            .expect("Failed to write test data");
        drop(file);

        let result = load_reader(&db_path).await;
        assert!(result.is_err());
        let error_msg = result.unwrap_err().to_string();
        assert!(
            error_msg.contains("Failed to parse"),
            "Expected parse error, got: {}",
            error_msg
        );
    }

    #[tokio::test]
    async fn test_load_reader_empty_file() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("empty.mmdb");
        tokio::fs::File::create(&db_path)
            .await
            .expect("Failed to create empty file");

        let result = load_reader(&db_path).await;
        assert!(result.is_err(), "Empty file is not a valid database");
    }
}
