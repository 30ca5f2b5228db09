//! Export snapshot serialization.
//!
//! An export is a one-shot, read-only snapshot of the store: a JSON
//! array of `{"name", "phones", "emails"}` objects in creation order,
//! written compactly (no pretty-printing). Serialization goes through
//! `serde_json`, so embedded quotes and backslashes in stored values
//! are escaped correctly.

use crate::error::{ExportError, ExportResult};
use crate::store::ContactStore;
use std::fs;

/// Serialize every contact to a JSON array string.
pub fn to_json(store: &ContactStore) -> ExportResult<String> {
    let contacts: Vec<_> = store.iter().collect();
    Ok(serde_json::to_string(&contacts)?)
}

/// Write the snapshot to `path`, overwriting any existing content.
///
/// The store is only read; a failed write leaves in-memory state
/// untouched.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when the path cannot be written.
pub fn write_snapshot(store: &ContactStore, path: &str) -> ExportResult<()> {
    let json = to_json(store)?;
    fs::write(path, &json).map_err(|source| ExportError::Io {
        path: path.to_string(),
        source,
    })?;

    tracing::info!(path, contacts = store.len(), "Export snapshot written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, PhoneNumber};

    #[test]
    fn test_empty_store_exports_empty_array() {
        let store = ContactStore::new();
        assert_eq!(to_json(&store).unwrap(), "[]");
    }

    #[test]
    fn test_export_is_compact_and_ordered() {
        let mut store = ContactStore::new();
        store.add_phone("Bob", PhoneNumber::new("+222").unwrap());
        store.add_phone("Alice", PhoneNumber::new("+111").unwrap());
        store.add_email("Alice", EmailAddress::new("alice@example.com").unwrap());

        let json = to_json(&store).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Bob","phones":["+222"],"emails":[]},{"name":"Alice","phones":["+111"],"emails":["alice@example.com"]}]"#
        );
    }
}
