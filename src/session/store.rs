use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::models::Identity;

/// Identity file name in the storage directory
const IDENTITY_FILE: &str = "identity.json";

/// Lifecycle of the session store.
///
/// `Uninitialized` lasts only until [`SessionStore::load`] has read durable
/// storage; after that the store is either `Anonymous` or `Authenticated`
/// for the rest of the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Uninitialized,
    Anonymous,
    Authenticated(Identity),
}

/// Single authoritative holder of the current Identity, backed by one JSON
/// record on disk so it survives restarts.
///
/// The store is its storage file's sole reader and writer. It holds at most
/// one Identity: fully present or fully absent, never partial. The caller is
/// single-threaded (event-loop style), so no interior locking is needed.
pub struct SessionStore {
    storage_dir: PathBuf,
    state: SessionState,
}

impl SessionStore {
    /// Create a store in the `Uninitialized` state. Call [`load`](Self::load)
    /// before reading any projection.
    pub fn new(storage_dir: PathBuf) -> Self {
        Self {
            storage_dir,
            state: SessionState::Uninitialized,
        }
    }

    /// Read durable storage and resolve to `Anonymous` or `Authenticated`.
    ///
    /// A missing record means `Anonymous`. An unparsable record is purged and
    /// also resolves to `Anonymous`; a corrupt file is never partially
    /// trusted and never an error.
    pub fn load(&mut self) -> Result<()> {
        let path = self.identity_path();
        if !path.exists() {
            self.state = SessionState::Anonymous;
            return Ok(());
        }

        let contents = std::fs::read_to_string(&path)
            .context("Failed to read stored identity")?;

        match serde_json::from_str::<Identity>(&contents) {
            Ok(identity) => {
                debug!(id = %identity.id, "Restored identity from storage");
                self.state = SessionState::Authenticated(identity);
            }
            Err(e) => {
                warn!(error = %e, "Stored identity was unparsable, discarding");
                let _ = std::fs::remove_file(&path);
                self.state = SessionState::Anonymous;
            }
        }
        Ok(())
    }

    /// Become `Authenticated` with `identity` and persist it. Called after a
    /// successful registration or login.
    pub fn establish(&mut self, identity: Identity) -> Result<()> {
        self.persist(&identity)?;
        self.state = SessionState::Authenticated(identity);
        Ok(())
    }

    /// Become `Anonymous` and purge the persisted record. Called on logout.
    pub fn clear(&mut self) -> Result<()> {
        let path = self.identity_path();
        if path.exists() {
            std::fs::remove_file(&path).context("Failed to remove stored identity")?;
        }
        self.state = SessionState::Anonymous;
        Ok(())
    }

    /// Replace the held Identity wholesale and re-persist it. Called after a
    /// profile update with the authoritative post-update record.
    ///
    /// # Panics
    ///
    /// Panics if the store is not `Authenticated`. Calling `refresh` without
    /// an authenticated identity is a programming error; no normal user flow
    /// reaches an update without being logged in.
    pub fn refresh(&mut self, identity: Identity) -> Result<()> {
        assert!(
            matches!(self.state, SessionState::Authenticated(_)),
            "refresh() called on a store with no authenticated identity"
        );
        self.persist(&identity)?;
        self.state = SessionState::Authenticated(identity);
        Ok(())
    }

    /// The held Identity, present only while `Authenticated`.
    pub fn current_identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// True only during the window before durable storage has been read.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Uninitialized)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn persist(&self, identity: &Identity) -> Result<()> {
        let path = self.identity_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create session storage directory")?;
        }
        let contents = serde_json::to_string_pretty(identity)?;
        std::fs::write(&path, contents).context("Failed to write stored identity")?;
        Ok(())
    }

    fn identity_path(&self) -> PathBuf {
        self.storage_dir.join(IDENTITY_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn sample_identity() -> Identity {
        Identity {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            name: "Ann".to_string(),
            skills: vec!["rust".to_string()],
            interests: vec!["systems".to_string()],
            bio: None,
            availability: Availability::Active,
            created_at: "2024-01-01T00:00:00".to_string(),
            updated_at: "2024-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn test_starts_uninitialized() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_path_buf());
        assert!(store.is_loading());
        assert!(!store.is_authenticated());
        assert!(store.current_identity().is_none());
    }

    #[test]
    fn test_load_empty_storage_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::new(dir.path().to_path_buf());
        store.load().unwrap();
        assert!(!store.is_loading());
        assert!(!store.is_authenticated());
        assert_eq!(*store.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_establish_then_fresh_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let identity = sample_identity();

        let mut store = SessionStore::new(dir.path().to_path_buf());
        store.load().unwrap();
        store.establish(identity.clone()).unwrap();
        assert!(store.is_authenticated());

        // A fresh store over the same directory restores the same record.
        let mut restored = SessionStore::new(dir.path().to_path_buf());
        restored.load().unwrap();
        assert_eq!(restored.current_identity(), Some(&identity));
    }

    #[test]
    fn test_corrupt_record_resolves_anonymous_and_purges() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(IDENTITY_FILE);
        std::fs::write(&path, "{not valid json").unwrap();

        let mut store = SessionStore::new(dir.path().to_path_buf());
        store.load().unwrap();
        assert_eq!(*store.state(), SessionState::Anonymous);
        assert!(!path.exists(), "Corrupt record should be purged");
    }

    #[test]
    fn test_clear_purges_persisted_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::new(dir.path().to_path_buf());
        store.load().unwrap();
        store.establish(sample_identity()).unwrap();
        store.clear().unwrap();
        assert!(!store.is_authenticated());

        let mut fresh = SessionStore::new(dir.path().to_path_buf());
        fresh.load().unwrap();
        assert_eq!(*fresh.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::new(dir.path().to_path_buf());
        store.load().unwrap();
        store.establish(sample_identity()).unwrap();

        let mut updated = sample_identity();
        updated.bio = Some("building things".to_string());
        store.refresh(updated.clone()).unwrap();
        let after_first = store.current_identity().cloned();
        store.refresh(updated.clone()).unwrap();
        assert_eq!(store.current_identity().cloned(), after_first);
        assert_eq!(store.current_identity(), Some(&updated));
    }

    #[test]
    #[should_panic(expected = "no authenticated identity")]
    fn test_refresh_while_anonymous_panics() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::new(dir.path().to_path_buf());
        store.load().unwrap();
        let _ = store.refresh(sample_identity());
    }
}
