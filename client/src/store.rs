use std::{
    fs, io,
    path::PathBuf,
    sync::Mutex,
};

use db::models::user::User;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// What a signed-in client remembers between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

/// Durable client-side storage for one session.
pub trait SessionStore {
    fn load(&self) -> Result<Option<StoredSession>, ClientError>;
    fn save(&self, session: &StoredSession) -> Result<(), ClientError>;
    fn clear(&self) -> Result<(), ClientError>;
}

/// Session kept as a JSON file.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<StoredSession>, ClientError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, session: &StoredSession) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // write then rename so a crash never leaves half a file
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(session)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local store, lost on exit.
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<StoredSession>, ClientError> {
        Ok(self
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save(&self, session: &StoredSession) -> Result<(), ClientError> {
        *self
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use common::misc::Role;
    use uuid::Uuid;

    use super::*;

    fn session() -> StoredSession {
        StoredSession {
            token: "header.payload.signature".into(),
            user: User {
                id: Uuid::new_v4(),
                email: "jane@x.com".into(),
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                role: Role::Manager,
                avatar: None,
                created_at: Utc::now().naive_utc(),
            },
        }
    }

    #[test]
    fn file_store_survives_a_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let saved = session();

        FileSessionStore::new(&path).save(&saved).unwrap();

        let reopened = FileSessionStore::new(&path);
        assert_eq!(reopened.load().unwrap(), Some(saved));

        reopened.clear().unwrap();
        assert_eq!(reopened.load().unwrap(), None);
        // clearing twice is fine
        reopened.clear().unwrap();
    }

    #[test]
    fn missing_file_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, b"{not json").unwrap();
        assert!(matches!(
            FileSessionStore::new(&path).load(),
            Err(ClientError::Corrupt(_))
        ));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save(&session()).unwrap();
        assert!(store.load().unwrap().is_some());
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
