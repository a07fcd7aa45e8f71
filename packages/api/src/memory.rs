use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use store::{Action, UserId, UserRecord};

use crate::directory::UserDirectory;
use crate::error::RemoteError;
use crate::wire::RemoteUser;

#[derive(Debug, Default)]
struct Collection {
    users: Vec<RemoteUser>,
    failures: HashMap<Action, u16>,
    calls: HashMap<Action, usize>,
}

/// In-process user collection for tests and offline demos.
///
/// Stores users in the remote schema, so a record read back has its name
/// re-split and the department replaced by the placeholder, like the real
/// endpoint. Any operation can be made to fail with a chosen status.
#[derive(Clone, Debug, Default)]
pub struct MemoryDirectory {
    inner: Arc<Mutex<Collection>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding a handful of demo users.
    pub fn seeded() -> Self {
        let demo: [(u64, &str, &str); 7] = [
            (1, "Leanne Graham", "Sincere@april.biz"),
            (2, "Ervin Howell", "Shanna@melissa.tv"),
            (3, "Clementine Bauch", "Nathan@yesenia.net"),
            (4, "Patricia Lebsack", "Julianne.OConner@kory.org"),
            (5, "Chelsey Dietrich", "Lucio_Hettinger@annie.ca"),
            (6, "Mrs. Dennis Schulist", "Karley_Dach@jasper.info"),
            (7, "Kurtis Weissnat", "Telly.Hoeger@billy.biz"),
        ];
        Self::with_users(demo.into_iter().map(|(id, name, email)| RemoteUser {
            id: UserId(id),
            name: name.to_string(),
            email: email.to_string(),
        }))
    }

    pub fn with_users(users: impl IntoIterator<Item = RemoteUser>) -> Self {
        let directory = Self::new();
        directory.lock().users = users.into_iter().collect();
        directory
    }

    /// Make every later call of `action` fail with `status`.
    pub fn fail_with(&self, action: Action, status: u16) {
        self.lock().failures.insert(action, status);
    }

    /// Undo [`fail_with`](Self::fail_with).
    pub fn recover(&self, action: Action) {
        self.lock().failures.remove(&action);
    }

    /// Number of calls made for `action`, failed ones included.
    pub fn calls(&self, action: Action) -> usize {
        self.lock().calls.get(&action).copied().unwrap_or(0)
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Collection> {
        // A poisoned lock only means a test panicked mid-call; the data is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Count the call and return the injected failure, if any.
    fn enter(&self, action: Action) -> Result<std::sync::MutexGuard<'_, Collection>, RemoteError> {
        let mut collection = self.lock();
        *collection.calls.entry(action).or_insert(0) += 1;
        if let Some(&status) = collection.failures.get(&action) {
            return Err(RemoteError::Status { status });
        }
        Ok(collection)
    }
}

impl UserDirectory for MemoryDirectory {
    async fn fetch_all(&self) -> Result<Vec<UserRecord>, RemoteError> {
        let collection = self.enter(Action::Fetch)?;
        Ok(collection
            .users
            .iter()
            .cloned()
            .map(RemoteUser::into_record)
            .collect())
    }

    async fn create(&self, record: &UserRecord) -> Result<(), RemoteError> {
        let mut collection = self.enter(Action::Create)?;
        collection.users.push(RemoteUser::from(record));
        Ok(())
    }

    async fn update(&self, id: UserId, record: &UserRecord) -> Result<(), RemoteError> {
        let mut collection = self.enter(Action::Update)?;
        let Some(stored) = collection.users.iter_mut().find(|u| u.id == id) else {
            return Err(RemoteError::Status { status: 404 });
        };
        *stored = RemoteUser::from(record);
        stored.id = id;
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), RemoteError> {
        let mut collection = self.enter(Action::Delete)?;
        let before = collection.users.len();
        collection.users.retain(|u| u.id != id);
        if collection.users.len() == before {
            return Err(RemoteError::Status { status: 404 });
        }
        Ok(())
    }
}
