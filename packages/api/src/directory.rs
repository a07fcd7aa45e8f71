use store::{Backend, RosterConfig, UserId, UserRecord};

use crate::error::RemoteError;
use crate::http::HttpDirectory;
use crate::memory::MemoryDirectory;

/// Async interface to the remote user collection.
///
/// Every call either succeeds or reports a [`RemoteError`]; nothing is retried
/// and no timeout is applied.
pub trait UserDirectory {
    /// List every user, already mapped into [`UserRecord`]s.
    fn fetch_all(&self) -> impl std::future::Future<Output = Result<Vec<UserRecord>, RemoteError>>;
    /// Submit a new record. The client owns the id.
    fn create(
        &self,
        record: &UserRecord,
    ) -> impl std::future::Future<Output = Result<(), RemoteError>>;
    /// Replace the record stored at `id`.
    fn update(
        &self,
        id: UserId,
        record: &UserRecord,
    ) -> impl std::future::Future<Output = Result<(), RemoteError>>;
    fn delete(&self, id: UserId) -> impl std::future::Future<Output = Result<(), RemoteError>>;
}

/// The directory picked by configuration.
#[derive(Clone, Debug)]
pub enum Directory {
    Http(HttpDirectory),
    Memory(MemoryDirectory),
}

impl Directory {
    pub fn from_config(config: &RosterConfig) -> Self {
        match config.remote.backend {
            Backend::Http => Directory::Http(HttpDirectory::from_config(config)),
            Backend::Memory => Directory::Memory(MemoryDirectory::seeded()),
        }
    }
}

impl UserDirectory for Directory {
    async fn fetch_all(&self) -> Result<Vec<UserRecord>, RemoteError> {
        match self {
            Directory::Http(d) => d.fetch_all().await,
            Directory::Memory(d) => d.fetch_all().await,
        }
    }

    async fn create(&self, record: &UserRecord) -> Result<(), RemoteError> {
        match self {
            Directory::Http(d) => d.create(record).await,
            Directory::Memory(d) => d.create(record).await,
        }
    }

    async fn update(&self, id: UserId, record: &UserRecord) -> Result<(), RemoteError> {
        match self {
            Directory::Http(d) => d.update(id, record).await,
            Directory::Memory(d) => d.update(id, record).await,
        }
    }

    async fn delete(&self, id: UserId) -> Result<(), RemoteError> {
        match self {
            Directory::Http(d) => d.delete(id).await,
            Directory::Memory(d) => d.delete(id).await,
        }
    }
}
