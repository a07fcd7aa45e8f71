//! # HTTP directory: the collection endpoint over `reqwest`
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`fetch_all`](UserDirectory::fetch_all) | `GET {base}/users` |
//! | [`create`](UserDirectory::create) | `POST {base}/users` with the full record |
//! | [`update`](UserDirectory::update) | `PUT {base}/users/{id}` with the full record |
//! | [`delete`](UserDirectory::delete) | `DELETE {base}/users/{id}` |
//!
//! Any non-2xx status becomes [`RemoteError::Status`]. The same code runs
//! natively and in the browser, where `reqwest` goes through `fetch`.

use reqwest::{Client, Response};
use store::{RosterConfig, UserId, UserRecord};
use tracing::debug;

use crate::directory::UserDirectory;
use crate::error::RemoteError;
use crate::wire::RemoteUser;

#[derive(Clone, Debug)]
pub struct HttpDirectory {
    client: Client,
    users_url: String,
}

impl HttpDirectory {
    /// Directory for the collection at `{base_url}/users`.
    pub fn new(base_url: &str) -> Self {
        Self::from_config(&RosterConfig::default().with_base_url(base_url))
    }

    pub fn from_config(config: &RosterConfig) -> Self {
        Self {
            client: Client::new(),
            users_url: config.users_url(),
        }
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }

    fn user_url(&self, id: UserId) -> String {
        format!("{}/{}", self.users_url, id)
    }
}

fn accepted(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RemoteError::Status {
            status: status.as_u16(),
        })
    }
}

impl UserDirectory for HttpDirectory {
    async fn fetch_all(&self) -> Result<Vec<UserRecord>, RemoteError> {
        debug!(url = %self.users_url, "fetching users");
        let response = accepted(self.client.get(&self.users_url).send().await?)?;
        let users: Vec<RemoteUser> = response.json().await?;
        Ok(users.into_iter().map(RemoteUser::into_record).collect())
    }

    async fn create(&self, record: &UserRecord) -> Result<(), RemoteError> {
        debug!(id = %record.id, "creating user");
        accepted(
            self.client
                .post(&self.users_url)
                .json(record)
                .send()
                .await?,
        )?;
        Ok(())
    }

    async fn update(&self, id: UserId, record: &UserRecord) -> Result<(), RemoteError> {
        debug!(%id, "updating user");
        accepted(self.client.put(self.user_url(id)).json(record).send().await?)?;
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), RemoteError> {
        debug!(%id, "deleting user");
        accepted(self.client.delete(self.user_url(id)).send().await?)?;
        Ok(())
    }
}
