//! Shape of a user as the collection endpoint lists it.

use serde::{Deserialize, Serialize};
use store::{UserId, UserRecord};

/// One element of the `GET /users` array. Extra fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl RemoteUser {
    pub fn into_record(self) -> UserRecord {
        UserRecord::from_display_name(self.id, &self.name, &self.email)
    }
}

impl From<&UserRecord> for RemoteUser {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.full_name(),
            email: record.email.clone(),
        }
    }
}
