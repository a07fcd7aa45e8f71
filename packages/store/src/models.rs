//! # Domain models for user records and the edit form
//!
//! These types cross the boundary between the roster state, the remote
//! directory (as JSON) and the view layer, so they are all
//! `Serialize + Deserialize + PartialEq`.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserId`] | Identifier of a record. Assigned by the remote source on fetch or generated client-side by [`crate::IdGenerator`]. Serialized as a bare JSON number. |
//! | [`UserRecord`] | One row of the table: id, first/last name, email, department. Serialized with camelCase keys (`firstName`, `lastName`) to match the collection endpoint. |
//! | [`UserForm`] | The draft being composed or edited. Same fields as a record, all as strings, with an optional id. |
//! | [`Field`] | Names one editable form field, used by [`crate::Roster::set_field`]. |
//!
//! The remote schema carries a single display name and no department, so
//! [`UserRecord::from_display_name`] does the split and stamps
//! [`DEPARTMENT_PLACEHOLDER`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Department shown for records fetched from the remote source.
pub const DEPARTMENT_PLACEHOLDER: &str = "N/A";

/// Identifier of a user record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A user record as held in the roster and shown in the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl UserRecord {
    /// Build a record from the remote schema, which only has a display name.
    ///
    /// The first name is the text before the first space and the last name is
    /// the second space-separated token, or empty when there is none. Anything
    /// after the second token is dropped.
    pub fn from_display_name(id: UserId, name: &str, email: &str) -> Self {
        let mut parts = name.split(' ');
        let first_name = parts.next().unwrap_or_default().to_string();
        let last_name = parts.next().unwrap_or_default().to_string();
        Self {
            id,
            first_name,
            last_name,
            email: email.to_string(),
            department: DEPARTMENT_PLACEHOLDER.to_string(),
        }
    }

    /// Display name as the remote schema would carry it.
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Editable form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Department,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Department,
    ];

    /// Input name and placeholder label.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Department => "Department",
        }
    }

    /// HTML input type for the field.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }
}

/// Draft of a record being created or edited.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    pub id: Option<UserId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl UserForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Department => &self.department,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Department => self.department = value,
        }
    }

    /// Build the record this form describes, stamped with `id`.
    pub fn to_record(&self, id: UserId) -> UserRecord {
        UserRecord {
            id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        }
    }
}

impl From<&UserRecord> for UserForm {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: Some(record.id),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            department: record.department.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_first_and_last_name() {
        let record = UserRecord::from_display_name(UserId(1), "John Doe", "j@x.com");
        assert_eq!(
            record,
            UserRecord {
                id: UserId(1),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "j@x.com".to_string(),
                department: "N/A".to_string(),
            }
        );
    }

    #[test]
    fn test_single_token_name_has_empty_last_name() {
        let record = UserRecord::from_display_name(UserId(2), "Madonna", "m@x.com");
        assert_eq!(record.first_name, "Madonna");
        assert_eq!(record.last_name, "");
    }

    #[test]
    fn test_tokens_after_the_second_are_dropped() {
        let record = UserRecord::from_display_name(UserId(3), "Mrs. Dennis Schulist", "d@x.com");
        assert_eq!(record.first_name, "Mrs.");
        assert_eq!(record.last_name, "Dennis");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = UserRecord::from_display_name(UserId(7), "Ada Lovelace", "ada@x.com");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["department"], "N/A");
    }

    #[test]
    fn test_form_from_record_keeps_id() {
        let record = UserRecord::from_display_name(UserId(9), "Grace Hopper", "g@x.com");
        let form = UserForm::from(&record);
        assert_eq!(form.id, Some(UserId(9)));
        assert_eq!(form.get(Field::LastName), "Hopper");
        assert_eq!(form.to_record(UserId(9)), record);
    }
}
