use serde::{Deserialize, Serialize};

use super::ids::Id;

/// A stored contact. The id is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Id<Contact>,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn from_new(id: Id<Contact>, new: NewContact) -> Self {
        Self {
            id,
            name: new.name,
            phone: new.phone,
            email: new.email,
        }
    }
}

/// Field values for a contact that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl NewContact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}
