use rusqlite::Connection;
use tracing::info;

use crate::db::contact_repo;
use crate::error::ContactsResult;
use crate::model::{Contact, Id};
use crate::validation;

/// Validates and stores a new contact. Blank fields are rejected before the
/// store is touched.
pub fn add_contact(conn: &Connection, name: &str, phone: &str, email: &str) -> ContactsResult<Contact> {
    let new = validation::new_contact(name, phone, email)?;
    let id = contact_repo::insert(conn, &new)?;
    info!(%id, name = %new.name, "contact added");
    Ok(Contact::from_new(id, new))
}

pub fn remove_contact(conn: &Connection, id: Id<Contact>) -> ContactsResult<()> {
    contact_repo::delete_by_id(conn, id)?;
    info!(%id, "contact deleted");
    Ok(())
}
