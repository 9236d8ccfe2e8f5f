use rusqlite::{params, Connection};

use crate::error::{ContactsError, ContactsResult};
use crate::model::{Contact, Id, NewContact};

pub fn insert(conn: &Connection, contact: &NewContact) -> ContactsResult<Id<Contact>> {
    conn.execute(
        "INSERT INTO contacts (name, phone, email) VALUES (?1, ?2, ?3)",
        params![contact.name, contact.phone, contact.email],
    )?;
    Ok(Id::new(conn.last_insert_rowid()))
}

pub fn fetch_all_ordered_by_name(conn: &Connection) -> ContactsResult<Vec<Contact>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, phone, email FROM contacts ORDER BY name, id",
    )?;

    let contacts = stmt
        .query_map([], row_to_contact)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contacts)
}

pub fn find_by_id(conn: &Connection, id: Id<Contact>) -> ContactsResult<Option<Contact>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, phone, email FROM contacts WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id.value], row_to_contact);

    match result {
        Ok(contact) => Ok(Some(contact)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Deletes one contact. A missing id is an error, not a silent no-op.
pub fn delete_by_id(conn: &Connection, id: Id<Contact>) -> ContactsResult<()> {
    let changed = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id.value])?;
    if changed == 0 {
        return Err(ContactsError::NotFound {
            id: id.to_string(),
        });
    }
    Ok(())
}

pub fn count(conn: &Connection) -> ContactsResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn row_to_contact(row: &rusqlite::Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: Id::new(row.get(0)?),
        name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get(3)?,
    })
}
