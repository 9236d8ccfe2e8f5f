use rusqlite::Connection;

use crate::error::{ContactsError, ContactsResult};

/// The only schema version this build reads or writes.
pub const SCHEMA_VERSION: i64 = 1;

/// Initialize the database schema. Creates the contacts table and its
/// indexes if they don't exist, then stamps the schema version.
pub fn initialize(conn: &Connection) -> ContactsResult<()> {
    let found = version(conn)?;
    if found != 0 && found != SCHEMA_VERSION {
        return Err(ContactsError::UnsupportedSchema { found });
    }

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            phone TEXT NOT NULL,
            email TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS contacts_name ON contacts(name);
        CREATE INDEX IF NOT EXISTS contacts_phone ON contacts(phone);
        CREATE INDEX IF NOT EXISTS contacts_email ON contacts(email);
        ",
    )?;

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    Ok(())
}

/// Read the stamped schema version; 0 for a fresh database.
pub fn version(conn: &Connection) -> ContactsResult<i64> {
    let v = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(v)
}

/// Create an in-memory connection with the schema applied, for tests.
/// Panics if SQLite cannot open or initialize it.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
