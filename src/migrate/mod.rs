use std::path::Path;

use rusqlite::Connection;
use serde_json::Value;
use tracing::{info, warn};

use crate::db::{contact_repo, schema};
use crate::error::ContactsResult;
use crate::validation;

/// Imports contacts from a JSON file into a SQLite database, appending to
/// whatever the database already holds.
///
/// Accepted shapes: a bare array of `{name, phone, email}` objects, an object
/// with a `contacts` array, or a browser storage export whose `data.data`
/// lists tables with `tableName` and `rows`. Source ids are ignored.
pub fn import_json(json_path: &Path, db_path: &Path) -> ContactsResult<ImportStats> {
    let json_str = std::fs::read_to_string(json_path)?;
    let json: Value = serde_json::from_str(&json_str)?;

    let mut conn = Connection::open(db_path)?;
    schema::initialize(&conn)?;

    let stats = import_contacts(&mut conn, &json)?;
    info!(imported = stats.imported, skipped = stats.skipped, "import finished");
    Ok(stats)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub imported: usize,
    pub skipped: usize,
}

/// Inserts every valid record in one transaction. Records with a blank or
/// missing field are skipped; a storage failure rolls the whole import back.
pub fn import_contacts(conn: &mut Connection, json: &Value) -> ContactsResult<ImportStats> {
    let records = contact_records(json);
    let tx = conn.transaction()?;
    let mut stats = ImportStats::default();

    for (index, record) in records.iter().enumerate() {
        let field = |key: &str| record[key].as_str().unwrap_or("").to_string();
        match validation::new_contact(&field("name"), &field("phone"), &field("email")) {
            Ok(new) => {
                contact_repo::insert(&tx, &new)?;
                stats.imported += 1;
            }
            Err(e) => {
                warn!(index, error = %e, "skipping record");
                stats.skipped += 1;
            }
        }
    }

    tx.commit()?;
    Ok(stats)
}

fn contact_records(json: &Value) -> Vec<&Value> {
    if let Some(arr) = json.as_array() {
        return arr.iter().collect();
    }
    if let Some(arr) = json["contacts"].as_array() {
        return arr.iter().collect();
    }
    json["data"]["data"]
        .as_array()
        .into_iter()
        .flatten()
        .filter(|table| table["tableName"].as_str() == Some("contacts"))
        .filter_map(|table| table["rows"].as_array())
        .flatten()
        .collect()
}

/// Writes every contact, ordered by name, as a pretty-printed JSON array.
/// Returns the number of contacts written.
pub fn export_json(db_path: &Path, json_path: &Path) -> ContactsResult<usize> {
    let conn = Connection::open(db_path)?;
    schema::initialize(&conn)?;

    let contacts = contact_repo::fetch_all_ordered_by_name(&conn)?;
    std::fs::write(json_path, serde_json::to_string_pretty(&contacts)?)?;
    info!(count = contacts.len(), path = %json_path.display(), "export finished");
    Ok(contacts.len())
}
