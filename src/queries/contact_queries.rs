use rusqlite::Connection;

use crate::db::contact_repo;
use crate::error::ContactsResult;
use crate::model::{Contact, Id};

pub fn all_contacts(conn: &Connection) -> ContactsResult<Vec<Contact>> {
    contact_repo::fetch_all_ordered_by_name(conn)
}

pub fn get_contact(conn: &Connection, id: Id<Contact>) -> ContactsResult<Option<Contact>> {
    contact_repo::find_by_id(conn, id)
}

/// Filters an already-loaded list. The term is trimmed and lower-cased;
/// name and email are compared case-insensitively, phone as stored.
/// A blank term keeps every contact.
pub fn search<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return contacts.iter().collect();
    }

    contacts.iter().filter(|c| matches(c, &term)).collect()
}

fn matches(contact: &Contact, term: &str) -> bool {
    contact.name.to_lowercase().contains(term)
        || contact.phone.contains(term)
        || contact.email.to_lowercase().contains(term)
}

pub fn find_in(contacts: &[Contact], id: Id<Contact>) -> Option<&Contact> {
    contacts.iter().find(|c| c.id == id)
}

/// Contacts whose name contains `query`, preferring an exact
/// case-insensitive match when several qualify.
pub fn find_by_name<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let lower = query.to_lowercase();
    let matches: Vec<&Contact> = contacts
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&lower))
        .collect();

    if matches.len() > 1 {
        if let Some(exact) = matches.iter().find(|c| c.name.to_lowercase() == lower) {
            return vec![*exact];
        }
    }
    matches
}
