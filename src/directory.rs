use rusqlite::Connection;
use tracing::{debug, warn};

use crate::db::schema;
use crate::error::{ContactsError, ContactsResult};
use crate::model::{Contact, Id};
use crate::ops::contact_ops;
use crate::queries::contact_queries;

/// The in-memory view of the contact store for one session.
///
/// `cache` mirrors the store ordered by name and is reloaded after every
/// successful mutation. `selected` is the contact open in the detail view.
pub struct ContactDirectory {
    conn: Connection,
    cache: Vec<Contact>,
    selected: Option<Id<Contact>>,
}

impl ContactDirectory {
    /// Prepares the schema on `conn` and loads the initial cache.
    pub fn open(conn: Connection) -> ContactsResult<Self> {
        schema::initialize(&conn)?;
        let mut directory = Self {
            conn,
            cache: Vec::new(),
            selected: None,
        };
        directory.refresh()?;
        Ok(directory)
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.cache
    }

    pub fn selected_id(&self) -> Option<Id<Contact>> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Contact> {
        self.selected
            .and_then(|id| contact_queries::find_in(&self.cache, id))
    }

    /// Stores a new contact and reloads the cache. Blank fields and store
    /// failures leave the cache untouched. Once the insert has succeeded a
    /// failed reload is logged and the new contact is merged into the cache.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> ContactsResult<Contact> {
        let contact = contact_ops::add_contact(&self.conn, name, phone, email).map_err(|e| {
            if !e.is_validation() {
                warn!(error = %e, "failed to save contact");
            }
            e
        })?;
        if self.refresh().is_err() {
            let key = (contact.name.as_str(), contact.id.value);
            let pos = self.cache.partition_point(|c| (c.name.as_str(), c.id.value) < key);
            self.cache.insert(pos, contact.clone());
        }
        Ok(contact)
    }

    /// Replaces the cache with the store's current contents. On failure the
    /// previous cache is kept.
    pub fn refresh(&mut self) -> ContactsResult<()> {
        let fresh = contact_queries::all_contacts(&self.conn).map_err(|e| {
            warn!(error = %e, "failed to load contacts");
            e
        })?;
        debug!(count = fresh.len(), "contacts reloaded");
        self.cache = fresh;
        Ok(())
    }

    pub fn search(&self, term: &str) -> Vec<&Contact> {
        contact_queries::search(&self.cache, term)
    }

    /// Marks `id` as the contact in the detail view. An unknown id clears
    /// the selection.
    pub fn select(&mut self, id: Id<Contact>) -> ContactsResult<&Contact> {
        match self.cache.iter().position(|c| c.id == id) {
            Some(pos) => {
                self.selected = Some(id);
                Ok(&self.cache[pos])
            }
            None => {
                self.selected = None;
                Err(ContactsError::NotFound { id: id.to_string() })
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Deletes the selected contact. The caller is responsible for having
    /// obtained the user's confirmation. On failure the selection is kept.
    /// Once the row is gone a failed reload only drops it from the cache.
    pub fn remove_selected(&mut self) -> ContactsResult<Contact> {
        let id = self.selected.ok_or(ContactsError::NothingSelected)?;
        let contact = contact_queries::find_in(&self.cache, id)
            .cloned()
            .ok_or_else(|| ContactsError::NotFound { id: id.to_string() })?;

        contact_ops::remove_contact(&self.conn, id).map_err(|e| {
            warn!(%id, error = %e, "failed to delete contact");
            e
        })?;
        self.selected = None;
        if self.refresh().is_err() {
            self.cache.retain(|c| c.id != id);
        }
        Ok(contact)
    }
}
