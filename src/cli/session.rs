use crate::cli::render;
use crate::directory::ContactDirectory;
use crate::model::{Contact, Id};
use crate::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// A transient message reporting the outcome of a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }
}

/// Values typed into the add-contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// First half of the delete protocol: the contact the user is asked about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub id: Id<Contact>,
    pub name: String,
}

/// Connects user actions to the directory and projects its state into views.
pub struct Session<'a> {
    directory: &'a mut ContactDirectory,
    pub form: ContactForm,
    filter: String,
    pending_delete: Option<Id<Contact>>,
}

impl<'a> Session<'a> {
    pub fn new(directory: &'a mut ContactDirectory) -> Self {
        Self {
            directory,
            form: ContactForm::default(),
            filter: String::new(),
            pending_delete: None,
        }
    }

    pub fn directory(&self) -> &ContactDirectory {
        &*self.directory
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn pending_delete(&self) -> Option<Id<Contact>> {
        self.pending_delete
    }

    /// The list as currently filtered.
    pub fn list_view(&self) -> String {
        render::list_view(&self.directory.search(&self.filter), &self.filter)
    }

    /// Saves the form. The form is cleared only when the contact was stored.
    pub fn submit_form(&mut self) -> Notification {
        let result = self
            .directory
            .add(&self.form.name, &self.form.phone, &self.form.email);

        match result {
            Ok(contact) => {
                self.form.clear();
                Notification::success(format!("Added {}", contact.name))
            }
            Err(e) if e.is_validation() => {
                let missing =
                    validation::blank_fields(&self.form.name, &self.form.phone, &self.form.email);
                Notification::warning(format!("Required: {}", missing.join(", ")))
            }
            Err(e) => Notification::error(format!("Could not save contact: {}", e)),
        }
    }

    pub fn cancel_form(&mut self) {
        self.form.clear();
    }

    /// Applies a new search term and returns the re-rendered list.
    pub fn search_input(&mut self, term: &str) -> String {
        self.filter = term.to_string();
        self.list_view()
    }

    /// Opens the detail view for `id`. Returns `None` if it no longer exists.
    pub fn activate_row(&mut self, id: Id<Contact>) -> Option<String> {
        self.pending_delete = None;
        self.directory.select(id).ok().map(render::detail_view)
    }

    /// Asks for confirmation before deleting the selected contact. Nothing
    /// is changed until `confirm_delete` is called.
    pub fn request_delete(&mut self) -> Option<ConfirmationRequest> {
        let contact = self.directory.selected()?;
        let request = ConfirmationRequest {
            id: contact.id,
            name: contact.name.clone(),
        };
        self.pending_delete = Some(request.id);
        Some(request)
    }

    /// Completes a pending delete request. A declined or missing request
    /// yields no notification.
    pub fn confirm_delete(&mut self, confirmed: bool) -> Option<Notification> {
        let pending = self.pending_delete.take()?;
        if !confirmed || self.directory.selected_id() != Some(pending) {
            return None;
        }

        Some(match self.directory.remove_selected() {
            Ok(contact) => Notification::success(format!("Deleted {}", contact.name)),
            Err(e) => Notification::error(format!("Could not delete contact: {}", e)),
        })
    }

    pub fn close_detail(&mut self) {
        self.pending_delete = None;
        self.directory.clear_selection();
    }
}
