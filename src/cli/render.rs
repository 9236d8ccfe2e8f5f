//! Pure projections from directory state to terminal text.

use crate::cli::session::{ConfirmationRequest, Notification, NotificationKind};
use crate::model::Contact;

pub const EMPTY_STATE: &str = "No contacts yet. Use 'add' to add your first contact.";

/// Renders the contact list. `filter` only changes the empty-state text.
pub fn list_view(contacts: &[&Contact], filter: &str) -> String {
    if contacts.is_empty() {
        let filter = filter.trim();
        if filter.is_empty() {
            return EMPTY_STATE.to_string();
        }
        return format!("No contacts match '{}'.", filter);
    }

    let id_width = contacts
        .iter()
        .map(|c| c.id.to_string().len())
        .max()
        .unwrap_or(1);
    let name_width = contacts.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);
    let phone_width = contacts.iter().map(|c| c.phone.chars().count()).max().unwrap_or(0);

    let mut out = format!("Contacts ({}):\n", contacts.len());
    for c in contacts {
        let line = format!(
            "  {:>iw$}  {:<nw$}  {:<pw$}  {}",
            c.id.value,
            c.name,
            c.phone,
            c.email,
            iw = id_width,
            nw = name_width,
            pw = phone_width,
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn detail_view(contact: &Contact) -> String {
    format!(
        "{}\n  Phone: {}\n  Email: {}\n",
        contact.name, contact.phone, contact.email
    )
}

pub fn notification(n: &Notification) -> String {
    let tag = match n.kind {
        NotificationKind::Success => "ok",
        NotificationKind::Warning => "!",
        NotificationKind::Error => "error",
    };
    format!("[{}] {}", tag, n.message)
}

pub fn confirmation_prompt(request: &ConfirmationRequest) -> String {
    format!("Delete {}? This cannot be undone (y/n): ", request.name)
}
