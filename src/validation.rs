use crate::error::{ContactsError, ContactsResult};
use crate::model::NewContact;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> ContactsResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ContactsError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Trims and checks all three contact fields, reporting the first blank one.
pub fn new_contact(name: &str, phone: &str, email: &str) -> ContactsResult<NewContact> {
    Ok(NewContact {
        name: non_blank(name, "name")?,
        phone: non_blank(phone, "phone")?,
        email: non_blank(email, "email")?,
    })
}

/// Names of every blank field, in form order.
pub fn blank_fields(name: &str, phone: &str, email: &str) -> Vec<&'static str> {
    [("name", name), ("phone", phone), ("email", email)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_accepts_valid_string() {
        assert_eq!(non_blank("hello", "name").unwrap(), "hello");
    }

    #[test]
    fn non_blank_trims_whitespace() {
        assert_eq!(non_blank("  hello  ", "name").unwrap(), "hello");
    }

    #[test]
    fn non_blank_rejects_empty() {
        assert!(non_blank("", "name").is_err());
    }

    #[test]
    fn non_blank_rejects_whitespace_only() {
        assert!(non_blank(" \t ", "name").is_err());
    }

    #[test]
    fn new_contact_trims_every_field() {
        let c = new_contact(" Ana ", "555-1234 ", " ana@x.com").unwrap();
        assert_eq!(c.name, "Ana");
        assert_eq!(c.phone, "555-1234");
        assert_eq!(c.email, "ana@x.com");
    }

    #[test]
    fn new_contact_names_first_blank_field() {
        match new_contact("Ana", "  ", "") {
            Err(ContactsError::BlankField { field }) => assert_eq!(field, "phone"),
            other => panic!("expected blank phone, got {:?}", other),
        }
    }

    #[test]
    fn blank_fields_lists_all_missing() {
        assert_eq!(blank_fields("", "555", " "), vec!["name", "email"]);
        assert!(blank_fields("a", "b", "c").is_empty());
    }
}
