use std::io::{self, Write};

use crate::cli::render;
use crate::cli::session::{Notification, Session};
use crate::model::{Contact, Id};
use crate::queries::contact_queries;

pub struct CLIContext<'a> {
    pub session: Session<'a>,
}

impl<'a> CLIContext<'a> {
    pub fn new(session: Session<'a>) -> Self {
        Self { session }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Prompt for a form field. Pressing Enter keeps the current value.
    pub fn prompt_field(&self, label: &str, current: &str) -> Option<String> {
        let text = if current.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, current)
        };
        let input = self.prompt(&text)?;
        if input.is_empty() {
            Some(current.to_string())
        } else {
            Some(input)
        }
    }

    /// Resolve a contact by id or by (partial) name. Prints why when no
    /// single contact matches.
    pub fn find_contact(&self, args: &str) -> Option<Id<Contact>> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let contacts = self.session.directory().contacts();
        if let Ok(id) = Id::<Contact>::parse(query) {
            if contact_queries::find_in(contacts, id).is_some() {
                return Some(id);
            }
        }

        let matches = contact_queries::find_by_name(contacts, query);
        match matches.len() {
            0 => {
                println!("No contact found matching '{}'", query);
                None
            }
            1 => Some(matches[0].id),
            _ => {
                println!("Multiple matches found:");
                for c in &matches {
                    println!("  {}  {}", c.id, c.name);
                }
                println!("Please be more specific, or use the id.");
                None
            }
        }
    }

    pub fn notify(&self, n: &Notification) {
        println!("{}", render::notification(n));
    }
}
