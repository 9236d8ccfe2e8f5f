use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactsError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Contact not found: {id}")]
    NotFound { id: String },

    #[error("No contact selected")]
    NothingSelected,

    #[error("Unsupported schema version {found}")]
    UnsupportedSchema { found: i64 },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl ContactsError {
    /// True for failures caused by user input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, ContactsError::BlankField { .. })
    }
}

pub type ContactsResult<T> = Result<T, ContactsError>;
