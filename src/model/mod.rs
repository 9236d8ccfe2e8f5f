pub mod ids;
pub mod contact;

pub use ids::Id;
pub use contact::{Contact, NewContact};
