// Data Models
pub mod roster;

pub use roster::{Guide, Roster};
