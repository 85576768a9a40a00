//! Type-safe wrappers for identifiers, dates and roles.

pub mod ids;
pub mod role;
pub mod time;

pub use ids::{MatchId, PlayerId};
pub use role::Role;
pub use time::MatchDate;
