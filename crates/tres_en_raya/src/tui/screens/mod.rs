//! Screen implementations.

mod in_match;
mod setup;

pub use in_match::MatchScreen;
pub use setup::SetupScreen;
