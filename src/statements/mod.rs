//! Statement sets and the providers that supply them
//!
//! The round state machine only ever sees a validated `StatementSet`.
//! Provider failures are absorbed by `fetch_statements`, which swaps in
//! the built-in fallback set.

pub mod fallback;
pub mod provider;
pub mod set;

pub use fallback::{fallback_statements, OfflineProvider};
pub use provider::{fetch_statements, StatementProvider};
pub use set::{Statement, StatementSet};
