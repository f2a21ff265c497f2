//! Unification, substitution environments, and the backtracking resolver.
//!
//! The search is single-threaded and pull-driven: every choice point is
//! suspended inside a lazy iterator and resumed only when the consumer asks
//! for the next solution. Branch isolation comes from copy-on-write
//! environments, never from locking.

mod bindings;
mod engine;
mod query;
mod unify;

pub use bindings::Bindings;
pub use engine::{resolve, resolve_body, Branches};
pub use query::{Query, Solution};
pub use unify::unify;
