//! Core value types: terms, clauses, and the knowledge base.
//!
//! Everything here is plain immutable data. Search state lives in
//! [`crate::solve`]; the knowledge base only stores and enumerates.

mod clause;
mod knowledge;
mod term;

pub use clause::{Fact, Goal, Rule};
pub use knowledge::KnowledgeBase;
pub use term::{Term, Value};
