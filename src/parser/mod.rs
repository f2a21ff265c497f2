//! Textual front end: a small hand-written parser for fact, rule, and
//! query statements.

mod syntax;

pub use syntax::{ParseError, Parser, Program};
