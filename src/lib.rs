//! hornlog: a minimal logic-programming inference engine.
//!
//! Facts and rules over named predicates are stored in an explicit
//! [`KnowledgeBase`]; queries are resolved by unification and depth-first
//! backtracking (SLD resolution, as in a simplified Prolog) and produced as
//! a lazy iterator of solutions. Arguments are atomic constants or
//! variables only: there are no compound terms, no arithmetic built-ins,
//! and no cut or negation.
//!
//! Because the engine performs no cycle detection, a rule set that recurses
//! without a base case makes resolution run forever once the search enters
//! that branch. Pulling finitely many solutions (`take`, `next`) is the
//! caller's tool for bounding work.
//!
//! ```
//! use hornlog::{Goal, KnowledgeBase, Term};
//!
//! let mut kb = KnowledgeBase::new();
//! kb.add_fact("parent", vec![Term::sym("alice"), Term::sym("bob")]);
//! kb.add_fact("parent", vec![Term::sym("bob"), Term::sym("carol")]);
//! kb.add_rule(
//!     Goal::new("grandparent", vec![Term::var("X"), Term::var("Z")]),
//!     vec![
//!         Goal::new("parent", vec![Term::var("X"), Term::var("Y")]),
//!         Goal::new("parent", vec![Term::var("Y"), Term::var("Z")]),
//!     ],
//! );
//!
//! let mut solutions = kb.query("grandparent", vec![Term::sym("alice"), Term::var("Who")]);
//! let first = solutions.next().expect("one solution");
//! assert_eq!(first.get("Who"), Some(&Term::sym("carol")));
//! assert!(solutions.next().is_none());
//! ```

pub mod data;
pub mod parser;
pub mod solve;

pub use data::{Fact, Goal, KnowledgeBase, Rule, Term, Value};
pub use parser::{ParseError, Parser, Program};
pub use solve::{resolve, resolve_body, unify, Bindings, Branches, Query, Solution};
