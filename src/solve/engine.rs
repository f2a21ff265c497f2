//! Depth-first SLD resolution over the knowledge base.
//!
//! Both entry points return boxed lazy iterators: no fact is probed and no
//! rule body is entered until the consumer pulls the next environment. The
//! pending alternatives at every choice point live inside the suspended
//! iterator chain, which is what makes backtracking and early exit free.

use crate::data::{Goal, KnowledgeBase};

use super::bindings::Bindings;
use super::unify::unify;

/// A lazy stream of candidate environments for one branch of the search.
pub type Branches<'kb> = Box<dyn Iterator<Item = Bindings> + 'kb>;

/// Resolve a single goal against the knowledge base under `env`.
///
/// Enumerates every fact registered under the goal's predicate first, then
/// every rule, each in insertion order. A fact contributes the environment
/// extended by unifying the goal against it; a rule contributes every
/// environment produced by resolving its body under the environment
/// extended by unifying the goal against the rule head. Unification failure
/// contributes nothing; an unknown predicate yields an empty stream.
pub fn resolve<'kb>(kb: &'kb KnowledgeBase, goal: Goal, env: Bindings) -> Branches<'kb> {
    let Goal { predicate, args } = goal;

    let fact_args = args.clone();
    let fact_env = env.clone();
    let facts = kb
        .facts_for(&predicate)
        .filter_map(move |fact| unify(&fact_args, &fact.args, &fact_env));

    let rules = kb
        .rules_for(&predicate)
        .flat_map(move |rule| match unify(&args, &rule.head.args, &env) {
            Some(extended) => resolve_body(kb, rule.body.clone(), extended),
            None => Box::new(std::iter::empty()) as Branches<'kb>,
        });

    Box::new(facts.chain(rules))
}

/// Resolve an ordered conjunction of goals, chaining environments left to
/// right.
///
/// An empty conjunction yields exactly one result: the fully dereferenced
/// form of `env`. Otherwise the first goal is resolved and, for each
/// environment it produces, the remaining goals are resolved under that
/// environment — a nested-loop join over choice points, first-goal-major.
/// Variables shared across goals stay consistent because every later goal
/// runs under the extensions committed by earlier ones.
pub fn resolve_body<'kb>(
    kb: &'kb KnowledgeBase,
    goals: Vec<Goal>,
    env: Bindings,
) -> Branches<'kb> {
    let mut goals = goals.into_iter();
    match goals.next() {
        None => Box::new(std::iter::once(env.resolved())),
        Some(first) => {
            let rest: Vec<Goal> = goals.collect();
            Box::new(
                resolve(kb, first, env)
                    .flat_map(move |extended| resolve_body(kb, rest.clone(), extended)),
            )
        }
    }
}
