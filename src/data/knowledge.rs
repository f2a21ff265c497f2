use super::clause::{Fact, Goal, Rule};
use super::term::Term;
use crate::solve::Query;

/// An explicit, caller-owned store of facts and rules.
///
/// Both collections are append-only and insertion-ordered; registration does
/// no deduplication and no arity validation. A fact registered with the
/// wrong arity is not rejected, it simply never unifies. The knowledge base
/// is read-only while a [`Query`] borrowed from it is being consumed, and it
/// provides no internal synchronization: embedders that interleave
/// population and querying across threads must serialize externally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KnowledgeBase {
    facts: Vec<Fact>,
    rules: Vec<Rule>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fact.
    pub fn add_fact(&mut self, predicate: impl Into<String>, args: Vec<Term>) {
        self.facts.push(Fact::new(predicate, args));
    }

    /// Append a rule.
    pub fn add_rule(&mut self, head: Goal, body: Vec<Goal>) {
        self.rules.push(Rule::new(head, body));
    }

    /// Facts registered under `predicate`, in insertion order.
    pub fn facts_for(&self, predicate: &str) -> impl Iterator<Item = &Fact> + '_ {
        let predicate = predicate.to_owned();
        self.facts.iter().filter(move |fact| fact.predicate == predicate)
    }

    /// Rules whose head predicate is `predicate`, in insertion order.
    pub fn rules_for(&self, predicate: &str) -> impl Iterator<Item = &Rule> + '_ {
        let predicate = predicate.to_owned();
        self.rules.iter().filter(move |rule| rule.head.predicate == predicate)
    }

    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Resolve `predicate(args)` against this knowledge base, starting from
    /// an empty environment.
    ///
    /// The returned iterator is lazy: the proof tree is explored depth-first
    /// only as solutions are pulled, so `take(k)` does no work past the k-th
    /// solution. A predicate with no matching facts or rules yields an empty
    /// iterator, never an error.
    ///
    /// A rule set that recurses without a base case makes the search run
    /// forever on the branch that enters it; the engine performs no cycle
    /// detection or depth bounding.
    pub fn query(&self, predicate: impl Into<String>, args: Vec<Term>) -> Query<'_> {
        Query::new(self, Goal::new(predicate, args))
    }
}
