use std::collections::BTreeMap;
use std::fmt;

use crate::data::{Goal, KnowledgeBase, Term};

use super::bindings::Bindings;
use super::engine::{resolve, Branches};

/// One complete answer to a query: every variable that appeared in the
/// query arguments, mapped to its dereferenced term. A variable the search
/// never bound maps to itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    bindings: BTreeMap<String, Term>,
}

impl Solution {
    /// The resolved term for a query variable.
    pub fn get(&self, variable: &str) -> Option<&Term> {
        self.bindings.get(variable)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.bindings.iter().map(|(name, term)| (name.as_str(), term))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bindings.is_empty() {
            return write!(f, "true");
        }
        for (index, (name, term)) in self.bindings.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", name, term)?;
        }
        Ok(())
    }
}

/// Lazy stream of [`Solution`]s for one query.
///
/// Wraps the resolution stream and projects each yielded environment onto
/// the variables of the original query, dereferencing as it goes. Dropping
/// the iterator abandons the remaining search; no cleanup is needed because
/// resolution acquires no external resources.
pub struct Query<'kb> {
    branches: Branches<'kb>,
    variables: Vec<String>,
}

impl<'kb> Query<'kb> {
    pub(crate) fn new(kb: &'kb KnowledgeBase, goal: Goal) -> Self {
        let mut variables = Vec::new();
        for arg in &goal.args {
            if let Term::Variable(name) = arg {
                if !variables.iter().any(|seen| seen == name) {
                    variables.push(name.clone());
                }
            }
        }
        let branches = resolve(kb, goal, Bindings::new());
        Self { branches, variables }
    }
}

impl Iterator for Query<'_> {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        let env = self.branches.next()?;
        let bindings = self
            .variables
            .iter()
            .map(|name| (name.clone(), env.walk(&Term::Variable(name.clone()))))
            .collect();
        Some(Solution { bindings })
    }
}
