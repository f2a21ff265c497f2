use std::collections::HashMap;

use crate::data::Term;

/// A substitution environment: the variable bindings committed along one
/// branch of the search.
///
/// Environments are copy-on-write. Extending one (during unification)
/// always operates on a fresh clone, so sibling branches of the search tree
/// never observe each other's bindings. A variable, once bound in a given
/// environment instance, is never rebound in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    map: HashMap<String, Term>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// The raw binding for `name`, without following chains.
    pub fn lookup(&self, name: &str) -> Option<&Term> {
        self.map.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.map.iter().map(|(name, term)| (name.as_str(), term))
    }

    /// Record `name -> term`. Crate-internal: only unification extends an
    /// environment, and always on a branch-private clone.
    pub(crate) fn bind(&mut self, name: String, term: Term) {
        self.map.insert(name, term);
    }

    /// Follow variable-to-term chains starting from `term` until reaching a
    /// constant, an unbound variable, or a variable bound to itself (treated
    /// as unbound). Total and side-effect-free.
    pub fn walk(&self, term: &Term) -> Term {
        let mut current = term.clone();
        loop {
            let next = match &current {
                Term::Variable(name) => match self.map.get(name.as_str()) {
                    Some(bound) if bound != &current => bound.clone(),
                    _ => break,
                },
                Term::Constant(_) => break,
            };
            current = next;
        }
        current
    }

    /// A copy of this environment with every binding walked to its terminal
    /// term. Used when an environment is about to be yielded as a complete
    /// solution.
    pub fn resolved(&self) -> Bindings {
        let map = self
            .map
            .iter()
            .map(|(name, term)| (name.clone(), self.walk(term)))
            .collect();
        Bindings { map }
    }
}
