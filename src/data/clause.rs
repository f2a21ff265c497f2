use std::fmt;

use super::term::Term;

fn write_predicate(
    f: &mut fmt::Formatter<'_>,
    predicate: &str,
    args: &[Term],
) -> fmt::Result {
    write!(f, "{}", predicate)?;
    if args.is_empty() {
        return Ok(());
    }
    write!(f, "(")?;
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    write!(f, ")")
}

/// A registered fact: a predicate name applied to ground-or-variable
/// arguments. Arity is implicit in the argument count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fact {
    pub predicate: String,
    pub args: Vec<Term>,
}

impl Fact {
    pub fn new(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Self { predicate: predicate.into(), args }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_predicate(f, &self.predicate, &self.args)
    }
}

/// A goal to resolve: a predicate name plus an ordered argument list mixing
/// constants and variables. Goals are transient; they are built per
/// resolution step and never stored in the knowledge base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Goal {
    pub predicate: String,
    pub args: Vec<Term>,
}

impl Goal {
    pub fn new(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Self { predicate: predicate.into(), args }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_predicate(f, &self.predicate, &self.args)
    }
}

/// An inference rule: the head holds whenever every body goal holds, with
/// variables shared between head and body kept consistent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub head: Goal,
    pub body: Vec<Goal>,
}

impl Rule {
    pub fn new(head: Goal, body: Vec<Goal>) -> Self {
        Self { head, body }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        if self.body.is_empty() {
            return Ok(());
        }
        write!(f, " :- ")?;
        for (index, goal) in self.body.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", goal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Fact, Goal, Rule};
    use crate::data::Term;

    #[test]
    fn fact_display() {
        let fact = Fact::new("parent", vec![Term::sym("alice"), Term::sym("bob")]);
        assert_eq!(fact.to_string(), "parent(alice, bob)");

        let bare = Fact::new("halted", vec![]);
        assert_eq!(bare.to_string(), "halted");
    }

    #[test]
    fn rule_display() {
        let rule = Rule::new(
            Goal::new("grandparent", vec![Term::var("X"), Term::var("Z")]),
            vec![
                Goal::new("parent", vec![Term::var("X"), Term::var("Y")]),
                Goal::new("parent", vec![Term::var("Y"), Term::var("Z")]),
            ],
        );
        assert_eq!(
            rule.to_string(),
            "grandparent(X, Z) :- parent(X, Y), parent(Y, Z)"
        );
    }
}
