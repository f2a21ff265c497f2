use std::fmt;

/// Atomic constant values the engine compares for equality.
///
/// Constants are deliberately flat: there are no lists or nested functors,
/// so unification never recurses into a constant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// A bare symbolic name, e.g. `alice`.
    Symbol(String),
    /// A machine integer, e.g. `34`.
    Int(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Symbol(name) => write!(f, "{}", name),
            Value::Int(value) => write!(f, "{}", value),
        }
    }
}

/// A term: either a named logic variable or an atomic constant.
///
/// Terms are small immutable values, cloned freely rather than owned by any
/// one structure.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Variable(String),
    Constant(Value),
}

impl Term {
    /// Construct a variable term.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Construct a symbolic constant.
    pub fn sym(name: impl Into<String>) -> Self {
        Self::Constant(Value::Symbol(name.into()))
    }

    /// Construct an integer constant.
    pub fn int(value: i64) -> Self {
        Self::Constant(Value::Int(value))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// The variable's name, if this term is a variable.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Term::Variable(name) => Some(name),
            Term::Constant(_) => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(name) => write!(f, "{}", name),
            Term::Constant(value) => write!(f, "{}", value),
        }
    }
}
