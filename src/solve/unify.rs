//! Pairwise unification of argument lists.

use crate::data::Term;

use super::bindings::Bindings;

/// Attempt to reconcile two argument lists under `env`.
///
/// Works left to right: both sides are dereferenced through `env`, then a
/// variable on either side is bound to the other side's dereferenced term,
/// and two constants must be equal. Lists of unequal length never unify.
///
/// `env` itself is never mutated; success returns an extended copy, failure
/// returns `None`. Failure is the ordinary outcome of probing a
/// non-matching fact and carries no diagnostic.
///
/// There is no occurs-check: with atomic arguments a variable can only ever
/// be bound to a constant or another variable, so cyclic structures cannot
/// be built in the first place.
pub fn unify(pattern: &[Term], target: &[Term], env: &Bindings) -> Option<Bindings> {
    if pattern.len() != target.len() {
        return None;
    }

    let mut out = env.clone();
    for (p, t) in pattern.iter().zip(target) {
        let p = out.walk(p);
        let t = out.walk(t);
        match (p, t) {
            (Term::Variable(name), other) | (other, Term::Variable(name)) => {
                out.bind(name, other);
            }
            (Term::Constant(a), Term::Constant(b)) => {
                if a != b {
                    return None;
                }
            }
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::unify;
    use crate::data::Term;
    use crate::solve::Bindings;

    #[test]
    fn variable_binds_to_constant() {
        let env = Bindings::new();
        let out = unify(&[Term::var("X")], &[Term::sym("a")], &env)
            .expect("unification must succeed");
        assert_eq!(out.walk(&Term::var("X")), Term::sym("a"));
        assert!(env.is_empty(), "input environment must stay untouched");
    }

    #[test]
    fn equal_constants_unify_without_bindings() {
        let out = unify(&[Term::sym("a")], &[Term::sym("a")], &Bindings::new())
            .expect("unification must succeed");
        assert!(out.is_empty());
    }

    #[test]
    fn distinct_constants_fail() {
        assert!(unify(&[Term::sym("a")], &[Term::sym("b")], &Bindings::new()).is_none());
        assert!(unify(&[Term::int(1)], &[Term::int(2)], &Bindings::new()).is_none());
    }

    #[test]
    fn unequal_arity_is_a_hard_failure() {
        let env = Bindings::new();
        assert!(unify(&[Term::sym("a")], &[], &env).is_none());
        assert!(
            unify(
                &[Term::sym("a")],
                &[Term::sym("a"), Term::sym("b")],
                &env
            )
            .is_none()
        );
    }

    #[test]
    fn symmetry_modulo_binding_side() {
        let env = Bindings::new();
        let left = unify(&[Term::var("X")], &[Term::sym("a")], &env).unwrap();
        let right = unify(&[Term::sym("a")], &[Term::var("X")], &env).unwrap();
        assert_eq!(left.walk(&Term::var("X")), right.walk(&Term::var("X")));
    }

    #[test]
    fn bound_variable_acts_as_its_value() {
        let env = Bindings::new();
        // X = a via the first pair, then X must match a in the second.
        let out = unify(
            &[Term::var("X"), Term::var("X")],
            &[Term::sym("a"), Term::sym("a")],
            &env,
        );
        assert!(out.is_some());

        let clash = unify(
            &[Term::var("X"), Term::var("X")],
            &[Term::sym("a"), Term::sym("b")],
            &env,
        );
        assert!(clash.is_none(), "shared variable cannot take two values");
    }

    #[test]
    fn variable_binds_to_variable() {
        let out = unify(&[Term::var("X")], &[Term::var("Y")], &Bindings::new())
            .expect("var-var unification must succeed");
        // The chain X -> Y is recorded; Y stays unbound.
        assert_eq!(out.walk(&Term::var("X")), Term::var("Y"));
    }

    #[test]
    fn unification_respects_prior_environment() {
        let env = Bindings::new();
        let env2 = unify(&[Term::var("X")], &[Term::sym("a")], &env).unwrap();
        // Re-unifying X against b under the extended environment must fail,
        // while the original environment still allows it.
        assert!(unify(&[Term::var("X")], &[Term::sym("b")], &env2).is_none());
        assert!(unify(&[Term::var("X")], &[Term::sym("b")], &env).is_some());
    }
}
