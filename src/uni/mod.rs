//! Unification and substitution over terms (spec.md §4.D, §4.E).
//!
//! Arguments here are never compound (no function symbols beyond 0-ary
//! constants), so unification is the direct recursive algorithm spec.md
//! §4.D spells out — no Martelli–Montanari decompose/swap machinery like
//! the teacher's general `rsproof::src::uni::Unifier` needs for nested
//! function terms.

use std::collections::HashMap;

use crate::expr::{Clause, Literal, Term, VarId};

/// A substitution, keyed by variable identity (spec.md §4.D: "keyed by
/// variable identity, not by spelling"). Grows functionally — every
/// extension returns a new `Substitution`, leaving its input untouched
/// (spec.md §4.D: "unification never mutates its inputs; only σ grows").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution(HashMap<VarId, Term>);

impl Substitution {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn get(&self, v: VarId) -> Option<&Term> {
        self.0.get(&v)
    }

    fn extended(&self, v: VarId, t: Term) -> Self {
        let mut next = self.0.clone();
        next.insert(v, t);
        Self(next)
    }

    /// Resolves `t` through the substitution to a fixed point: follows
    /// variable-to-variable chains until a constant or an unbound
    /// variable is reached (spec.md §4.E).
    fn resolve(&self, t: &Term) -> Term {
        let mut cur = t.clone();
        while let Term::Var(id) = cur {
            match self.0.get(&id) {
                Some(next) => cur = next.clone(),
                None => break,
            }
        }
        cur
    }
}

/// Unifies two terms under substitution `sigma`, returning the extended
/// substitution on success (spec.md §4.D).
pub fn unify(x: &Term, y: &Term, sigma: &Substitution) -> Option<Substitution> {
    match (x, y) {
        (Term::Var(v), _) => unify_var(*v, y, sigma),
        (_, Term::Var(v)) => unify_var(*v, x, sigma),
        (Term::Const(a), Term::Const(b)) => {
            if a == b {
                Some(sigma.clone())
            } else {
                None
            }
        }
    }
}

fn unify_var(v: VarId, t: &Term, sigma: &Substitution) -> Option<Substitution> {
    if let Some(bound) = sigma.get(v).cloned() {
        return unify(&bound, t, sigma);
    }
    if let Term::Var(tv) = t {
        if let Some(bound) = sigma.get(*tv).cloned() {
            return unify(&Term::Var(v), &bound, sigma);
        }
    }
    Some(sigma.extended(v, t.clone()))
}

/// Unifies two equal-length term lists left to right, threading the
/// substitution through (spec.md §4.D: "unify head, then tail under the
/// resulting substitution; fail if lengths differ").
pub fn unify_args(xs: &[Term], ys: &[Term], sigma: &Substitution) -> Option<Substitution> {
    if xs.len() != ys.len() {
        return None;
    }
    let mut sigma = sigma.clone();
    for (x, y) in xs.iter().zip(ys) {
        sigma = unify(x, y, &sigma)?;
    }
    Some(sigma)
}

/// Unifies two literals: same base predicate name, complementary sign,
/// unifiable argument lists. This is the pairing rule resolution uses to
/// pick a literal from the other clause to resolve against (spec.md
/// §4.G).
pub fn unify_complementary(a: &Literal, b: &Literal) -> Option<Substitution> {
    if a.base_name() != b.base_name() || a.is_negated() == b.is_negated() {
        return None;
    }
    unify_args(&a.args, &b.args, &Substitution::new())
}

/// Applies `sigma` to every argument of every literal in `clause`,
/// resolving each to a fixed point (spec.md §4.E): materializes the
/// bindings so the clause can outlive `sigma`.
pub fn subst_clause(sigma: &Substitution, clause: &Clause) -> Clause {
    let literals = clause
        .literals
        .iter()
        .map(|lit| {
            let args = lit.args.iter().map(|t| sigma.resolve(t)).collect();
            Literal::new(lit.name.clone(), args)
        })
        .collect();
    Clause::new(clause.id, literals)
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use super::*;
    use crate::expr::VarGen;

    #[test]
    fn unifies_two_constants_of_the_same_value() {
        let a = Term::Const(Rc::from("Tom"));
        let b = Term::Const(Rc::from("Tom"));
        assert!(unify(&a, &b, &Substitution::new()).is_some());
    }

    #[test]
    fn fails_on_distinct_constants() {
        let a = Term::Const(Rc::from("Tom"));
        let b = Term::Const(Rc::from("Bob"));
        assert!(unify(&a, &b, &Substitution::new()).is_none());
    }

    #[test]
    fn binds_a_variable_to_a_constant() {
        let mut vars = VarGen::new();
        let v = vars.fresh();
        let c = Term::Const(Rc::from("Tom"));
        let sigma = unify(&Term::Var(v), &c, &Substitution::new()).unwrap();
        assert_eq!(sigma.resolve(&Term::Var(v)), c);
    }

    #[test]
    fn chains_variable_to_variable_bindings() {
        let mut vars = VarGen::new();
        let x = vars.fresh();
        let y = vars.fresh();
        let c = Term::Const(Rc::from("Tom"));
        let sigma = unify(&Term::Var(x), &Term::Var(y), &Substitution::new()).unwrap();
        let sigma = unify(&Term::Var(y), &c, &sigma).unwrap();
        assert_eq!(sigma.resolve(&Term::Var(x)), c);
        assert_eq!(sigma.resolve(&Term::Var(y)), c);
    }

    #[test]
    fn unify_never_mutates_its_input_substitution() {
        let mut vars = VarGen::new();
        let v = vars.fresh();
        let c = Term::Const(Rc::from("Tom"));
        let before = Substitution::new();
        let _after = unify(&Term::Var(v), &c, &before).unwrap();
        assert!(before.get(v).is_none());
    }

    #[test]
    fn unify_args_fails_on_mismatched_lengths() {
        let xs = vec![Term::Const(Rc::from("A"))];
        let ys = vec![Term::Const(Rc::from("A")), Term::Const(Rc::from("B"))];
        assert!(unify_args(&xs, &ys, &Substitution::new()).is_none());
    }

    #[test]
    fn complementary_literals_require_opposite_sign_same_name() {
        let a = Literal::new(Rc::from("P"), vec![]);
        let b = Literal::new(Rc::from("-P"), vec![]);
        assert!(unify_complementary(&a, &b).is_some());
        assert!(unify_complementary(&a, &a).is_none());
    }

    #[test]
    fn subst_clause_materializes_bindings() {
        let mut vars = VarGen::new();
        let v = vars.fresh();
        let c = Term::Const(Rc::from("Tom"));
        let sigma = unify(&Term::Var(v), &c, &Substitution::new()).unwrap();
        let clause = Clause::new(0, vec![Literal::new(Rc::from("P"), vec![Term::Var(v)])]);
        let out = subst_clause(&sigma, &clause);
        assert_eq!(out.literals[0].args[0], c);
    }
}
