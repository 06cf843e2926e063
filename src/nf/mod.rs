//! CNF normalization and clause splitting (spec.md §4.B, §4.C).
//!
//! Grounded in the push-down/distribute-to-fixpoint approach of
//! `rsproof::src::expr::Expr::to_cnf`, adapted to purely functional
//! bottom-up rebuilding (spec.md §9's parent-pointer-free alternative):
//! no node stores a link to its parent, each helper recurses into its
//! children before deciding anything about itself, and that recursion is
//! what reaches the fixed point — there is no separate "keep looping
//! until nothing changes" driver because a single bottom-up pass already
//! cannot leave anything further to push or distribute.

use crate::expr::{Clause, Literal, Sentence};
use crate::util::Counter;

/// Pushes negations down to the literals via De Morgan's laws, collapsing
/// any double negation uncovered along the way (spec.md §4.B step 2).
fn push_negation(s: Sentence) -> Sentence {
    match s {
        Sentence::Not(inner) => match *inner {
            Sentence::Not(x) => push_negation(*x),
            Sentence::And(a, b) => Sentence::or(
                push_negation(Sentence::not(*a)),
                push_negation(Sentence::not(*b)),
            ),
            Sentence::Or(a, b) => Sentence::and(
                push_negation(Sentence::not(*a)),
                push_negation(Sentence::not(*b)),
            ),
            lit @ Sentence::Literal(_) => Sentence::not(lit),
        },
        Sentence::And(a, b) => Sentence::and(push_negation(*a), push_negation(*b)),
        Sentence::Or(a, b) => Sentence::or(push_negation(*a), push_negation(*b)),
        lit @ Sentence::Literal(_) => lit,
    }
}

/// Distributes `|` over `&`, assuming `a` and `b` are already in CNF.
fn distribute_or(a: Sentence, b: Sentence) -> Sentence {
    match (a, b) {
        (Sentence::And(a1, a2), b) => {
            Sentence::and(distribute_or(*a1, b.clone()), distribute_or(*a2, b))
        }
        (a, Sentence::And(b1, b2)) => {
            Sentence::and(distribute_or(a.clone(), *b1), distribute_or(a, *b2))
        }
        (a, b) => Sentence::or(a, b),
    }
}

fn distribute(s: Sentence) -> Sentence {
    match s {
        Sentence::And(a, b) => Sentence::and(distribute(*a), distribute(*b)),
        Sentence::Or(a, b) => distribute_or(distribute(*a), distribute(*b)),
        other => other,
    }
}

/// Normalizes a sentence to conjunctive normal form (spec.md §4.B).
pub fn to_cnf(s: Sentence) -> Sentence {
    distribute(push_negation(s))
}

fn collect_conjuncts(s: Sentence, out: &mut Vec<Sentence>) {
    match s {
        Sentence::And(a, b) => {
            collect_conjuncts(*a, out);
            collect_conjuncts(*b, out);
        }
        other => out.push(other),
    }
}

fn collect_literals(s: Sentence, out: &mut Vec<Literal>) {
    match s {
        Sentence::Or(a, b) => {
            collect_literals(*a, out);
            collect_literals(*b, out);
        }
        Sentence::Literal(lit) => out.push(lit),
        Sentence::Not(inner) => match *inner {
            Sentence::Literal(lit) => out.push(lit.negated()),
            _ => unreachable!("a CNF literal is a predicate, possibly negated"),
        },
        Sentence::And(_, _) => unreachable!("a CNF clause cannot contain a nested conjunction"),
    }
}

/// Splits a CNF sentence into its clauses (spec.md §4.C): each maximal
/// `&`-free subtree becomes one [`Clause`], its `|`-tree linearized into
/// a literal vector. `ids` mints each clause's debugging id.
pub fn split_clauses(cnf: Sentence, ids: &mut Counter) -> Vec<Clause> {
    let mut conjuncts = Vec::new();
    collect_conjuncts(cnf, &mut conjuncts);

    conjuncts
        .into_iter()
        .map(|conjunct| {
            let mut literals = Vec::new();
            collect_literals(conjunct, &mut literals);
            Clause::new(ids.next(), literals)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use super::*;
    use crate::expr::Term;

    fn lit(name: &str) -> Sentence {
        Sentence::Literal(Literal::new(Rc::from(name), vec![]))
    }

    #[test]
    fn demorgan_pushes_negation_through_and() {
        let s = Sentence::not(Sentence::and(lit("P"), lit("Q")));
        let expected = Sentence::or(Sentence::not(lit("P")), Sentence::not(lit("Q")));
        assert_eq!(push_negation(s), expected);
    }

    #[test]
    fn demorgan_pushes_negation_through_or() {
        let s = Sentence::not(Sentence::or(lit("P"), lit("Q")));
        let expected = Sentence::and(Sentence::not(lit("P")), Sentence::not(lit("Q")));
        assert_eq!(push_negation(s), expected);
    }

    #[test]
    fn nested_negation_collapses_while_pushing() {
        let s = Sentence::not(Sentence::not(Sentence::and(lit("P"), lit("Q"))));
        assert_eq!(push_negation(s), Sentence::and(lit("P"), lit("Q")));
    }

    #[test]
    fn distribute_or_over_and() {
        let s = Sentence::or(lit("P"), Sentence::and(lit("Q"), lit("R")));
        let expected = Sentence::and(
            Sentence::or(lit("P"), lit("Q")),
            Sentence::or(lit("P"), lit("R")),
        );
        assert_eq!(distribute(s), expected);
    }

    #[test]
    fn split_clauses_produces_one_clause_per_conjunct() {
        let mut ids = Counter::new();
        let cnf = Sentence::and(
            Sentence::or(lit("P"), lit("Q")),
            Sentence::not(lit("R")),
        );
        let clauses = split_clauses(cnf, &mut ids);
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].literals.len(), 2);
        assert_eq!(clauses[1].literals.len(), 1);
        assert!(clauses[1].literals[0].is_negated());
    }

    #[test]
    fn split_clauses_assigns_increasing_ids() {
        let mut ids = Counter::new();
        let cnf = Sentence::and(lit("P"), lit("Q"));
        let clauses = split_clauses(cnf, &mut ids);
        assert_eq!(clauses[0].id, 0);
        assert_eq!(clauses[1].id, 1);
    }

    #[test]
    fn implication_normalizes_end_to_end() {
        let a = Sentence::Literal(Literal::new(
            Rc::from("P"),
            vec![Term::Const(Rc::from("A"))],
        ));
        let b = Sentence::Literal(Literal::new(
            Rc::from("Q"),
            vec![Term::Const(Rc::from("A"))],
        ));
        let cnf = to_cnf(Sentence::implies(a, b));
        let mut ids = Counter::new();
        let clauses = split_clauses(cnf, &mut ids);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].literals.len(), 2);
    }
}
