mod clause;
mod literal;
mod sentence;
mod term;

pub use clause::Clause;
pub use literal::{negate, Literal};
pub use sentence::Sentence;
pub use term::{ConstTable, Term, VarGen, VarId};

/// A term stripped to what the canonical clause id and factoring key
/// care about: a constant's value, or just the fact that a slot holds
/// *some* variable (spec.md §4.G, "Canonical clause id": "the sentinel
/// `'v'` if it is a variable"). Two variables are interchangeable here
/// regardless of which `VarId` they carry — that is the point: it makes
/// clauses that differ only by variable renaming compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalArg {
    Const(std::rc::Rc<str>),
    Var,
}

/// `(name, a₁, …, aₖ)` per spec.md §4.G. Used both as the factoring key
/// (duplicate literals within one clause) and, collected per clause, as
/// the canonical clause id for the prover's loop cutoff.
pub type CanonicalLiteral = (std::rc::Rc<str>, Vec<CanonicalArg>);

pub fn canonical_literal(lit: &Literal) -> CanonicalLiteral {
    let args = lit
        .args
        .iter()
        .map(|t| match t {
            Term::Const(c) => CanonicalArg::Const(c.clone()),
            Term::Var(_) => CanonicalArg::Var,
        })
        .collect();
    (lit.name.clone(), args)
}

/// The canonical id of a whole clause: its literals' canonical keys, in
/// order (spec.md §4.G). Two clauses that differ only in variable naming
/// produce the same id.
pub fn canonical_clause(clause: &Clause) -> Vec<CanonicalLiteral> {
    clause.literals.iter().map(canonical_literal).collect()
}
