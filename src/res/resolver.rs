use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::expr::{canonical_clause, canonical_literal, negate, Clause, CanonicalLiteral, Literal, Term, VarGen, VarId};
use crate::uni::{subst_clause, unify_args, unify_complementary, Substitution};

use super::kb::KnowledgeBase;

const DEPTH_LIMIT: u32 = 500;
const TIMEOUT: Duration = Duration::from_secs(2);

/// Renames every variable in `clause` to a fresh [`VarId`], preserving
/// which occurrences were the same variable (spec.md §4.F:
/// "standardization apart"). `clause.id` is carried over unchanged — it
/// is a debugging/tie-breaking label, not part of the clause's logical
/// identity, so a renamed copy keeps its parent's id.
fn standardize(clause: &Clause, vars: &mut VarGen) -> Clause {
    let mut renamed: std::collections::HashMap<VarId, VarId> = std::collections::HashMap::new();
    let literals = clause
        .literals
        .iter()
        .map(|lit| {
            let args = lit
                .args
                .iter()
                .map(|t| match t {
                    Term::Const(c) => Term::Const(c.clone()),
                    Term::Var(id) => Term::Var(*renamed.entry(*id).or_insert_with(|| vars.fresh())),
                })
                .collect();
            Literal::new(lit.name.clone(), args)
        })
        .collect();
    Clause::new(clause.id, literals)
}

/// Answers ground queries against a knowledge base by refutation
/// resolution (spec.md §4.G). Depth- and deadline-bounded, single
/// threaded, deterministic given KB insertion order.
#[derive(Debug, Default)]
pub struct Prover;

impl Prover {
    pub fn new() -> Self {
        Self
    }

    /// `ask(kb, α)`: attempts to refute `¬α` against `kb` (spec.md
    /// §4.G). The first step is unrolled by hand here because the
    /// initial "clause" — the singleton `{¬α}` — never lived in the
    /// knowledge base and so needs no canonical-id bookkeeping before
    /// its first expansion.
    pub fn ask(&self, kb: &KnowledgeBase, query: &Literal, vars: &mut VarGen) -> bool {
        let deadline = Instant::now() + TIMEOUT;

        if !kb.contains_name(&query.name) {
            return false;
        }

        for occ in kb.occurrences(&query.name) {
            let p = &occ.clause.literals[occ.index];
            if unify_args(&query.args, &p.args, &Substitution::new()).is_none() {
                continue;
            }

            // Deep-copy p's containing clause and standardize its
            // variables apart (spec.md §4.F: "the fetched KB clause (a
            // fresh copy) has its variables renamed").
            let mut r = standardize(&occ.clause, vars);
            let Some(sigma) =
                unify_args(&r.literals[occ.index].args, &query.args, &Substitution::new())
            else {
                continue;
            };
            r.remove(occ.index);
            let r = subst_clause(&sigma, &r);

            if r.is_empty() {
                return true;
            }

            let mut seen = HashSet::new();
            if self.resolution(kb, r, &mut seen, 0, deadline, vars) {
                return true;
            }
        }

        false
    }

    /// `resolution(kb, C, seen, depth, deadline)` (spec.md §4.G).
    fn resolution(
        &self,
        kb: &KnowledgeBase,
        c: Clause,
        seen: &mut HashSet<Vec<CanonicalLiteral>>,
        depth: u32,
        deadline: Instant,
        vars: &mut VarGen,
    ) -> bool {
        if depth > DEPTH_LIMIT || Instant::now() > deadline {
            return false;
        }
        if c.is_empty() {
            return true;
        }

        let id = canonical_clause(&c);
        if seen.contains(&id) {
            return false;
        }
        seen.insert(id);

        let l = c.literals[0].clone();
        let complement = negate(&l.name);
        if !kb.contains_name(&complement) {
            return false;
        }

        for occ in kb.occurrences(&complement) {
            let p = &occ.clause.literals[occ.index];
            if unify_complementary(&l, p).is_none() {
                continue;
            }

            // Both the fetched KB clause (R) and the current clause
            // (C') are standardized apart here: R is shared-immutable
            // in the knowledge base and may be refetched and resolved
            // against again later in this same search, so its variables
            // need fresh names on every use, exactly like C' (spec.md
            // §4.F: "Before each resolution step, the fetched KB clause
            // ... has its variables renamed to fresh symbols").
            let mut r = standardize(&occ.clause, vars);
            let mut c_prime = standardize(&c, vars);

            let Some(sigma) =
                unify_complementary(&r.literals[occ.index], &c_prime.literals[0])
            else {
                continue;
            };

            r.remove(occ.index);
            c_prime.remove(0);

            // sigma is applied to both R and C' before they're merged —
            // R's own free variables must be materialized too, not just
            // C''s, or a later step could unify against R's stale,
            // unbound variable instead of the binding this step chose.
            let r = subst_clause(&sigma, &r);
            let mut c_prime = subst_clause(&sigma, &c_prime);
            c_prime.append(r);
            c_prime.factor(canonical_literal);

            if self.resolution(kb, c_prime, seen, depth + 1, deadline, vars) {
                return true;
            }
        }

        false
    }
}
