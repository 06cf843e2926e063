use std::collections::HashMap;
use std::rc::Rc;

use crate::expr::Clause;

/// One literal occurrence in the knowledge base: the clause it lives in,
/// and which literal within that clause it is (spec.md §3's linked-list
/// model tracks a literal occurrence directly; this crate tracks it as a
/// clause plus an index into its `Vec`).
#[derive(Debug, Clone)]
pub struct Occurrence {
    pub clause: Rc<Clause>,
    pub index: usize,
}

/// Indexes every literal occurrence by its (sign-prefixed) name, so the
/// prover can jump straight to the clauses that could possibly resolve
/// against a given literal instead of scanning the whole knowledge base.
///
/// Grounded in `rsproof::src::res::kb::KnowledgeBase`'s positive/negative
/// multimap, collapsed to a single map keyed by the already-signed
/// literal name (spec.md §3: positive and negative occurrences sit under
/// distinct keys, `"P"` and `"-P"`, so one map suffices where the teacher
/// needs separate `by_pos`/`by_neg` tables). Buckets are `Vec`s, not
/// sets, to preserve `tell`-order (spec.md §5: "the KB-occurrence order
/// is the insertion order from `tell`").
#[derive(Debug, Default)]
pub struct KnowledgeBase {
    by_name: HashMap<Rc<str>, Vec<Occurrence>>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self { by_name: HashMap::new() }
    }

    /// Indexes every literal of `clause` under its own name.
    pub fn learn(&mut self, clause: Rc<Clause>) {
        for (index, lit) in clause.literals.iter().enumerate() {
            self.by_name
                .entry(lit.name.clone())
                .or_default()
                .push(Occurrence { clause: clause.clone(), index });
        }
    }

    /// Occurrences of literals named exactly `name` (sign-prefixed), in
    /// `tell` order. Empty if the name is unknown.
    pub fn occurrences(&self, name: &str) -> &[Occurrence] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }
}

#[cfg(test)]
mod test {
    use std::rc::Rc as StdRc;

    use super::*;
    use crate::expr::Literal;

    fn clause(id: u64, names: &[&str]) -> StdRc<Clause> {
        let lits = names
            .iter()
            .map(|n| Literal::new(StdRc::from(*n), vec![]))
            .collect();
        StdRc::new(Clause::new(id, lits))
    }

    #[test]
    fn indexes_by_every_literal_occurrence() {
        let mut kb = KnowledgeBase::new();
        kb.learn(clause(0, &["P", "-Q", "P"]));
        assert_eq!(kb.occurrences("P").len(), 2);
        assert_eq!(kb.occurrences("-Q").len(), 1);
        assert!(kb.occurrences("-P").is_empty());
    }

    #[test]
    fn preserves_tell_order_within_a_bucket() {
        let mut kb = KnowledgeBase::new();
        let c0 = clause(0, &["P"]);
        let c1 = clause(1, &["P"]);
        kb.learn(c0.clone());
        kb.learn(c1.clone());
        let occ = kb.occurrences("P");
        assert_eq!(occ[0].clause.id, c0.id);
        assert_eq!(occ[1].clause.id, c1.id);
    }

    #[test]
    fn unknown_name_has_no_occurrences() {
        let kb = KnowledgeBase::new();
        assert!(!kb.contains_name("P"));
        assert!(kb.occurrences("P").is_empty());
    }
}
