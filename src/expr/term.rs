use std::collections::HashMap;
use std::fmt::{self, Display};
use std::rc::Rc;

/// Identity of a bound variable. Two [`Term::Var`]s are the same variable
/// iff their `VarId`s compare equal — spelling plays no role once parsing
/// has resolved a name to an id (see [`crate::parser::Parser`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(u64);

impl Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{}", self.0)
    }
}

/// Hands out fresh [`VarId`]s from one monotonically increasing counter.
///
/// Shared by the parser (each new variable spelling encountered within a
/// sentence gets a fresh id) and by standardization-apart (each resolution
/// step renames a clause's variables via fresh ids drawn from here). A
/// single shared counter is what makes freshness an invariant of the type
/// rather than a convention about generated spellings — see `SPEC_FULL.md`
/// §4.F.
#[derive(Debug, Default)]
pub struct VarGen {
    next: u64,
}

impl VarGen {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn fresh(&mut self) -> VarId {
        let id = self.next;
        self.next += 1;
        VarId(id)
    }
}

/// A term: either an interned constant or a variable.
///
/// Arguments in this logic are never compound (no function symbols beyond
/// 0-ary constants) — spec.md's grammar only admits `VARIABLE | CONSTANT`
/// as a `term`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Const(Rc<str>),
    Var(VarId),
}

impl Term {
    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Const(c) => write!(f, "{c}"),
            Term::Var(v) => write!(f, "{v}"),
        }
    }
}

/// Interns constant spellings so that every `Term::Const` sharing a
/// spelling across the knowledge base is the same `Rc<str>` — spec.md §3:
/// "constants sharing the same spelling across the KB are the same
/// object."
#[derive(Debug, Default)]
pub struct ConstTable {
    table: HashMap<Rc<str>, Rc<str>>,
}

impl ConstTable {
    pub fn new() -> Self {
        Self { table: HashMap::new() }
    }

    pub fn intern(&mut self, spelling: &str) -> Rc<str> {
        if let Some(existing) = self.table.get(spelling) {
            return existing.clone();
        }
        let rc: Rc<str> = Rc::from(spelling);
        self.table.insert(rc.clone(), rc.clone());
        rc
    }
}
