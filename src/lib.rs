/// Expression trees: terms, literals, clauses and the pre-CNF sentence AST.
pub mod expr;

/// Parsing: lexer, token stream and recursive-descent parser for the surface syntax.
pub mod parser;

/// CNF normalization and clause splitting.
pub mod nf;

/// Unification and substitution over terms.
pub mod uni;

/// Knowledge base indexing and the resolution prover.
pub mod res;

/// Small shared utilities (id counters).
pub mod util;

use std::rc::Rc;

use expr::{ConstTable, VarGen};
use parser::{ParseError, Parser};
use res::{KnowledgeBase, Prover};
use util::Counter;

/// Top-level handle to one logical session: a constant table, a variable
/// generator shared by parsing and standardization, a clause-id counter,
/// and the knowledge base that `tell` populates and `ask` queries.
///
/// This is the thing a driver owns; `tell`/`ask` are the only two entry
/// points a caller needs.
pub struct Engine {
    consts: ConstTable,
    vars: VarGen,
    clause_ids: Counter,
    kb: KnowledgeBase,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            consts: ConstTable::new(),
            vars: VarGen::new(),
            clause_ids: Counter::new(),
            kb: KnowledgeBase::new(),
        }
    }

    /// Parses `sentence`, normalizes it to CNF, splits it into clauses and
    /// indexes every clause into the knowledge base. Returns the parse
    /// error if the sentence is unusable; the knowledge base is left
    /// unchanged in that case.
    pub fn tell(&mut self, sentence: &str) -> Result<(), ParseError> {
        let ast = Parser::new(sentence, &mut self.consts, &mut self.vars).parse_sentence()?;
        let cnf = nf::to_cnf(ast);
        for clause in nf::split_clauses(cnf, &mut self.clause_ids) {
            self.kb.learn(Rc::new(clause));
        }
        Ok(())
    }

    /// Parses a single ground literal and decides whether it is entailed
    /// by the knowledge base via refutation resolution.
    pub fn ask(&mut self, query: &str) -> Result<bool, ParseError> {
        let literal = Parser::new(query, &mut self.consts, &mut self.vars).parse_literal()?;
        let prover = Prover::new();
        Ok(prover.ask(&self.kb, &literal, &mut self.vars))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
