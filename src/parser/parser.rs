use std::collections::HashMap;

use super::error::ParseError;
use super::lexer::Lexer;
use super::token::{TKind, Token};
use crate::expr::{ConstTable, Literal, Sentence, Term, VarGen};

/// Recursive-descent parser for the surface syntax (spec.md §4.A, §6).
///
/// Holds a fresh per-sentence variable symbol table: two occurrences of
/// the same spelling within one call to [`Parser::parse_sentence`] or
/// [`Parser::parse_literal`] resolve to the same [`crate::expr::VarId`],
/// but two different calls never share one, even if spelled the same
/// (spec.md §4.F, "standardized apart" starts at the KB boundary).
pub struct Parser<'a, 'c, 'v> {
    lexer: Lexer<'a>,
    cur: Option<Token>,
    consts: &'c mut ConstTable,
    vars: &'v mut VarGen,
    locals: HashMap<String, crate::expr::VarId>,
}

impl<'a, 'c, 'v> Parser<'a, 'c, 'v> {
    pub fn new(text: &'a str, consts: &'c mut ConstTable, vars: &'v mut VarGen) -> Self {
        let mut lexer = Lexer::new(text);
        let cur = lexer.next_token();
        Self { lexer, cur, consts, vars, locals: HashMap::new() }
    }

    fn advance(&mut self) -> Option<Token> {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.cur, next)
    }

    fn peek_kind(&self) -> TKind {
        self.cur.as_ref().map(|t| t.kind).unwrap_or(TKind::Eof)
    }

    fn coord(&self) -> super::coord::Coord {
        self.cur.as_ref().map(|t| t.at).unwrap_or_default()
    }

    fn expect(&mut self, kind: TKind, what: &str) -> Result<Token, ParseError> {
        if self.peek_kind() == kind {
            Ok(self.advance().unwrap())
        } else {
            Err(ParseError::new(self.coord(), format!("expected {what}")))
        }
    }

    /// Parses a full sentence, consuming the whole input. Top-level entry
    /// point for `tell` (spec.md §4.A).
    pub fn parse_sentence(&mut self) -> Result<Sentence, ParseError> {
        self.locals.clear();
        let s = self.implication()?;
        if self.peek_kind() != TKind::Eof {
            return Err(ParseError::new(self.coord(), "unexpected trailing input"));
        }
        Ok(s)
    }

    /// Parses a single literal, for a query line (spec.md §6: "one query
    /// sentence each (a single literal)").
    pub fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        self.locals.clear();
        let lit = self.literal()?;
        if self.peek_kind() != TKind::Eof {
            return Err(ParseError::new(self.coord(), "unexpected trailing input"));
        }
        Ok(lit)
    }

    /// Lowest precedence: `=>`, left-associative (spec.md §4.A).
    fn implication(&mut self) -> Result<Sentence, ParseError> {
        let mut left = self.disjunction()?;
        while self.peek_kind() == TKind::Implies {
            self.advance();
            let right = self.disjunction()?;
            left = Sentence::implies(left, right);
        }
        Ok(left)
    }

    fn disjunction(&mut self) -> Result<Sentence, ParseError> {
        let mut left = self.conjunction()?;
        while self.peek_kind() == TKind::Or {
            self.advance();
            let right = self.conjunction()?;
            left = Sentence::or(left, right);
        }
        Ok(left)
    }

    fn conjunction(&mut self) -> Result<Sentence, ParseError> {
        let mut left = self.negation()?;
        while self.peek_kind() == TKind::And {
            self.advance();
            let right = self.negation()?;
            left = Sentence::and(left, right);
        }
        Ok(left)
    }

    /// Highest precedence, prefix, right-associative: `~`.
    fn negation(&mut self) -> Result<Sentence, ParseError> {
        if self.peek_kind() == TKind::Not {
            self.advance();
            let inner = self.negation()?;
            return Ok(Sentence::not(inner));
        }
        self.atom()
    }

    fn atom(&mut self) -> Result<Sentence, ParseError> {
        match self.peek_kind() {
            TKind::LPar => {
                self.advance();
                let inner = self.implication()?;
                self.expect(TKind::RPar, "')'")?;
                Ok(inner)
            }
            TKind::Predicate => Ok(Sentence::Literal(self.literal()?)),
            _ => Err(ParseError::new(self.coord(), "expected a literal or '('")),
        }
    }

    /// `literal := PREDICATE term (',' term)* ')'`. The `PREDICATE` token
    /// already absorbed the opening `(` (spec.md §6).
    fn literal(&mut self) -> Result<Literal, ParseError> {
        let name_tok = self.expect(TKind::Predicate, "a predicate")?;
        let mut args = vec![self.term()?];
        while self.peek_kind() == TKind::Comma {
            self.advance();
            args.push(self.term()?);
        }
        self.expect(TKind::RPar, "')'")?;
        Ok(Literal::new(self.consts.intern(&name_tok.text), args))
    }

    fn term(&mut self) -> Result<Term, ParseError> {
        match self.peek_kind() {
            TKind::Constant => {
                let tok = self.advance().unwrap();
                Ok(Term::Const(self.consts.intern(&tok.text)))
            }
            TKind::Variable => {
                let tok = self.advance().unwrap();
                let id = *self
                    .locals
                    .entry(tok.text)
                    .or_insert_with(|| self.vars.fresh());
                Ok(Term::Var(id))
            }
            _ => Err(ParseError::new(self.coord(), "expected a variable or constant")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(src: &str) -> Result<Sentence, ParseError> {
        let mut consts = ConstTable::new();
        let mut vars = VarGen::new();
        Parser::new(src, &mut consts, &mut vars).parse_sentence()
    }

    #[test]
    fn parses_a_ground_literal() {
        let s = parse("Parent(Tom,Bob)").unwrap();
        match s {
            Sentence::Literal(lit) => {
                assert_eq!(&*lit.name, "Parent");
                assert_eq!(lit.args.len(), 2);
            }
            _ => panic!("expected a literal"),
        }
    }

    #[test]
    fn implication_desugars_to_or_of_not() {
        let a = parse("P(x)=>Q(x)").unwrap();
        let b = parse("~P(x)|Q(x)").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_variable_spelling_is_one_id_within_a_sentence() {
        let mut consts = ConstTable::new();
        let mut vars = VarGen::new();
        let s = Parser::new("P(x,x)", &mut consts, &mut vars)
            .parse_sentence()
            .unwrap();
        match s {
            Sentence::Literal(lit) => assert_eq!(lit.args[0], lit.args[1]),
            _ => panic!("expected a literal"),
        }
    }

    #[test]
    fn same_spelling_across_sentences_gets_different_ids() {
        let mut consts = ConstTable::new();
        let mut vars = VarGen::new();
        let first = match Parser::new("P(x)", &mut consts, &mut vars).parse_sentence().unwrap() {
            Sentence::Literal(lit) => lit.args[0].clone(),
            _ => unreachable!(),
        };
        let second = match Parser::new("P(x)", &mut consts, &mut vars).parse_sentence().unwrap() {
            Sentence::Literal(lit) => lit.args[0].clone(),
            _ => unreachable!(),
        };
        assert_ne!(first, second);
    }

    #[test]
    fn precedence_and_binds_tighter_than_or() {
        let a = parse("P(x)|Q(x)&R(x)").unwrap();
        let b = parse("P(x)|(Q(x)&R(x))").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn double_negation_collapses() {
        let a = parse("~~P(x)").unwrap();
        let b = parse("P(x)").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn trailing_garbage_is_a_syntax_error() {
        assert!(parse("P(x) Q(x)").is_err());
    }

    #[test]
    fn unclosed_paren_is_a_syntax_error() {
        assert!(parse("(P(x)").is_err());
    }
}
