use std::str::Chars;

use super::coord::Coord;
use super::token::{TKind, Token};

/// The lexical analyzer for the surface syntax (spec.md §6).
pub struct Lexer<'a> {
    pos: Coord,
    buf: String,
    la: Option<char>,
    chars: Chars<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut chars = text.chars();
        let la = chars.next();
        Self { pos: Coord::start(), buf: String::new(), la, chars }
    }

    /// Advances past the current lookahead character.
    fn shift(&mut self) {
        let Some(c) = self.la else { return };
        if c == '\n' {
            self.pos.newline();
        } else {
            self.pos.advance();
        }
        self.la = self.chars.next();
    }

    fn push_shift(&mut self) {
        if let Some(c) = self.la {
            self.buf.push(c);
        }
        self.shift();
    }

    /// Whitespace is ignored wherever it appears between tokens (spec.md
    /// §6: "Whitespace inside sentences is ignored prior to parsing") —
    /// handled here, one character at a time, rather than as a separate
    /// pre-pass.
    fn skip_whitespace(&mut self) {
        while matches!(self.la, Some(c) if c.is_whitespace()) {
            self.shift();
        }
    }

    fn ident(&mut self) -> (String, bool) {
        let mut strictly_predicate_shaped = matches!(self.la, Some(c) if c.is_ascii_uppercase());
        while let Some(c) = self.la {
            if c.is_ascii_alphanumeric() || c == '_' {
                if !c.is_ascii_alphabetic() {
                    strictly_predicate_shaped = false;
                }
                self.push_shift();
            } else {
                break;
            }
        }
        (self.buf.clone(), strictly_predicate_shaped)
    }

    /// Reads the next token, or `None` at end of input. Unrecognized
    /// characters come back as [`TKind::Illegal`] rather than panicking —
    /// the parser is what decides a sentence is unusable (spec.md §4.A).
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        self.buf.clear();
        let at = self.pos;

        let (kind, text) = match self.la {
            None => return None,

            Some(c) if c.is_ascii_lowercase() => {
                self.push_shift();
                (TKind::Variable, self.buf.clone())
            }

            Some(c) if c.is_ascii_uppercase() || c == '_' => {
                let (text, predicate_shaped) = self.ident();
                if predicate_shaped && self.la == Some('(') {
                    self.shift();
                    (TKind::Predicate, text)
                } else {
                    (TKind::Constant, text)
                }
            }

            Some(',') => {
                self.push_shift();
                (TKind::Comma, self.buf.clone())
            }
            Some('(') => {
                self.push_shift();
                (TKind::LPar, self.buf.clone())
            }
            Some(')') => {
                self.push_shift();
                (TKind::RPar, self.buf.clone())
            }
            Some('~') => {
                self.push_shift();
                (TKind::Not, self.buf.clone())
            }
            Some('&') => {
                self.push_shift();
                (TKind::And, self.buf.clone())
            }
            Some('|') => {
                self.push_shift();
                (TKind::Or, self.buf.clone())
            }
            Some('=') => {
                self.push_shift();
                if self.la == Some('>') {
                    self.push_shift();
                    (TKind::Implies, self.buf.clone())
                } else {
                    (TKind::Illegal, self.buf.clone())
                }
            }

            Some(_) => {
                self.push_shift();
                (TKind::Illegal, self.buf.clone())
            }
        };

        Some(Token { kind, text, at })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn kinds(src: &str) -> Vec<TKind> {
        let mut lex = Lexer::new(src);
        let mut out = Vec::new();
        while let Some(tok) = lex.next_token() {
            out.push(tok.kind);
        }
        out
    }

    #[test]
    fn predicate_absorbs_open_paren() {
        let mut lex = Lexer::new("Foo(x)");
        let tok = lex.next_token().unwrap();
        assert_eq!(tok.kind, TKind::Predicate);
        assert_eq!(tok.text, "Foo");
        assert_eq!(lex.next_token().unwrap().kind, TKind::Variable);
        assert_eq!(lex.next_token().unwrap().kind, TKind::RPar);
    }

    #[test]
    fn constant_not_followed_by_paren() {
        let mut lex = Lexer::new("Alice");
        let tok = lex.next_token().unwrap();
        assert_eq!(tok.kind, TKind::Constant);
        assert_eq!(tok.text, "Alice");
        assert!(lex.next_token().is_none());
    }

    #[test]
    fn variable_is_a_single_letter() {
        let mut lex = Lexer::new("xy");
        assert_eq!(lex.next_token().unwrap().kind, TKind::Variable);
        assert_eq!(lex.next_token().unwrap().kind, TKind::Variable);
    }

    #[test]
    fn whitespace_is_ignored_between_tokens() {
        assert_eq!(kinds("Foo( x , y )"), kinds("Foo(x,y)"));
    }

    #[test]
    fn implies_requires_both_characters() {
        let mut lex = Lexer::new("=>");
        assert_eq!(lex.next_token().unwrap().kind, TKind::Implies);

        let mut lex = Lexer::new("=x");
        assert_eq!(lex.next_token().unwrap().kind, TKind::Illegal);
    }
}
