use std::fmt::{self, Display};
use std::rc::Rc;

use super::term::Term;

/// A literal: a predicate occurrence, possibly negated.
///
/// `name` already carries the leading `-` for a negated literal (spec.md
/// §3), so that [`negate`] is a simple prefix toggle and the knowledge
/// base can index purely by `name` without a separate sign field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub name: Rc<str>,
    pub args: Vec<Term>,
}

impl Literal {
    pub fn new(name: Rc<str>, args: Vec<Term>) -> Self {
        Self { name, args }
    }

    pub fn is_negated(&self) -> bool {
        self.name.starts_with('-')
    }

    /// The predicate name with any leading `-` stripped.
    pub fn base_name(&self) -> &str {
        self.name.strip_prefix('-').unwrap_or(&self.name)
    }

    /// A literal with the complementary name, same arguments.
    pub fn negated(&self) -> Literal {
        Literal { name: negate(&self.name), args: self.args.clone() }
    }
}

/// Toggles the leading `-` sign prefix of a literal name. Involutive:
/// `negate(negate(name)) == name` (spec.md §8, testable property 7).
pub fn negate(name: &str) -> Rc<str> {
    match name.strip_prefix('-') {
        Some(rest) => Rc::from(rest),
        None => Rc::from(format!("-{name}").as_str()),
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negated() {
            write!(f, "~{}(", self.base_name())?;
        } else {
            write!(f, "{}(", self.name)?;
        }
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")
    }
}
